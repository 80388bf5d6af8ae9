// ── Notifications ──
//
// Every terminal facade operation publishes exactly one of these: the
// success variant for that operation, or `Failed`.

use crate::error::Failure;
use crate::model::{WeaponId, WeaponRecord};

/// Outcome signal broadcast to every facade subscriber.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notification {
    WeaponLoaded(WeaponRecord),
    AllWeaponsLoaded(Vec<WeaponRecord>),
    WeaponAdded(WeaponId),
    WeaponDeleted(WeaponId),
    /// Raw classification payload for a keyword search.
    KeywordFound { keyword: String, payload: String },
    /// Generated text for a prompt.
    TextGenerated { prompt: String, response: String },
    Failed(Failure),
}

impl Notification {
    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failed(_))
    }
}
