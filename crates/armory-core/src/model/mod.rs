// ── Domain model ──
//
// Canonical weapon types shared by the facade, the view state, and the
// CLI. Wire types stay in `armory-api`; `convert` maps between them.

pub mod form;
pub mod weapon;

pub use form::WeaponForm;
pub use weapon::{WeaponDraft, WeaponId, WeaponRecord};
