use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

// ── WeaponId ─────────────────────────────────────────────────────────

/// Server-assigned weapon identifier. Always positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u64", into = "u64")]
pub struct WeaponId(u64);

impl WeaponId {
    /// Returns `None` for zero.
    pub const fn new(raw: u64) -> Option<Self> {
        if raw == 0 { None } else { Some(Self(raw)) }
    }

    pub const fn get(self) -> u64 {
        self.0
    }
}

impl TryFrom<u64> for WeaponId {
    type Error = CoreError;

    fn try_from(raw: u64) -> Result<Self, Self::Error> {
        Self::new(raw).ok_or_else(|| CoreError::InvalidInput {
            field: "id".into(),
            reason: "Weapon ID must be a positive number.".into(),
        })
    }
}

impl From<WeaponId> for u64 {
    fn from(id: WeaponId) -> Self {
        id.0
    }
}

impl fmt::Display for WeaponId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for WeaponId {
    type Err = CoreError;

    /// Parse user input the way the weapon form validates it.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(CoreError::InvalidInput {
                field: "id".into(),
                reason: "Please enter a valid weapon ID.".into(),
            });
        }
        let raw: u64 = trimmed.parse().map_err(|_| CoreError::InvalidInput {
            field: "id".into(),
            reason: "Please enter a valid numeric weapon ID.".into(),
        })?;
        Self::try_from(raw)
    }
}

// ── WeaponRecord ─────────────────────────────────────────────────────

/// One weapon as stored by the backend.
///
/// Constructed only from a server response; never mutated in place. To
/// change a weapon, derive a [`WeaponDraft`] and submit an update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeaponRecord {
    pub id: WeaponId,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub manufacturer: String,
    pub caliber: String,
    pub magazine_capacity: u32,
    pub fire_rate: u32,
    pub ammo_count: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub images: Option<String>,
}

impl WeaponRecord {
    /// The record's field set, without the id.
    pub fn draft(&self) -> WeaponDraft {
        WeaponDraft {
            name: self.name.clone(),
            kind: self.kind.clone(),
            manufacturer: self.manufacturer.clone(),
            caliber: self.caliber.clone(),
            magazine_capacity: self.magazine_capacity,
            fire_rate: self.fire_rate,
            ammo_count: self.ammo_count,
            images: self.images.clone(),
        }
    }

    /// Multi-line summary used by detail views.
    pub fn details(&self) -> String {
        format!(
            "Id: {}\nName: {}\nType: {}\nManufacturer: {}\nCaliber: {}\n\
             Magazine Capacity: {}\nFire Rate: {}\nAmmo Count: {}{}",
            self.id,
            self.name,
            self.kind,
            self.manufacturer,
            self.caliber,
            self.magazine_capacity,
            self.fire_rate,
            self.ammo_count,
            self.images
                .as_deref()
                .map(|url| format!("\nImages: {url}"))
                .unwrap_or_default(),
        )
    }
}

// ── WeaponDraft ──────────────────────────────────────────────────────

/// The field set submitted on create and update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeaponDraft {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub manufacturer: String,
    pub caliber: String,
    pub magazine_capacity: u32,
    pub fire_rate: u32,
    pub ammo_count: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub images: Option<String>,
}
