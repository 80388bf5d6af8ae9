// Textual form state for adding or editing a weapon.
//
// Shells collect every field as text; numeric fields are only coerced
// when the form is turned into a draft.

use serde::{Deserialize, Serialize};

use super::weapon::{WeaponDraft, WeaponRecord};
use crate::error::CoreError;

/// Raw user input for one weapon.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeaponForm {
    pub name: String,
    pub kind: String,
    pub manufacturer: String,
    pub caliber: String,
    pub magazine_capacity: String,
    pub fire_rate: String,
    pub ammo_count: String,
    pub images: String,
}

impl WeaponForm {
    /// Pre-fill an edit form from a fetched record.
    pub fn from_record(record: &WeaponRecord) -> Self {
        Self {
            name: record.name.clone(),
            kind: record.kind.clone(),
            manufacturer: record.manufacturer.clone(),
            caliber: record.caliber.clone(),
            magazine_capacity: record.magazine_capacity.to_string(),
            fire_rate: record.fire_rate.to_string(),
            ammo_count: record.ammo_count.to_string(),
            images: record.images.clone().unwrap_or_default(),
        }
    }

    /// Reset every field to empty.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Coerce the form into a draft. Fails on the first numeric field
    /// that is not a non-negative whole number.
    pub fn to_draft(&self) -> Result<WeaponDraft, CoreError> {
        let images = self.images.trim();
        Ok(WeaponDraft {
            name: self.name.clone(),
            kind: self.kind.clone(),
            manufacturer: self.manufacturer.clone(),
            caliber: self.caliber.clone(),
            magazine_capacity: coerce("Magazine Capacity", &self.magazine_capacity)?,
            fire_rate: coerce("Fire Rate", &self.fire_rate)?,
            ammo_count: coerce("Ammo Count", &self.ammo_count)?,
            images: (!images.is_empty()).then(|| images.to_owned()),
        })
    }
}

fn coerce(label: &str, raw: &str) -> Result<u32, CoreError> {
    raw.trim().parse().map_err(|_| CoreError::InvalidInput {
        field: label.to_lowercase().replace(' ', "_"),
        reason: format!("{label} must be a whole number, got '{raw}'."),
    })
}
