// ── Wire <-> domain conversion ──
//
// `armory-api` speaks wire types; everything above it speaks the domain
// model. These impls are the only place the two meet.

use armory_api::types::{WeaponBody, WeaponResponse};

use crate::error::CoreError;
use crate::model::{WeaponDraft, WeaponId, WeaponRecord};

impl TryFrom<WeaponResponse> for WeaponRecord {
    type Error = CoreError;

    fn try_from(w: WeaponResponse) -> Result<Self, Self::Error> {
        let id = WeaponId::new(w.id).ok_or_else(|| CoreError::InvalidRecord {
            message: format!("server returned non-positive id {}", w.id),
        })?;
        Ok(Self {
            id,
            name: w.name,
            kind: w.kind,
            manufacturer: w.manufacturer,
            caliber: w.caliber,
            magazine_capacity: w.magazine_capacity,
            fire_rate: w.fire_rate,
            ammo_count: w.ammo_count,
            images: w.images.filter(|url| !url.is_empty()),
        })
    }
}

/// Build the request body for a create (`id = None`) or update.
pub fn draft_to_body(draft: &WeaponDraft, id: Option<WeaponId>) -> WeaponBody {
    WeaponBody {
        id: id.map(WeaponId::get),
        name: draft.name.clone(),
        kind: draft.kind.clone(),
        manufacturer: draft.manufacturer.clone(),
        caliber: draft.caliber.clone(),
        magazine_capacity: draft.magazine_capacity,
        fire_rate: draft.fire_rate,
        ammo_count: draft.ammo_count,
        images: draft.images.clone(),
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use pretty_assertions::assert_eq;

    use super::*;

    fn response(id: u64) -> WeaponResponse {
        WeaponResponse {
            id,
            name: "Remington 870".into(),
            kind: "Shotgun".into(),
            manufacturer: "Remington".into(),
            caliber: "12 gauge".into(),
            magazine_capacity: 7,
            fire_rate: 0,
            ammo_count: 14,
            images: Some(String::new()),
        }
    }

    #[test]
    fn response_converts_and_drops_empty_images() {
        let record = WeaponRecord::try_from(response(2)).unwrap();
        assert_eq!(record.id.get(), 2);
        assert_eq!(record.kind, "Shotgun");
        assert_eq!(record.images, None);
    }

    #[test]
    fn zero_id_is_an_invalid_record() {
        let err = WeaponRecord::try_from(response(0)).unwrap_err();
        assert!(matches!(err, CoreError::InvalidRecord { .. }));
    }

    #[test]
    fn update_body_carries_the_id() {
        let record = WeaponRecord::try_from(response(9)).unwrap();
        let body = draft_to_body(&record.draft(), Some(record.id));
        assert_eq!(body.id, Some(9));
        assert_eq!(body.caliber, "12 gauge");

        let create = draft_to_body(&record.draft(), None);
        assert_eq!(create.id, None);
    }
}
