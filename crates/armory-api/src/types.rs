// Wire types for the weapon catalogue and assistant endpoints.
//
// Field names follow one canonical camelCase schema for both reads and
// writes. Integer fields accept JSON numbers or numeric strings; anything
// else fails deserialization.

use std::fmt;
use std::marker::PhantomData;

use serde::de::{self, Deserializer, Unexpected, Visitor};
use serde::{Deserialize, Serialize};

// ── Weapon ───────────────────────────────────────────────────────────

/// A weapon as returned by `GET /api/Weapon[/{id}]`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WeaponResponse {
    #[serde(deserialize_with = "count")]
    pub id: u64,
    #[serde(default, deserialize_with = "nullable_text")]
    pub name: String,
    #[serde(rename = "type", default, deserialize_with = "nullable_text")]
    pub kind: String,
    #[serde(default, deserialize_with = "nullable_text")]
    pub manufacturer: String,
    #[serde(default, deserialize_with = "nullable_text")]
    pub caliber: String,
    #[serde(deserialize_with = "count")]
    pub magazine_capacity: u32,
    #[serde(deserialize_with = "count")]
    pub fire_rate: u32,
    #[serde(deserialize_with = "count")]
    pub ammo_count: u32,
    #[serde(default)]
    pub images: Option<String>,
}

/// Request body for `POST /api/Weapon` and `PUT /api/Weapon/{id}`.
///
/// `id` is only sent on updates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeaponBody {
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub id: Option<u64>,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub manufacturer: String,
    pub caliber: String,
    pub magazine_capacity: u32,
    pub fire_rate: u32,
    pub ammo_count: u32,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub images: Option<String>,
}

/// Response body of a successful create.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct CreatedResponse {
    #[serde(deserialize_with = "count")]
    pub id: u64,
}

// ── Assistant ────────────────────────────────────────────────────────

/// Request body for `POST /api/ChatGPT`.
#[derive(Debug, Serialize)]
pub struct ChatRequest<'a> {
    #[serde(rename = "Message")]
    pub message: &'a str,
}

/// Response body of `POST /api/ChatGPT`. A missing `response` field reads
/// as an empty string.
#[derive(Debug, Deserialize)]
pub struct ChatResponse {
    #[serde(default)]
    pub response: String,
}

// ── Lenient field decoding ───────────────────────────────────────────

struct CountVisitor<T>(PhantomData<T>);

impl<T: TryFrom<u64>> Visitor<'_> for CountVisitor<T> {
    type Value = T;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a non-negative integer or a string containing one")
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<T, E> {
        T::try_from(v).map_err(|_| E::invalid_value(Unexpected::Unsigned(v), &self))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<T, E> {
        let Ok(unsigned) = u64::try_from(v) else {
            return Err(E::invalid_value(Unexpected::Signed(v), &self));
        };
        self.visit_u64(unsigned)
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<T, E> {
        let Ok(parsed) = v.trim().parse::<u64>() else {
            return Err(E::invalid_value(Unexpected::Str(v), &self));
        };
        self.visit_u64(parsed)
    }
}

/// Decode a non-negative integer from a JSON number or numeric string.
fn count<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: TryFrom<u64>,
{
    deserializer.deserialize_any(CountVisitor(PhantomData))
}

/// Decode a text field where the server may send `null`.
fn nullable_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use serde_json::json;

    use super::*;

    fn sample() -> serde_json::Value {
        json!({
            "id": 7,
            "name": "AK-47",
            "type": "Assault rifle",
            "manufacturer": "Kalashnikov Concern",
            "caliber": "7.62x39mm",
            "magazineCapacity": 30,
            "fireRate": 600,
            "ammoCount": 120,
            "images": "https://img.example/ak.png"
        })
    }

    #[test]
    fn reads_camel_case_record() {
        let w: WeaponResponse = serde_json::from_value(sample()).unwrap();
        assert_eq!(w.id, 7);
        assert_eq!(w.kind, "Assault rifle");
        assert_eq!(w.magazine_capacity, 30);
        assert_eq!(w.images.as_deref(), Some("https://img.example/ak.png"));
    }

    #[test]
    fn coerces_numeric_strings() {
        let mut v = sample();
        v["fireRate"] = json!(" 650 ");
        v["id"] = json!("7");
        let w: WeaponResponse = serde_json::from_value(v).unwrap();
        assert_eq!(w.fire_rate, 650);
        assert_eq!(w.id, 7);
    }

    #[test]
    fn rejects_non_numeric_counts() {
        for bad in [json!("lots"), json!(-1), json!(2.5), json!(true)] {
            let mut v = sample();
            v["ammoCount"] = bad.clone();
            let result = serde_json::from_value::<WeaponResponse>(v);
            assert!(result.is_err(), "accepted ammoCount = {bad}");
        }
    }

    #[test]
    fn missing_images_and_null_text_are_tolerated() {
        let mut v = sample();
        v.as_object_mut().unwrap().remove("images");
        v["caliber"] = serde_json::Value::Null;
        let w: WeaponResponse = serde_json::from_value(v).unwrap();
        assert_eq!(w.images, None);
        assert_eq!(w.caliber, "");
    }

    #[test]
    fn body_omits_absent_id_and_images() {
        let body = WeaponBody {
            id: None,
            name: "M4".into(),
            kind: "Carbine".into(),
            manufacturer: "Colt".into(),
            caliber: "5.56x45mm".into(),
            magazine_capacity: 30,
            fire_rate: 800,
            ammo_count: 90,
            images: None,
        };
        let value = serde_json::to_value(&body).unwrap();
        assert_eq!(
            value,
            json!({
                "name": "M4",
                "type": "Carbine",
                "manufacturer": "Colt",
                "caliber": "5.56x45mm",
                "magazineCapacity": 30,
                "fireRate": 800,
                "ammoCount": 90
            })
        );
    }

    #[test]
    fn chat_request_uses_message_key() {
        let value = serde_json::to_value(ChatRequest { message: "hi" }).unwrap();
        assert_eq!(value, json!({ "Message": "hi" }));
    }
}
