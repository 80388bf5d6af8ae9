#![allow(clippy::unwrap_used)]
// Integration tests for `ArmoryClient` using wiremock.

use serde_json::json;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use armory_api::types::WeaponBody;
use armory_api::{ArmoryClient, Error};

// ── Helpers ─────────────────────────────────────────────────────────

async fn setup() -> (MockServer, ArmoryClient) {
    let server = MockServer::start().await;
    let client = ArmoryClient::with_client(&server.uri(), reqwest::Client::new()).unwrap();
    (server, client)
}

fn weapon_json(id: u64, name: &str) -> serde_json::Value {
    json!({
        "id": id,
        "name": name,
        "type": "Pistol",
        "manufacturer": "Glock",
        "caliber": "9mm",
        "magazineCapacity": 17,
        "fireRate": 1100,
        "ammoCount": 34
    })
}

fn body() -> WeaponBody {
    WeaponBody {
        id: None,
        name: "G17".into(),
        kind: "Pistol".into(),
        manufacturer: "Glock".into(),
        caliber: "9mm".into(),
        magazine_capacity: 17,
        fire_rate: 1100,
        ammo_count: 34,
        images: None,
    }
}

// ── Weapons ─────────────────────────────────────────────────────────

#[tokio::test]
async fn test_get_weapon() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/Weapon/3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(weapon_json(3, "G17")))
        .mount(&server)
        .await;

    let weapon = client.get_weapon(3).await.unwrap();
    assert_eq!(weapon.id, 3);
    assert_eq!(weapon.name, "G17");
    assert_eq!(weapon.magazine_capacity, 17);
    assert_eq!(weapon.images, None);
}

#[tokio::test]
async fn test_get_weapon_not_found() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/Weapon/99"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let err = client.get_weapon(99).await.unwrap_err();
    assert!(err.is_not_found(), "expected 404, got: {err:?}");
}

#[tokio::test]
async fn test_get_weapon_with_bad_count_is_deserialization_error() {
    let (server, client) = setup().await;

    let mut bad = weapon_json(4, "Broken");
    bad["fireRate"] = json!("fast");

    Mock::given(method("GET"))
        .and(path("/api/Weapon/4"))
        .respond_with(ResponseTemplate::new(200).set_body_json(bad))
        .mount(&server)
        .await;

    let result = client.get_weapon(4).await;
    assert!(
        matches!(result, Err(Error::Deserialization { .. })),
        "expected Deserialization error, got: {result:?}"
    );
}

#[tokio::test]
async fn test_weapon_exists() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/Weapon/5"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/Weapon/6"))
        .respond_with(ResponseTemplate::new(200).set_body_json(weapon_json(6, "P226")))
        .mount(&server)
        .await;

    assert!(!client.weapon_exists(5).await.unwrap());
    assert!(client.weapon_exists(6).await.unwrap());
}

#[tokio::test]
async fn test_list_weapons_preserves_order() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/Weapon"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            weapon_json(9, "Last"),
            weapon_json(1, "First"),
        ])))
        .mount(&server)
        .await;

    let weapons = client.list_weapons().await.unwrap();
    let ids: Vec<u64> = weapons.iter().map(|w| w.id).collect();
    assert_eq!(ids, vec![9, 1]);
}

#[tokio::test]
async fn test_list_weapons_empty() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/Weapon"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    assert!(client.list_weapons().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_create_weapon_sends_camel_case_body() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/api/Weapon"))
        .and(body_json(json!({
            "name": "G17",
            "type": "Pistol",
            "manufacturer": "Glock",
            "caliber": "9mm",
            "magazineCapacity": 17,
            "fireRate": 1100,
            "ammoCount": 34
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({ "id": 42 })))
        .expect(1)
        .mount(&server)
        .await;

    assert_eq!(client.create_weapon(&body()).await.unwrap(), 42);
}

#[tokio::test]
async fn test_create_weapon_requires_created_status() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/api/Weapon"))
        .respond_with(ResponseTemplate::new(400).set_body_string("bad payload"))
        .mount(&server)
        .await;

    let err = client.create_weapon(&body()).await.unwrap_err();
    match err {
        Error::Status { status, body } => {
            assert_eq!(status, 400);
            assert_eq!(body, "bad payload");
        }
        other => panic!("expected Status error, got: {other:?}"),
    }
}

#[tokio::test]
async fn test_update_weapon_accepts_no_content() {
    let (server, client) = setup().await;

    Mock::given(method("PUT"))
        .and(path("/api/Weapon/8"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let mut update = body();
    update.id = Some(8);
    client.update_weapon(8, &update).await.unwrap();
}

#[tokio::test]
async fn test_delete_weapon_missing() {
    let (server, client) = setup().await;

    Mock::given(method("DELETE"))
        .and(path("/api/Weapon/12"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let err = client.delete_weapon(12).await.unwrap_err();
    assert_eq!(err.status(), Some(404));
}

// ── Assistant ───────────────────────────────────────────────────────

#[tokio::test]
async fn test_classify_returns_raw_body() {
    let (server, client) = setup().await;

    let raw = r#"{"tags":[{"tag":"rifle","confidence":91.2}]}"#;

    Mock::given(method("GET"))
        .and(path("/api/Imagga/classify"))
        .and(query_param("keyword", "rifle"))
        .respond_with(ResponseTemplate::new(200).set_body_string(raw))
        .mount(&server)
        .await;

    assert_eq!(client.classify("rifle").await.unwrap(), raw);
}

#[tokio::test]
async fn test_classify_encodes_keyword() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/Imagga/classify"))
        .and(query_param("keyword", "sniper rifle&scope"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{}"))
        .expect(1)
        .mount(&server)
        .await;

    client.classify("sniper rifle&scope").await.unwrap();
}

#[tokio::test]
async fn test_chat() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/api/ChatGPT"))
        .and(body_json(json!({ "Message": "describe the G17" })))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "response": "A polymer pistol." })),
        )
        .mount(&server)
        .await;

    assert_eq!(
        client.chat("describe the G17").await.unwrap(),
        "A polymer pistol."
    );
}

#[tokio::test]
async fn test_chat_missing_response_is_empty() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/api/ChatGPT"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&server)
        .await;

    assert_eq!(client.chat("anything").await.unwrap(), "");
}

#[tokio::test]
async fn test_connection_refused_is_transport_error() {
    let client =
        ArmoryClient::with_client("http://127.0.0.1:1", reqwest::Client::new()).unwrap();

    let err = client.list_weapons().await.unwrap_err();
    assert!(err.is_connect(), "expected connect error, got: {err:?}");
}
