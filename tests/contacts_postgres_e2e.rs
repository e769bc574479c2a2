//! End-to-end tests against PostgreSQL
//!
//! These spin up a real PostgreSQL database using testcontainers, run the
//! migrations, and exercise the contacts endpoints. They need Docker:
//! `cargo test -- --ignored`.

mod common;

use axum::http::{Method, StatusCode};
use serde_json::{json, Value};
use uuid::Uuid;

use common::{ContactResponse, PostgresTestApp};

#[tokio::test]
#[ignore = "requires docker"]
async fn test_contact_lifecycle() {
    let app = PostgresTestApp::new().await;

    // Create
    let (status, body) = app
        .send_json(
            Method::POST,
            "/api/contacts",
            Some(json!({"name": "Ada", "email": "ada@x.com"})),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    let created: ContactResponse = serde_json::from_value(body).unwrap();
    assert!(Uuid::parse_str(&created.id).is_ok());
    assert!(created.phone.is_none());

    // Update merges
    let uri = format!("/api/contacts/{}", created.id);
    let (status, body) = app
        .send_json(Method::PUT, &uri, Some(json!({"phone": "555-1234"})))
        .await;
    assert_eq!(status, StatusCode::OK);
    let updated: ContactResponse = serde_json::from_value(body).unwrap();
    assert_eq!(updated.name.as_deref(), Some("Ada"));
    assert_eq!(updated.email.as_deref(), Some("ada@x.com"));
    assert_eq!(updated.phone.as_deref(), Some("555-1234"));

    // List includes it
    let (_, body) = app.send_json(Method::GET, "/api/contacts", None).await;
    let listed: Vec<ContactResponse> = serde_json::from_value(body).unwrap();
    assert_eq!(listed, vec![updated.clone()]);

    // Delete returns the previous record
    let (status, body) = app.send_json(Method::DELETE, &uri, None).await;
    assert_eq!(status, StatusCode::OK);
    let deleted: ContactResponse = serde_json::from_value(body).unwrap();
    assert_eq!(deleted, updated);

    // Gone
    let (_, body) = app.send_json(Method::GET, "/api/contacts", None).await;
    assert_eq!(body, json!([]));
}

#[tokio::test]
#[ignore = "requires docker"]
async fn test_missing_ids_return_null() {
    let app = PostgresTestApp::new().await;
    let uri = format!("/api/contacts/{}", Uuid::new_v4());

    let (status, body) = app
        .send_json(Method::PUT, &uri, Some(json!({"name": "Nobody"})))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, Value::Null);

    let (status, body) = app.send_json(Method::DELETE, &uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, Value::Null);
}

#[tokio::test]
#[ignore = "requires docker"]
async fn test_list_preserves_insertion_order() {
    let app = PostgresTestApp::new().await;
    app.clear_database().await;

    for name in ["Ada", "Grace", "Linus"] {
        let (status, _) = app
            .send_json(Method::POST, "/api/contacts", Some(json!({ "name": name })))
            .await;
        assert_eq!(status, StatusCode::OK);
    }

    let (_, body) = app.send_json(Method::GET, "/api/contacts", None).await;
    let names: Vec<String> = serde_json::from_value::<Vec<ContactResponse>>(body)
        .unwrap()
        .into_iter()
        .filter_map(|c| c.name)
        .collect();
    assert_eq!(names, ["Ada", "Grace", "Linus"]);
}

#[tokio::test]
#[ignore = "requires docker"]
async fn test_store_outage_maps_to_service_unavailable() {
    let app = PostgresTestApp::new().await;
    app.pool.close().await;

    let (status, body) = app.send_json(Method::GET, "/api/contacts", None).await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["error"]["code"], "STORE_UNAVAILABLE");
}
