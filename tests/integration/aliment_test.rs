//! Integration tests for the aliment CRUD endpoints.

use http::StatusCode;
use serde_json::{Value, json};

use crate::helpers::TestApp;

fn milk_body() -> Value {
    json!({"name": "Milk", "description": "Whole", "status": true})
}

#[tokio::test]
async fn test_list_is_empty_initially() {
    let app = TestApp::new().await;

    let response = app.request("GET", "/items", None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, json!([]));
}

#[tokio::test]
async fn test_create_returns_the_persisted_aliment() {
    let app = TestApp::new().await;

    let response = app.request("PUT", "/items", Some(milk_body())).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.body,
        json!({"id": 1, "name": "Milk", "description": "Whole", "status": true})
    );
}

#[tokio::test]
async fn test_consecutive_creates_get_consecutive_ids() {
    let app = TestApp::new().await;

    let first = app.request("PUT", "/items", Some(milk_body())).await;
    let second = app
        .request(
            "PUT",
            "/items",
            Some(json!({"name": "Bread", "description": "", "status": false})),
        )
        .await;

    let first_id = first.body["id"].as_i64().unwrap();
    let second_id = second.body["id"].as_i64().unwrap();
    assert!(first_id > 0);
    assert_eq!(second_id, first_id + 1);
}

#[tokio::test]
async fn test_create_ignores_a_client_supplied_id() {
    let app = TestApp::new().await;

    let mut body = milk_body();
    body["id"] = json!(99);
    let response = app.request("PUT", "/items", Some(body)).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["id"], 1);
}

#[tokio::test]
async fn test_created_aliments_round_trip() {
    let app = TestApp::new().await;
    let created = app.request("PUT", "/items", Some(milk_body())).await;
    let id = created.body["id"].as_i64().unwrap();

    let response = app.request("GET", &format!("/items/{id}"), None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, created.body);
}

#[tokio::test]
async fn test_get_missing_aliment_is_404() {
    let app = TestApp::new().await;

    let response = app.request("GET", "/items/42", None).await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.body, Value::Null);
}

#[tokio::test]
async fn test_list_returns_all_aliments_in_id_order() {
    let app = TestApp::new().await;
    app.request("PUT", "/items", Some(milk_body())).await;
    app.request(
        "PUT",
        "/items",
        Some(json!({"name": "Bread", "description": "Rye", "status": false})),
    )
    .await;

    let response = app.request("GET", "/items", None).await;

    assert_eq!(response.status, StatusCode::OK);
    let items = response.body.as_array().unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0]["name"], "Milk");
    assert_eq!(items[1]["name"], "Bread");
}

#[tokio::test]
async fn test_create_with_missing_name_is_400() {
    let app = TestApp::new().await;

    let response = app
        .request(
            "PUT",
            "/items",
            Some(json!({"description": "Whole", "status": true})),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "VALIDATION_ERROR");
    assert_eq!(
        response.body["details"]["name"],
        json!(["name field is mandatory"])
    );
}

#[tokio::test]
async fn test_create_with_blank_name_is_400() {
    let app = TestApp::new().await;

    let response = app
        .request(
            "PUT",
            "/items",
            Some(json!({"name": "", "description": "Whole", "status": true})),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "VALIDATION_ERROR");
    assert!(response.body["details"]["name"].is_array());
}

#[tokio::test]
async fn test_create_with_oversized_name_is_400() {
    let app = TestApp::new().await;

    let response = app
        .request(
            "PUT",
            "/items",
            Some(json!({"name": "x".repeat(256), "description": "", "status": true})),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert!(response.body["details"]["name"].is_array());
}

#[tokio::test]
async fn test_create_with_blank_description_is_allowed() {
    let app = TestApp::new().await;

    let response = app
        .request(
            "PUT",
            "/items",
            Some(json!({"name": "Milk", "description": "", "status": true})),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["description"], "");
}

#[tokio::test]
async fn test_create_with_missing_description_is_400() {
    let app = TestApp::new().await;

    let response = app
        .request("PUT", "/items", Some(json!({"name": "Milk", "status": true})))
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(
        response.body["details"]["description"],
        json!(["description field is mandatory"])
    );
}

#[tokio::test]
async fn test_create_with_oversized_description_is_400() {
    let app = TestApp::new().await;

    let response = app
        .request(
            "PUT",
            "/items",
            Some(json!({"name": "Milk", "description": "x".repeat(501), "status": true})),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert!(response.body["details"]["description"].is_array());
}

#[tokio::test]
async fn test_create_with_missing_status_is_400() {
    let app = TestApp::new().await;

    let response = app
        .request(
            "PUT",
            "/items",
            Some(json!({"name": "Milk", "description": "Whole"})),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(
        response.body["details"]["status"],
        json!(["status field is mandatory"])
    );
}

#[tokio::test]
async fn test_create_with_non_boolean_status_is_400() {
    let app = TestApp::new().await;

    let response = app
        .request(
            "PUT",
            "/items",
            Some(json!({"name": "Milk", "description": "Whole", "status": 123})),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_update_overwrites_all_fields_but_id() {
    let app = TestApp::new().await;
    app.request("PUT", "/items", Some(milk_body())).await;

    let response = app
        .request(
            "PUT",
            "/items/1",
            Some(json!({"name": "Milk", "description": "Skimmed", "status": false})),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.body,
        json!({"id": 1, "name": "Milk", "description": "Skimmed", "status": false})
    );

    let fetched = app.request("GET", "/items/1", None).await;
    assert_eq!(fetched.body, response.body);
}

#[tokio::test]
async fn test_update_is_idempotent_in_effect() {
    let app = TestApp::new().await;
    app.request("PUT", "/items", Some(milk_body())).await;
    let payload = json!({"name": "Milk", "description": "Skimmed", "status": false});

    let first = app.request("PUT", "/items/1", Some(payload.clone())).await;
    let second = app.request("PUT", "/items/1", Some(payload)).await;

    assert_eq!(first.status, StatusCode::OK);
    assert_eq!(second.status, StatusCode::OK);
    assert_eq!(first.body, second.body);
}

#[tokio::test]
async fn test_update_forces_the_path_id() {
    let app = TestApp::new().await;
    app.request("PUT", "/items", Some(milk_body())).await;

    let mut body = milk_body();
    body["id"] = json!(555);
    let response = app.request("PUT", "/items/1", Some(body)).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["id"], 1);
}

#[tokio::test]
async fn test_update_missing_aliment_is_404() {
    let app = TestApp::new().await;

    let response = app.request("PUT", "/items/42", Some(milk_body())).await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_update_with_invalid_body_is_400() {
    let app = TestApp::new().await;
    app.request("PUT", "/items", Some(milk_body())).await;

    let response = app
        .request("PUT", "/items/1", Some(json!({"name": "Milk"})))
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_delete_removes_the_aliment() {
    let app = TestApp::new().await;
    app.request("PUT", "/items", Some(milk_body())).await;

    let response = app.request("DELETE", "/items/1", None).await;

    assert_eq!(response.status, StatusCode::NO_CONTENT);
    assert_eq!(response.body, serde_json::Value::Null);

    let fetched = app.request("GET", "/items/1", None).await;
    assert_eq!(fetched.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_missing_aliment_is_404() {
    let app = TestApp::new().await;

    let response = app.request("DELETE", "/items/42", None).await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_full_lifecycle() {
    let app = TestApp::new().await;

    let created = app.request("PUT", "/items", Some(milk_body())).await;
    assert_eq!(created.status, StatusCode::OK);
    assert_eq!(
        created.body,
        json!({"id": 1, "name": "Milk", "description": "Whole", "status": true})
    );

    let fetched = app.request("GET", "/items/1", None).await;
    assert_eq!(fetched.status, StatusCode::OK);
    assert_eq!(fetched.body, created.body);

    let deleted = app.request("DELETE", "/items/1", None).await;
    assert_eq!(deleted.status, StatusCode::NO_CONTENT);

    let missing = app.request("GET", "/items/1", None).await;
    assert_eq!(missing.status, StatusCode::NOT_FOUND);
}
