//! Tests against a running server
//!
//! Start the server, then run: cargo test -- --ignored

use reqwest::{Client, StatusCode};
use serde_json::{json, Value};

const BASE_URL: &str = "http://localhost:8081/api";

#[tokio::test]
#[ignore]
async fn test_health_check() {
    let client = Client::new();

    let response = client
        .get(format!("{}/health", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
#[ignore]
async fn test_create_update_and_delete_equipment() {
    let client = Client::new();

    let response = client
        .post(format!("{}/equipment", BASE_URL))
        .json(&json!({
            "equipName": "Test Projector",
            "category": "Electronics",
            "status": "Available",
            "location": "Room 101",
            "purchaseDate": "2024-01-15"
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = response.json().await.expect("Failed to parse response");
    let equip_id = body["equipId"].as_i64().expect("No equipment ID");

    let response = client
        .put(format!("{}/equipment/{}", BASE_URL, equip_id))
        .json(&json!({
            "equipName": "Test Projector",
            "category": "Electronics",
            "status": "Borrowed",
            "location": "Room 101",
            "purchaseDate": "2024-01-15"
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["equipId"], equip_id);
    assert_eq!(body["status"], "Borrowed");

    let response = client
        .delete(format!("{}/equipment/{}", BASE_URL, equip_id))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
#[ignore]
async fn test_unknown_event_is_not_found() {
    let client = Client::new();

    let response = client
        .get(format!("{}/events/{}", BASE_URL, i64::MAX))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

async fn create_user(client: &Client, name: &str) -> i64 {
    let response = client
        .post(format!("{}/users", BASE_URL))
        .json(&json!({ "name": name }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::OK);

    let body: Value = response.json().await.expect("Failed to parse response");
    body["userId"].as_i64().expect("No user ID")
}

async fn delete_user(client: &Client, id: i64) {
    let response = client
        .delete(format!("{}/users/{}", BASE_URL, id))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
#[ignore]
async fn test_update_does_not_rewind_user_ids() {
    let client = Client::new();

    let first = create_user(&client, "Sequence First").await;
    let second = create_user(&client, "Sequence Second").await;
    let third = create_user(&client, "Sequence Third").await;
    delete_user(&client, third).await;

    let response = client
        .put(format!("{}/users/{}", BASE_URL, first))
        .json(&json!({ "name": "Sequence First Renamed" }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::OK);

    let next = create_user(&client, "Sequence Next").await;
    assert_ne!(next, third, "deleted id {third} was handed out again");
    assert!(next > third);

    for id in [first, second, next] {
        delete_user(&client, id).await;
    }
}
