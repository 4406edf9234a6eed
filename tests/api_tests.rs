//! End-to-end tests of the REST surface over the in-memory backend

mod common;

use axum::http::{Method, Request, StatusCode};
use serde_json::{json, Value};
use tower::ServiceExt;

use common::{body_bytes, body_json, build_test_app, delete, get, post, put};

#[tokio::test]
async fn created_event_reads_back_unchanged() {
    let app = build_test_app();
    let input = json!({
        "eventName": "Hack Night",
        "eventDate": "2024-05-01",
        "venue": "Lab 3",
        "description": "",
        "organizerId": 7
    });

    let response = post(&app, "/api/events", input.clone()).await;
    assert_eq!(response.status(), StatusCode::OK);
    let created = body_json(response).await;

    let event_id = created["eventId"].as_i64().expect("eventId assigned");
    let mut expected = input;
    expected["eventId"] = json!(event_id);
    assert_eq!(created, expected);

    let response = get(&app, &format!("/api/events/{}", event_id)).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, created);
}

#[tokio::test]
async fn put_on_missing_booking_inserts_under_path_id() {
    let app = build_test_app();
    let body = json!({
        "eventId": 1,
        "equipId": 2,
        "assignedTo": 3,
        "borrowDate": "2024-01-01",
        "returnDate": null,
        "remarks": "demo"
    });

    let response = put(&app, "/api/bookings/42", body.clone()).await;
    assert_eq!(response.status(), StatusCode::OK);
    let saved = body_json(response).await;

    let mut expected = body;
    expected["bookingId"] = json!(42);
    assert_eq!(saved, expected);

    let response = get(&app, "/api/bookings/42").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, saved);
}

#[tokio::test]
async fn delete_of_unknown_user_is_ok() {
    let app = build_test_app();

    let response = delete(&app, "/api/users/999").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_bytes(response).await.is_empty());
}

#[tokio::test]
async fn delete_twice_leaves_no_record() {
    let app = build_test_app();
    let created = body_json(post(&app, "/api/equipment", json!({ "equipName": "Camera" })).await).await;
    let uri = format!("/api/equipment/{}", created["equipId"]);

    assert_eq!(delete(&app, &uri).await.status(), StatusCode::OK);
    assert_eq!(delete(&app, &uri).await.status(), StatusCode::OK);
    assert_eq!(get(&app, &uri).await.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn get_of_unknown_record_is_404_with_error_body() {
    let app = build_test_app();

    let response = get(&app, "/api/checkins/5").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = body_json(response).await;
    assert_eq!(body["error"], "NoSuchData");
    assert_eq!(body["message"], "CheckIn 5 not found");
}

#[tokio::test]
async fn put_on_existing_user_merges_and_keeps_identity() {
    let app = build_test_app();
    let created = body_json(
        post(
            &app,
            "/api/users",
            json!({
                "name": "Asha Verma",
                "email": "asha@campus.edu",
                "phone": "98450 11001",
                "role": "Participant",
                "rollNumber": "241001001"
            }),
        )
        .await,
    )
    .await;
    let id = created["userId"].as_i64().unwrap();

    let response = put(
        &app,
        &format!("/api/users/{}", id),
        json!({
            "userId": 777,
            "name": "Asha Verma",
            "email": "asha.verma@campus.edu",
            "role": "Organizer",
            "rollNumber": "241001001"
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let updated = body_json(response).await;

    assert_eq!(updated["userId"], json!(id));
    assert_eq!(updated["email"], "asha.verma@campus.edu");
    assert_eq!(updated["role"], "Organizer");
    assert!(updated["phone"].is_null());

    assert_eq!(get(&app, "/api/users/777").await.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(get(&app, &format!("/api/users/{}", id)).await).await, updated);
}

#[tokio::test]
async fn create_ignores_identity_in_body() {
    let app = build_test_app();

    let created = body_json(post(&app, "/api/users", json!({ "userId": 50, "name": "Ravi" })).await).await;
    assert_eq!(created["userId"], 1);
}

#[tokio::test]
async fn generated_ids_skip_past_upserted_ones() {
    let app = build_test_app();

    put(&app, "/api/users/5", json!({ "name": "Meera" })).await;
    let created = body_json(post(&app, "/api/users", json!({ "name": "Kabir" })).await).await;
    assert_eq!(created["userId"], 6);
}

#[tokio::test]
async fn create_after_highest_id_upsert_fails_without_losing_data() {
    let app = build_test_app();
    let top = format!("/api/users/{}", i64::MAX);

    let response = put(&app, &top, json!({ "name": "Upserted" })).await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = post(&app, "/api/users", json!({ "name": "Generated" })).await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = body_json(response).await;
    assert_eq!(body["code"], 1);

    let kept = body_json(get(&app, &top).await).await;
    assert_eq!(kept["name"], "Upserted");
    let all = body_json(get(&app, "/api/users").await).await;
    assert_eq!(all.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn update_of_lower_id_does_not_rewind_generated_ids() {
    let app = build_test_app();
    for name in ["Asha", "Ravi", "Meera"] {
        post(&app, "/api/users", json!({ "name": name })).await;
    }
    delete(&app, "/api/users/3").await;
    put(&app, "/api/users/1", json!({ "name": "Asha Verma" })).await;

    let created = body_json(post(&app, "/api/users", json!({ "name": "Kabir" })).await).await;
    assert_eq!(created["userId"], 4);
}

#[tokio::test]
async fn list_contains_all_created_records() {
    let app = build_test_app();
    let names = ["Projector 1", "Sound System", "Banner Stand"];
    for name in names {
        post(&app, "/api/equipment", json!({ "equipName": name, "status": "Available" })).await;
    }

    let response = get(&app, "/api/equipment").await;
    assert_eq!(response.status(), StatusCode::OK);
    let listed = body_json(response).await;
    let listed: Vec<&str> = listed
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|e| e["equipName"].as_str())
        .collect();
    for name in names {
        assert!(listed.contains(&name), "{name} missing from list");
    }
}

#[tokio::test]
async fn empty_collection_lists_as_empty_array() {
    let app = build_test_app();
    let body = body_json(get(&app, "/api/bookings").await).await;
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn checkin_lifecycle_is_unconstrained() {
    let app = build_test_app();
    let created = body_json(
        post(
            &app,
            "/api/checkins",
            json!({
                "userId": 3,
                "eventId": 4,
                "checkinTime": "2024-10-28T09:15:00",
                "checkoutTime": null,
                "status": "Present"
            }),
        )
        .await,
    )
    .await;
    let uri = format!("/api/checkins/{}", created["checkinId"]);

    // Checking out without any prior state checks
    let response = put(
        &app,
        &uri,
        json!({
            "userId": 3,
            "eventId": 4,
            "checkinTime": "2024-10-28T09:15:00",
            "checkoutTime": "2024-10-28T17:00:00",
            "status": "Left"
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let updated = body_json(response).await;
    assert_eq!(updated["checkinId"], created["checkinId"]);
    assert_eq!(updated["checkoutTime"], "2024-10-28T17:00:00");
    assert_eq!(updated["status"], "Left");
}

#[tokio::test]
async fn references_are_not_checked() {
    let app = build_test_app();
    let response = post(
        &app,
        "/api/bookings",
        json!({ "eventId": 1000, "equipId": 2000, "assignedTo": 3000, "borrowDate": "2024-01-01" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn malformed_body_is_a_client_error() {
    let app = build_test_app();
    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/events")
        .header("content-type", "application/json")
        .body(axum::body::Body::from("{ not json"))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert!(response.status().is_client_error());
}

#[tokio::test]
async fn non_numeric_id_is_a_client_error() {
    let app = build_test_app();
    let response = get(&app, "/api/users/abc").await;
    assert!(response.status().is_client_error());
}

#[tokio::test]
async fn health_and_readiness_report_ok() {
    let app = build_test_app();

    let health: Value = body_json(get(&app, "/api/health").await).await;
    assert_eq!(health["status"], "healthy");
    assert_eq!(health["version"], env!("CARGO_PKG_VERSION"));

    let response = get(&app, "/api/ready").await;
    assert_eq!(response.status(), StatusCode::OK);
    let ready = body_json(response).await;
    assert_eq!(ready["status"], "ready");
    assert_eq!(ready["storage"], "memory");
    assert!(health.get("storage").is_none());
}

#[tokio::test]
async fn cors_allows_any_origin() {
    let app = build_test_app();
    let request = Request::builder()
        .method(Method::GET)
        .uri("/api/users")
        .header("origin", "http://localhost:5173")
        .body(axum::body::Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(
        response.headers().get("access-control-allow-origin").unwrap(),
        "*"
    );
}

#[tokio::test]
async fn openapi_document_is_served() {
    let app = build_test_app();
    let response = get(&app, "/api-docs/openapi.json").await;
    assert_eq!(response.status(), StatusCode::OK);

    let doc = body_json(response).await;
    assert!(doc["paths"]["/bookings/{id}"]["put"].is_object());
}
