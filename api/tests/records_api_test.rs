//! Integration tests for the token-gated record endpoints

mod common;

use actix_web::{http::header, test};
use iv_api::app::create_app;
use iv_core::repositories::RecordRepository;
use serde_json::json;

use common::{bearer, test_state};

#[actix_web::test]
async fn test_full_record_lifecycle() {
    let state = test_state();
    let token = state.token_service.issue("alice").unwrap();
    let app = test::init_service(create_app(state)).await;

    // Create
    let req = test::TestRequest::post()
        .uri("/api/items")
        .insert_header(bearer(&token))
        .set_json(json!({"id": "i1", "name": "widget", "value": "42"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 201);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({"id": "i1", "name": "widget", "value": "42"}));

    // Get
    let req = test::TestRequest::get()
        .uri("/api/items/i1")
        .insert_header(bearer(&token))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({"id": "i1", "name": "widget", "value": "42"}));

    // List
    let req = test::TestRequest::get()
        .uri("/api/items")
        .insert_header(bearer(&token))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body, json!([{"id": "i1", "name": "widget", "value": "42"}]));

    // Delete
    let req = test::TestRequest::delete()
        .uri("/api/items/i1")
        .insert_header(bearer(&token))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Item deleted");

    // Gone
    let req = test::TestRequest::get()
        .uri("/api/items/i1")
        .insert_header(bearer(&token))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 404);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "Item not found");
}

#[actix_web::test]
async fn test_create_replaces_existing_record() {
    let state = test_state();
    let token = state.token_service.issue("alice").unwrap();
    let records = state.records.clone();
    let app = test::init_service(create_app(state)).await;

    for (name, value) in [("a", "1"), ("b", "2")] {
        let req = test::TestRequest::post()
            .uri("/api/items")
            .insert_header(bearer(&token))
            .set_json(json!({"id": "x", "name": name, "value": value}))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), 201);
    }

    let req = test::TestRequest::get()
        .uri("/api/items/x")
        .insert_header(bearer(&token))
        .to_request();
    let body: serde_json::Value = test::read_body_json(test::call_service(&app, req).await).await;
    assert_eq!(body, json!({"id": "x", "name": "b", "value": "2"}));

    assert_eq!(records.len(), 1);
}

#[actix_web::test]
async fn test_create_requires_id() {
    let state = test_state();
    let token = state.token_service.issue("alice").unwrap();
    let records = state.records.clone();
    let app = test::init_service(create_app(state)).await;

    for payload in [json!({"id": "", "name": "n", "value": "v"}), json!({"name": "n"})] {
        let req = test::TestRequest::post()
            .uri("/api/items")
            .insert_header(bearer(&token))
            .set_json(payload)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 400);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "ID is required");
    }

    assert!(records.is_empty());
}

#[actix_web::test]
async fn test_delete_missing_item_is_404_every_time() {
    let state = test_state();
    let token = state.token_service.issue("alice").unwrap();
    let app = test::init_service(create_app(state)).await;

    for _ in 0..2 {
        let req = test::TestRequest::delete()
            .uri("/api/items/ghost")
            .insert_header(bearer(&token))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 404);
    }
}

#[actix_web::test]
async fn test_record_routes_require_token() {
    let state = test_state();
    let records = state.records.clone();
    let app = test::init_service(create_app(state)).await;

    let requests = vec![
        test::TestRequest::get().uri("/api/items").to_request(),
        test::TestRequest::get().uri("/api/items/i1").to_request(),
        test::TestRequest::post()
            .uri("/api/items")
            .set_json(json!({"id": "i1", "name": "n", "value": "v"}))
            .to_request(),
        test::TestRequest::delete().uri("/api/items/i1").to_request(),
    ];

    for req in requests {
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 401);
    }

    assert!(records.is_empty());
}

#[actix_web::test]
async fn test_bad_token_never_reaches_store() {
    let state = test_state();
    let records = state.records.clone();
    let app = test::init_service(create_app(state)).await;

    let req = test::TestRequest::post()
        .uri("/api/items")
        .insert_header((header::AUTHORIZATION, "Bearer not-a-token"))
        .set_json(json!({"id": "i1", "name": "n", "value": "v"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 401);

    assert!(records.is_empty());
}

#[actix_web::test]
async fn test_login_token_unlocks_records() {
    let app = test::init_service(create_app(test_state())).await;

    let req = test::TestRequest::post()
        .uri("/login")
        .set_json(json!({"username": "carol", "password": "pw"}))
        .to_request();
    let body: serde_json::Value = test::read_body_json(test::call_service(&app, req).await).await;
    let token = body["token"].as_str().unwrap().to_string();

    let req = test::TestRequest::get()
        .uri("/api/items")
        .insert_header(bearer(&token))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body, json!([]));
}
