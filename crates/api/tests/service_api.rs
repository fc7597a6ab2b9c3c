//! HTTP-level tests for `/api/services`.

mod common;

use axum::http::StatusCode;
use common::{body_json, build_api, get, post_json};
use sqlx::PgPool;

async fn create_service(pool: &PgPool, body: serde_json::Value) -> i64 {
    let app = build_api(pool.clone());
    let response = post_json(app, "/api/services", body).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["data"]["id"].as_i64().unwrap()
}

#[sqlx::test(migrations = "../db/migrations")]
async fn create_returns_201_with_message(pool: PgPool) {
    let app = build_api(pool);
    let response = post_json(
        app,
        "/api/services",
        serde_json::json!({
            "name": "Cắt tóc nữ",
            "description": "Tạo kiểu theo khuôn mặt",
            "price": 150000.0
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["success"], true);
    assert_eq!(json["message"], "Service created");
    assert_eq!(json["data"]["name"], "Cắt tóc nữ");
    assert_eq!(json["data"]["price"], 150000.0);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn create_without_name_returns_400_and_persists_nothing(pool: PgPool) {
    let app = build_api(pool.clone());
    let response = post_json(
        app,
        "/api/services",
        serde_json::json!({"description": "no name"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["success"], false);

    let app = build_api(pool);
    let json = body_json(get(app, "/api/services").await).await;
    assert_eq!(json["count"], 0);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn create_with_empty_name_returns_validation_message(pool: PgPool) {
    let app = build_api(pool);
    let response = post_json(app, "/api/services", serde_json::json!({"name": ""})).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert!(json["message"]
        .as_str()
        .unwrap()
        .contains("name is required"));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn search_is_case_insensitive_and_skips_inactive(pool: PgPool) {
    create_service(&pool, serde_json::json!({"name": "Cắt tóc nữ"})).await;
    create_service(
        &pool,
        serde_json::json!({"name": "Uốn xoăn", "description": "tạo kiểu TÓC đẹp"}),
    )
    .await;
    create_service(
        &pool,
        serde_json::json!({"name": "Cắt tóc nam", "isActive": false}),
    )
    .await;
    create_service(&pool, serde_json::json!({"name": "Nhuộm màu"})).await;

    let app = build_api(pool);
    let json = body_json(get(app, "/api/services/search/t%C3%B3c").await).await;
    assert_eq!(json["count"], 2);
    let names: Vec<_> = json["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["name"].as_str().unwrap().to_string())
        .collect();
    assert!(names.contains(&"Cắt tóc nữ".to_string()));
    assert!(names.contains(&"Uốn xoăn".to_string()));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn list_excludes_inactive_and_keeps_insertion_order_on_ties(pool: PgPool) {
    create_service(&pool, serde_json::json!({"name": "First", "order": 1})).await;
    create_service(&pool, serde_json::json!({"name": "Second", "order": 1})).await;
    create_service(
        &pool,
        serde_json::json!({"name": "Hidden", "order": 0, "isActive": false}),
    )
    .await;

    let app = build_api(pool);
    let json = body_json(get(app, "/api/services").await).await;
    assert_eq!(json["count"], 2);
    assert_eq!(json["data"][0]["name"], "First");
    assert_eq!(json["data"][1]["name"], "Second");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn negative_price_is_rejected(pool: PgPool) {
    let app = build_api(pool);
    let response = post_json(
        app,
        "/api/services",
        serde_json::json!({"name": "Gội đầu", "price": -5.0}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
