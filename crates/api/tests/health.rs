//! Liveness endpoint and API 404 fallback.

mod common;

use axum::http::StatusCode;
use common::{body_json, build_api, get};
use sqlx::PgPool;

#[sqlx::test(migrations = "../db/migrations")]
async fn health_reports_ok(pool: PgPool) {
    let app = build_api(pool);
    let response = get(app, "/api/health").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["status"], "OK");
    assert_eq!(json["environment"], "development");
    assert!(json["timestamp"].is_string());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn unknown_api_path_lists_available_endpoints(pool: PgPool) {
    let app = build_api(pool);
    let response = get(app, "/api/nonexistent").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let json = body_json(response).await;
    assert_eq!(json["success"], false);
    let endpoints = json["availableEndpoints"].as_array().unwrap();
    assert!(endpoints.contains(&serde_json::json!("/api/galleries")));
    assert!(endpoints.contains(&serde_json::json!("/api/health")));
}
