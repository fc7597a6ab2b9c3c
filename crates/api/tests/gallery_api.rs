//! HTTP-level tests for `/api/galleries`.

mod common;

use axum::http::StatusCode;
use common::{body_json, build_api, delete, get, post_json, put_json};
use sqlx::PgPool;

async fn create_photo(pool: &PgPool, image: &str, category: &str, order: i64) -> i64 {
    let app = build_api(pool.clone());
    let response = post_json(
        app,
        "/api/galleries",
        serde_json::json!({"image": image, "category": category, "order": order}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    json["data"]["id"].as_i64().unwrap()
}

#[sqlx::test(migrations = "../db/migrations")]
async fn create_returns_envelope_with_stored_row(pool: PgPool) {
    let app = build_api(pool);
    let response = post_json(
        app,
        "/api/galleries",
        serde_json::json!({"image": "/uploads/cut.jpg", "category": "toc"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["success"], true);
    assert_eq!(json["data"]["image"], "/uploads/cut.jpg");
    assert_eq!(json["data"]["category"], "toc");
    assert_eq!(json["data"]["alt"], "Gallery image");
    assert_eq!(json["data"]["isActive"], true);
    assert_eq!(json["data"]["order"], 0);
    assert!(json["data"]["id"].is_number());
    assert!(json["data"]["createdAt"].is_string());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn create_rejects_unknown_category(pool: PgPool) {
    let app = build_api(pool.clone());
    let response = post_json(
        app,
        "/api/galleries",
        serde_json::json!({"image": "/uploads/x.jpg", "category": "perm"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let app = build_api(pool);
    let json = body_json(get(app, "/api/galleries").await).await;
    assert_eq!(json["count"], 0);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn list_filters_by_category_query(pool: PgPool) {
    create_photo(&pool, "/uploads/a.jpg", "toc", 0).await;
    create_photo(&pool, "/uploads/b.jpg", "nhuom", 0).await;

    let app = build_api(pool.clone());
    let json = body_json(get(app, "/api/galleries?category=toc").await).await;
    assert_eq!(json["count"], 1);
    assert_eq!(json["data"][0]["image"], "/uploads/a.jpg");

    // `all` is the match-everything sentinel.
    let app = build_api(pool);
    let json = body_json(get(app, "/api/galleries?category=all").await).await;
    assert_eq!(json["count"], 2);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn category_path_variant_matches_query_filter(pool: PgPool) {
    create_photo(&pool, "/uploads/a.jpg", "uon", 0).await;
    create_photo(&pool, "/uploads/b.jpg", "other", 0).await;

    let app = build_api(pool.clone());
    let json = body_json(get(app, "/api/galleries/category/uon").await).await;
    assert_eq!(json["count"], 1);
    assert_eq!(json["data"][0]["category"], "uon");

    let app = build_api(pool);
    let response = get(app, "/api/galleries/category/bogus").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn list_is_ordered_by_sort_key(pool: PgPool) {
    create_photo(&pool, "/uploads/third.jpg", "toc", 5).await;
    create_photo(&pool, "/uploads/first.jpg", "toc", 1).await;
    create_photo(&pool, "/uploads/second.jpg", "toc", 3).await;

    let app = build_api(pool);
    let json = body_json(get(app, "/api/galleries").await).await;
    let images: Vec<_> = json["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|g| g["image"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(
        images,
        vec!["/uploads/first.jpg", "/uploads/second.jpg", "/uploads/third.jpg"]
    );
}

#[sqlx::test(migrations = "../db/migrations")]
async fn hidden_photo_disappears_from_listing(pool: PgPool) {
    let id = create_photo(&pool, "/uploads/a.jpg", "toc", 0).await;

    let app = build_api(pool.clone());
    let response = put_json(
        app,
        &format!("/api/galleries/{id}"),
        serde_json::json!({"isActive": false}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let app = build_api(pool.clone());
    let json = body_json(get(app, "/api/galleries").await).await;
    assert_eq!(json["count"], 0);

    // Still reachable directly by id.
    let app = build_api(pool);
    let response = get(app, &format!("/api/galleries/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn get_unknown_id_returns_404_envelope(pool: PgPool) {
    let app = build_api(pool);
    let response = get(app, "/api/galleries/999999").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let json = body_json(response).await;
    assert_eq!(json["success"], false);
    assert!(json["message"].is_string());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn delete_twice_returns_success_then_404(pool: PgPool) {
    let id = create_photo(&pool, "/uploads/gone.jpg", "toc", 0).await;

    let app = build_api(pool.clone());
    let response = delete(app, &format!("/api/galleries/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["success"], true);
    assert_eq!(json["data"], serde_json::json!({}));

    let app = build_api(pool);
    let response = delete(app, &format!("/api/galleries/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
