//! Route definitions.
//!
//! Each resource gets its own router mounted under `/api/{resource}`;
//! unmatched `/api/*` paths get a 404 envelope listing the available
//! prefixes.

pub mod banner;
pub mod contact;
pub mod gallery;
pub mod health;
pub mod price;
pub mod service;
pub mod testimonial;

use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use axum::Router;
use serde_json::json;

use crate::state::AppState;

/// Endpoint prefixes advertised by the API 404 response.
const AVAILABLE_ENDPOINTS: &[&str] = &[
    "/api/health",
    "/api/services",
    "/api/prices",
    "/api/testimonials",
    "/api/contacts",
    "/api/banners",
    "/api/galleries",
];

/// Build the `/api` route tree.
///
/// ```text
/// /health                         liveness
///
/// /{resource}                     list, create
/// /{resource}/upload              image upload (POST)
/// /{resource}/{id}                get, update, delete
///
/// /galleries/category/{category}  category filter
/// /prices/category/{category}     category filter
/// /testimonials/page/{page}       page filter
/// /services/search/{keyword}      substring search
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(health::router())
        .nest("/services", service::router())
        .nest("/prices", price::router())
        .nest("/testimonials", testimonial::router())
        .nest("/contacts", contact::router())
        .nest("/banners", banner::router())
        .nest("/galleries", gallery::router())
        .fallback(api_not_found)
}

/// 404 for unknown `/api/*` paths, listing what does exist.
async fn api_not_found() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(json!({
            "success": false,
            "message": "API endpoint not found",
            "availableEndpoints": AVAILABLE_ENDPOINTS,
        })),
    )
}
