//! Routes for `/api/banners`.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{banner, upload};
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(banner::list).post(banner::create))
        .route("/upload", post(upload::upload_image))
        .route(
            "/{id}",
            get(banner::get_by_id)
                .put(banner::update)
                .delete(banner::delete),
        )
}
