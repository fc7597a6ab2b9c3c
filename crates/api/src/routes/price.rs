//! Routes for `/api/prices`.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{price, upload};
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(price::list).post(price::create))
        .route("/upload", post(upload::upload_image))
        .route("/category/{category}", get(price::list_by_category))
        .route(
            "/{id}",
            get(price::get_by_id)
                .put(price::update)
                .delete(price::delete),
        )
}
