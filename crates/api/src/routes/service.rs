//! Routes for `/api/services`.
//!
//! ```text
//! POST   /upload                -> upload_image
//! GET    /                      -> list
//! GET    /search/{keyword}      -> search
//! GET    /{id}                  -> get_by_id
//! POST   /                      -> create
//! PUT    /{id}                  -> update
//! DELETE /{id}                  -> delete
//! ```

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{service, upload};
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(service::list).post(service::create))
        .route("/upload", post(upload::upload_image))
        .route("/search/{keyword}", get(service::search))
        .route(
            "/{id}",
            get(service::get_by_id)
                .put(service::update)
                .delete(service::delete),
        )
}
