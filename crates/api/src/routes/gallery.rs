//! Routes for `/api/galleries`.
//!
//! ```text
//! POST   /upload                -> upload_image
//! GET    /                      -> list
//! GET    /category/{category}   -> list_by_category
//! GET    /{id}                  -> get_by_id
//! POST   /                      -> create
//! PUT    /{id}                  -> update
//! DELETE /{id}                  -> delete
//! ```

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{gallery, upload};
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(gallery::list).post(gallery::create))
        .route("/upload", post(upload::upload_image))
        .route("/category/{category}", get(gallery::list_by_category))
        .route(
            "/{id}",
            get(gallery::get_by_id)
                .put(gallery::update)
                .delete(gallery::delete),
        )
}
