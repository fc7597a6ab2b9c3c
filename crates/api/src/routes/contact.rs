//! Routes for `/api/contacts`.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{contact, upload};
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(contact::list).post(contact::create))
        .route("/upload", post(upload::upload_image))
        .route(
            "/{id}",
            get(contact::get_by_id)
                .put(contact::update)
                .delete(contact::delete),
        )
}
