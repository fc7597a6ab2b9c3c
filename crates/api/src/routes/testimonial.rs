//! Routes for `/api/testimonials`.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{testimonial, upload};
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(testimonial::list).post(testimonial::create))
        .route("/upload", post(upload::upload_image))
        .route("/page/{page}", get(testimonial::list_by_page))
        .route(
            "/{id}",
            get(testimonial::get_by_id)
                .put(testimonial::update)
                .delete(testimonial::delete),
        )
}
