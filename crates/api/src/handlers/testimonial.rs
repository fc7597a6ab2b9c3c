//! Handlers for `/api/testimonials`.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use salon_core::enums::TestimonialPage;
use salon_core::error::CoreError;
use salon_core::types::DbId;
use salon_db::models::testimonial::{
    CreateTestimonial, Testimonial, TestimonialListParams, UpdateTestimonial,
};
use salon_db::repositories::TestimonialRepo;

use crate::error::{AppError, AppResult};
use crate::extract::ApiJson;
use crate::response::{ApiResponse, ListResponse};
use crate::state::AppState;

/// GET /api/testimonials
///
/// List visible testimonials, optionally filtered by `?page=`. Rows tagged
/// `both` match either page.
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<TestimonialListParams>,
) -> AppResult<Json<ListResponse<Testimonial>>> {
    let testimonials = TestimonialRepo::list(&state.pool, params.page).await?;
    Ok(Json(ListResponse::new(testimonials)))
}

/// GET /api/testimonials/page/{page}
pub async fn list_by_page(
    State(state): State<AppState>,
    Path(page): Path<String>,
) -> AppResult<Json<ListResponse<Testimonial>>> {
    let page = TestimonialPage::parse(&page)
        .ok_or_else(|| AppError::BadRequest(format!("Unknown testimonial page '{page}'")))?;

    let testimonials = TestimonialRepo::list(&state.pool, Some(page)).await?;
    Ok(Json(ListResponse::new(testimonials)))
}

/// GET /api/testimonials/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<ApiResponse<Testimonial>>> {
    let testimonial = TestimonialRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Testimonial",
            id,
        }))?;
    Ok(Json(ApiResponse::new(testimonial)))
}

/// POST /api/testimonials
pub async fn create(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<CreateTestimonial>,
) -> AppResult<(StatusCode, Json<ApiResponse<Testimonial>>)> {
    let testimonial = TestimonialRepo::create(&state.pool, &input).await?;

    tracing::info!(id = testimonial.id, "Testimonial created");

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::with_message(testimonial, "Testimonial created")),
    ))
}

/// PUT /api/testimonials/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    ApiJson(input): ApiJson<UpdateTestimonial>,
) -> AppResult<Json<ApiResponse<Testimonial>>> {
    let testimonial = TestimonialRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Testimonial",
            id,
        }))?;

    tracing::info!(id, "Testimonial updated");

    Ok(Json(ApiResponse::with_message(testimonial, "Testimonial updated")))
}

/// DELETE /api/testimonials/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<ApiResponse<serde_json::Value>>> {
    let deleted = TestimonialRepo::delete(&state.pool, id).await?;

    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Testimonial",
            id,
        }));
    }

    tracing::info!(id, "Testimonial deleted");

    Ok(Json(ApiResponse::with_message(
        serde_json::json!({}),
        "Testimonial deleted",
    )))
}
