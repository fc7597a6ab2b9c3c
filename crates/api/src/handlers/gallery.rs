//! Handlers for `/api/galleries`.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use salon_core::enums::GalleryCategory;
use salon_core::error::CoreError;
use salon_core::types::DbId;
use salon_db::models::gallery::{CreateGallery, Gallery, GalleryListParams, UpdateGallery};
use salon_db::repositories::GalleryRepo;

use crate::error::{AppError, AppResult};
use crate::extract::ApiJson;
use crate::response::{ApiResponse, ListResponse};
use crate::state::AppState;

/// GET /api/galleries
///
/// List visible photos, optionally filtered by `?category=`.
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<GalleryListParams>,
) -> AppResult<Json<ListResponse<Gallery>>> {
    let photos = GalleryRepo::list(&state.pool, params.category).await?;
    Ok(Json(ListResponse::new(photos)))
}

/// GET /api/galleries/category/{category}
///
/// Path-parameter variant of the category filter, kept for client
/// compatibility.
pub async fn list_by_category(
    State(state): State<AppState>,
    Path(category): Path<String>,
) -> AppResult<Json<ListResponse<Gallery>>> {
    let category = GalleryCategory::parse(&category)
        .ok_or_else(|| AppError::BadRequest(format!("Unknown gallery category '{category}'")))?;

    let photos = GalleryRepo::list(&state.pool, Some(category)).await?;
    Ok(Json(ListResponse::new(photos)))
}

/// GET /api/galleries/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<ApiResponse<Gallery>>> {
    let photo = GalleryRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Gallery photo",
            id,
        }))?;
    Ok(Json(ApiResponse::new(photo)))
}

/// POST /api/galleries
pub async fn create(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<CreateGallery>,
) -> AppResult<(StatusCode, Json<ApiResponse<Gallery>>)> {
    let photo = GalleryRepo::create(&state.pool, &input).await?;

    tracing::info!(id = photo.id, "Gallery photo created");

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::with_message(photo, "Gallery photo created")),
    ))
}

/// PUT /api/galleries/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    ApiJson(input): ApiJson<UpdateGallery>,
) -> AppResult<Json<ApiResponse<Gallery>>> {
    let photo = GalleryRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Gallery photo",
            id,
        }))?;

    tracing::info!(id, "Gallery photo updated");

    Ok(Json(ApiResponse::with_message(photo, "Gallery photo updated")))
}

/// DELETE /api/galleries/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<ApiResponse<serde_json::Value>>> {
    let deleted = GalleryRepo::delete(&state.pool, id).await?;

    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Gallery photo",
            id,
        }));
    }

    tracing::info!(id, "Gallery photo deleted");

    Ok(Json(ApiResponse::with_message(
        serde_json::json!({}),
        "Gallery photo deleted",
    )))
}
