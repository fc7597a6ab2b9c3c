//! Handlers for `/api/banners`.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use salon_core::error::CoreError;
use salon_core::types::DbId;
use salon_db::models::banner::{Banner, CreateBanner, UpdateBanner};
use salon_db::repositories::BannerRepo;

use crate::error::{AppError, AppResult};
use crate::extract::ApiJson;
use crate::response::{ApiResponse, ListResponse};
use crate::state::AppState;

/// GET /api/banners
pub async fn list(State(state): State<AppState>) -> AppResult<Json<ListResponse<Banner>>> {
    let banners = BannerRepo::list(&state.pool).await?;
    Ok(Json(ListResponse::new(banners)))
}

/// GET /api/banners/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<ApiResponse<Banner>>> {
    let banner = BannerRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Banner",
            id,
        }))?;
    Ok(Json(ApiResponse::new(banner)))
}

/// POST /api/banners
pub async fn create(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<CreateBanner>,
) -> AppResult<(StatusCode, Json<ApiResponse<Banner>>)> {
    let banner = BannerRepo::create(&state.pool, &input).await?;

    tracing::info!(id = banner.id, title = %banner.title, "Banner created");

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::with_message(banner, "Banner created")),
    ))
}

/// PUT /api/banners/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    ApiJson(input): ApiJson<UpdateBanner>,
) -> AppResult<Json<ApiResponse<Banner>>> {
    let banner = BannerRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Banner",
            id,
        }))?;

    tracing::info!(id, "Banner updated");

    Ok(Json(ApiResponse::with_message(banner, "Banner updated")))
}

/// DELETE /api/banners/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<ApiResponse<serde_json::Value>>> {
    let deleted = BannerRepo::delete(&state.pool, id).await?;

    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Banner",
            id,
        }));
    }

    tracing::info!(id, "Banner deleted");

    Ok(Json(ApiResponse::with_message(
        serde_json::json!({}),
        "Banner deleted",
    )))
}
