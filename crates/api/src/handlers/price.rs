//! Handlers for `/api/prices`.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use salon_core::error::CoreError;
use salon_core::types::DbId;
use salon_db::models::price::{CreatePrice, Price, PriceListParams, UpdatePrice};
use salon_db::repositories::PriceRepo;

use crate::error::{AppError, AppResult};
use crate::extract::ApiJson;
use crate::response::{ApiResponse, ListResponse};
use crate::state::AppState;

/// GET /api/prices
///
/// List visible price entries, optionally filtered by `?category=`.
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<PriceListParams>,
) -> AppResult<Json<ListResponse<Price>>> {
    let prices = PriceRepo::list(&state.pool, params.category.as_deref()).await?;
    Ok(Json(ListResponse::new(prices)))
}

/// GET /api/prices/category/{category}
pub async fn list_by_category(
    State(state): State<AppState>,
    Path(category): Path<String>,
) -> AppResult<Json<ListResponse<Price>>> {
    let prices = PriceRepo::list(&state.pool, Some(&category)).await?;
    Ok(Json(ListResponse::new(prices)))
}

/// GET /api/prices/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<ApiResponse<Price>>> {
    let price = PriceRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Price", id }))?;
    Ok(Json(ApiResponse::new(price)))
}

/// POST /api/prices
pub async fn create(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<CreatePrice>,
) -> AppResult<(StatusCode, Json<ApiResponse<Price>>)> {
    let price = PriceRepo::create(&state.pool, &input).await?;

    tracing::info!(id = price.id, name = %price.name, "Price entry created");

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::with_message(price, "Price entry created")),
    ))
}

/// PUT /api/prices/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    ApiJson(input): ApiJson<UpdatePrice>,
) -> AppResult<Json<ApiResponse<Price>>> {
    let price = PriceRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Price", id }))?;

    tracing::info!(id, "Price entry updated");

    Ok(Json(ApiResponse::with_message(price, "Price entry updated")))
}

/// DELETE /api/prices/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<ApiResponse<serde_json::Value>>> {
    let deleted = PriceRepo::delete(&state.pool, id).await?;

    if !deleted {
        return Err(AppError::Core(CoreError::NotFound { entity: "Price", id }));
    }

    tracing::info!(id, "Price entry deleted");

    Ok(Json(ApiResponse::with_message(
        serde_json::json!({}),
        "Price entry deleted",
    )))
}
