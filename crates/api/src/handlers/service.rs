//! Handlers for `/api/services`.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use salon_core::error::CoreError;
use salon_core::types::DbId;
use salon_db::models::service::{CreateService, Service, UpdateService};
use salon_db::repositories::ServiceRepo;

use crate::error::{AppError, AppResult};
use crate::extract::ApiJson;
use crate::response::{ApiResponse, ListResponse};
use crate::state::AppState;

/// GET /api/services
pub async fn list(State(state): State<AppState>) -> AppResult<Json<ListResponse<Service>>> {
    let services = ServiceRepo::list(&state.pool).await?;
    Ok(Json(ListResponse::new(services)))
}

/// GET /api/services/search/{keyword}
///
/// Case-insensitive substring search over name and description.
pub async fn search(
    State(state): State<AppState>,
    Path(keyword): Path<String>,
) -> AppResult<Json<ListResponse<Service>>> {
    let services = ServiceRepo::search(&state.pool, &keyword).await?;
    Ok(Json(ListResponse::new(services)))
}

/// GET /api/services/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<ApiResponse<Service>>> {
    let service = ServiceRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Service",
            id,
        }))?;
    Ok(Json(ApiResponse::new(service)))
}

/// POST /api/services
pub async fn create(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<CreateService>,
) -> AppResult<(StatusCode, Json<ApiResponse<Service>>)> {
    let service = ServiceRepo::create(&state.pool, &input).await?;

    tracing::info!(id = service.id, name = %service.name, "Service created");

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::with_message(service, "Service created")),
    ))
}

/// PUT /api/services/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    ApiJson(input): ApiJson<UpdateService>,
) -> AppResult<Json<ApiResponse<Service>>> {
    let service = ServiceRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Service",
            id,
        }))?;

    tracing::info!(id, "Service updated");

    Ok(Json(ApiResponse::with_message(service, "Service updated")))
}

/// DELETE /api/services/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<ApiResponse<serde_json::Value>>> {
    let deleted = ServiceRepo::delete(&state.pool, id).await?;

    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Service",
            id,
        }));
    }

    tracing::info!(id, "Service deleted");

    Ok(Json(ApiResponse::with_message(
        serde_json::json!({}),
        "Service deleted",
    )))
}
