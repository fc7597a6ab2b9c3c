//! Handlers for `/api/contacts`.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use salon_core::error::CoreError;
use salon_core::types::DbId;
use salon_db::models::contact::{Contact, CreateContact, UpdateContact};
use salon_db::repositories::ContactRepo;

use crate::error::{AppError, AppResult};
use crate::extract::ApiJson;
use crate::response::{ApiResponse, ListResponse};
use crate::state::AppState;

/// GET /api/contacts
pub async fn list(State(state): State<AppState>) -> AppResult<Json<ListResponse<Contact>>> {
    let contacts = ContactRepo::list(&state.pool).await?;
    Ok(Json(ListResponse::new(contacts)))
}

/// GET /api/contacts/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<ApiResponse<Contact>>> {
    let contact = ContactRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Contact",
            id,
        }))?;
    Ok(Json(ApiResponse::new(contact)))
}

/// POST /api/contacts
pub async fn create(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<CreateContact>,
) -> AppResult<(StatusCode, Json<ApiResponse<Contact>>)> {
    let contact = ContactRepo::create(&state.pool, &input).await?;

    tracing::info!(id = contact.id, "Contact created");

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::with_message(contact, "Contact created")),
    ))
}

/// PUT /api/contacts/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    ApiJson(input): ApiJson<UpdateContact>,
) -> AppResult<Json<ApiResponse<Contact>>> {
    let contact = ContactRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Contact",
            id,
        }))?;

    tracing::info!(id, "Contact updated");

    Ok(Json(ApiResponse::with_message(contact, "Contact updated")))
}

/// DELETE /api/contacts/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<ApiResponse<serde_json::Value>>> {
    let deleted = ContactRepo::delete(&state.pool, id).await?;

    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Contact",
            id,
        }));
    }

    tracing::info!(id, "Contact deleted");

    Ok(Json(ApiResponse::with_message(
        serde_json::json!({}),
        "Contact deleted",
    )))
}
