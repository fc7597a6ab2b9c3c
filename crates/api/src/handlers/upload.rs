//! Shared image upload handler, mounted at `POST /upload` under every
//! resource prefix.
//!
//! All six routes share one handler since the behavior is identical:
//! validate, store under a collision-resistant name, return the public URL
//! for the caller to put on an entity.

use axum::extract::{Multipart, State};
use axum::Json;
use salon_core::upload::{unique_filename, validate_image_upload};

use crate::error::{AppError, AppResult};
use crate::response::{ApiResponse, UploadedFile};
use crate::state::AppState;

/// POST /api/{resource}/upload
///
/// Accepts a multipart form with a single `image` field. The file is
/// validated against the image policy before any byte is written.
pub async fn upload_image(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> AppResult<Json<ApiResponse<UploadedFile>>> {
    let mut file: Option<(String, String, Vec<u8>)> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
    {
        if field.name() != Some("image") {
            continue; // ignore unknown fields
        }

        let filename = field.file_name().unwrap_or_default().to_string();
        let content_type = field.content_type().unwrap_or_default().to_string();
        let data = field
            .bytes()
            .await
            .map_err(|e| AppError::BadRequest(e.to_string()))?;

        file = Some((filename, content_type, data.to_vec()));
    }

    let (filename, content_type, data) =
        file.ok_or_else(|| AppError::BadRequest("No file uploaded".into()))?;

    let ext = validate_image_upload(&filename, &content_type, data.len())?;

    let upload_dir = &state.config.upload_dir;
    tokio::fs::create_dir_all(upload_dir)
        .await
        .map_err(|e| AppError::InternalError(e.to_string()))?;

    let stored_name = unique_filename(&filename, &ext);
    tokio::fs::write(upload_dir.join(&stored_name), &data)
        .await
        .map_err(|e| AppError::InternalError(e.to_string()))?;

    tracing::info!(filename = %stored_name, bytes = data.len(), "Image uploaded");

    Ok(Json(ApiResponse::with_message(
        UploadedFile {
            url: format!("/uploads/{stored_name}"),
            filename: stored_name,
        },
        "File uploaded",
    )))
}
