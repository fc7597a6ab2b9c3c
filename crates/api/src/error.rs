use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use salon_core::error::CoreError;
use salon_core::upload::UploadError;
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce the uniform
/// `{ success: false, message, error? }` envelope.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `salon_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// An upload rejected by the image policy.
    #[error(transparent)]
    Upload(#[from] UploadError),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// An internal error with a human-readable message.
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message, detail) = match &self {
            AppError::Core(core) => match core {
                CoreError::NotFound { entity, id } => (
                    StatusCode::NOT_FOUND,
                    format!("{entity} with id {id} not found"),
                    None,
                ),
                CoreError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone(), None),
                CoreError::Internal(msg) => {
                    tracing::error!(error = %msg, "Internal core error");
                    internal_error(msg)
                }
            },

            AppError::Database(err) => classify_sqlx_error(err),

            AppError::Upload(err) => (StatusCode::BAD_REQUEST, err.to_string(), None),
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone(), None),
            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                internal_error(msg)
            }
        };

        let mut body = json!({
            "success": false,
            "message": message,
        });
        if let Some(detail) = detail {
            body["error"] = json!(detail);
        }

        (status, axum::Json(body)).into_response()
    }
}

/// 500 with the underlying detail exposed only outside production.
fn internal_error(detail: &str) -> (StatusCode, String, Option<String>) {
    let detail = if detail_enabled() {
        Some(detail.to_string())
    } else {
        None
    };
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        "An internal error occurred".to_string(),
        detail,
    )
}

/// Detail is included only in development mode. Any other mode, including
/// ones this code has never heard of, stays sanitized.
fn detail_enabled() -> bool {
    std::env::var("APP_ENV").as_deref().unwrap_or("development") == "development"
}

/// Classify a sqlx error into an HTTP status, message, and optional detail.
///
/// - `RowNotFound` maps to 404.
/// - Everything else maps to 500 with a sanitized message.
fn classify_sqlx_error(err: &sqlx::Error) -> (StatusCode, String, Option<String>) {
    match err {
        sqlx::Error::RowNotFound => (
            StatusCode::NOT_FOUND,
            "Resource not found".to_string(),
            None,
        ),
        other => {
            tracing::error!(error = %other, "Database error");
            internal_error(&other.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    async fn rendered(err: AppError) -> serde_json::Value {
        let response = err.into_response();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    // Single test so the APP_ENV mutations cannot race a parallel sibling.
    #[tokio::test]
    async fn internal_detail_appears_only_in_development() {
        std::env::set_var("APP_ENV", "staging");
        let json = rendered(AppError::InternalError("secret detail".into())).await;
        assert_eq!(json["success"], false);
        assert!(json.get("error").is_none());

        std::env::set_var("APP_ENV", "production");
        let json = rendered(AppError::InternalError("secret detail".into())).await;
        assert!(json.get("error").is_none());

        std::env::set_var("APP_ENV", "development");
        let json = rendered(AppError::InternalError("secret detail".into())).await;
        assert_eq!(json["error"], "secret detail");

        std::env::remove_var("APP_ENV");
    }
}
