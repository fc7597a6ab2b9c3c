//! Shared response envelope types for API handlers.
//!
//! Every endpoint answers with the `{ success, message?, count?, data? }`
//! envelope the admin and public UIs consume. Use these types instead of
//! ad-hoc `serde_json::json!` blocks to get compile-time type safety and
//! consistent serialization.

use serde::Serialize;

/// `{ "success": true, "message"?: ..., "data": ... }` for single-entity
/// responses.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn new(data: T) -> Self {
        Self {
            success: true,
            message: None,
            data,
        }
    }

    pub fn with_message(data: T, message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: Some(message.into()),
            data,
        }
    }
}

/// `{ "success": true, "count": N, "data": [...] }` for list responses.
#[derive(Debug, Serialize)]
pub struct ListResponse<T: Serialize> {
    pub success: bool,
    pub count: usize,
    pub data: Vec<T>,
}

impl<T: Serialize> ListResponse<T> {
    pub fn new(data: Vec<T>) -> Self {
        Self {
            success: true,
            count: data.len(),
            data,
        }
    }
}

/// Payload of a successful upload response.
#[derive(Debug, Serialize)]
pub struct UploadedFile {
    /// Public path under the uploads mount, e.g. `/uploads/photo-123.jpg`.
    pub url: String,
    pub filename: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_envelope_omits_absent_message() {
        let json = serde_json::to_value(ApiResponse::new(serde_json::json!({"id": 1}))).unwrap();
        assert_eq!(json["success"], true);
        assert!(json.get("message").is_none());
        assert_eq!(json["data"]["id"], 1);
    }

    #[test]
    fn list_envelope_carries_count() {
        let json = serde_json::to_value(ListResponse::new(vec![1, 2, 3])).unwrap();
        assert_eq!(json["count"], 3);
        assert_eq!(json["data"].as_array().unwrap().len(), 3);
    }
}
