//! Contact info entry model and DTOs.

use salon_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `contacts` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    pub id: DbId,
    pub name: String,
    pub phone: String,
    pub email: String,
    pub address: String,
    pub note: String,
    pub is_active: bool,
    #[serde(rename = "order")]
    pub sort_order: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for `POST /api/contacts`.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateContact {
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    pub phone: Option<String>,
    #[validate(email(message = "email must be a valid address"))]
    pub email: Option<String>,
    pub address: Option<String>,
    pub note: Option<String>,
    pub is_active: Option<bool>,
    #[serde(rename = "order")]
    pub sort_order: Option<i32>,
}

/// DTO for `PUT /api/contacts/{id}`. Absent fields keep stored values.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateContact {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: Option<String>,
    pub phone: Option<String>,
    #[validate(email(message = "email must be a valid address"))]
    pub email: Option<String>,
    pub address: Option<String>,
    pub note: Option<String>,
    pub is_active: Option<bool>,
    #[serde(rename = "order")]
    pub sort_order: Option<i32>,
}
