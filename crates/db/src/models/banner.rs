//! Homepage banner model and DTOs.

use salon_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `banners` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Banner {
    pub id: DbId,
    pub title: String,
    pub subtitle: String,
    pub image: String,
    pub link: String,
    pub is_active: bool,
    #[serde(rename = "order")]
    pub sort_order: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for `POST /api/banners`.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateBanner {
    #[validate(length(min = 1, message = "title is required"))]
    pub title: String,
    pub subtitle: Option<String>,
    #[validate(length(min = 1, message = "image is required"))]
    pub image: String,
    pub link: Option<String>,
    pub is_active: Option<bool>,
    #[serde(rename = "order")]
    pub sort_order: Option<i32>,
}

/// DTO for `PUT /api/banners/{id}`. Absent fields keep stored values.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBanner {
    #[validate(length(min = 1, message = "title must not be empty"))]
    pub title: Option<String>,
    pub subtitle: Option<String>,
    #[validate(length(min = 1, message = "image must not be empty"))]
    pub image: Option<String>,
    pub link: Option<String>,
    pub is_active: Option<bool>,
    #[serde(rename = "order")]
    pub sort_order: Option<i32>,
}
