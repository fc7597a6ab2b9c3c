//! Gallery photo model and DTOs.
//!
//! Wire format is camelCase with `sort_order` exposed as `order`, matching
//! the JSON the admin UI reads and writes.

use salon_core::enums::GalleryCategory;
use salon_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `galleries` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Gallery {
    pub id: DbId,
    pub image: String,
    pub alt: String,
    pub category: String,
    pub is_active: bool,
    #[serde(rename = "order")]
    pub sort_order: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for `POST /api/galleries`.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateGallery {
    #[validate(length(min = 1, message = "image is required"))]
    pub image: String,
    pub alt: Option<String>,
    pub category: Option<GalleryCategory>,
    pub is_active: Option<bool>,
    #[serde(rename = "order")]
    pub sort_order: Option<i32>,
}

/// DTO for `PUT /api/galleries/{id}`. Absent fields keep stored values.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateGallery {
    #[validate(length(min = 1, message = "image must not be empty"))]
    pub image: Option<String>,
    pub alt: Option<String>,
    pub category: Option<GalleryCategory>,
    pub is_active: Option<bool>,
    #[serde(rename = "order")]
    pub sort_order: Option<i32>,
}

/// Query parameters for `GET /api/galleries`.
#[derive(Debug, Clone, Deserialize)]
pub struct GalleryListParams {
    pub category: Option<GalleryCategory>,
}
