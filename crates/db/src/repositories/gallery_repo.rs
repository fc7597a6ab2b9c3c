//! Repository for the `galleries` table.

use salon_core::enums::GalleryCategory;
use salon_core::types::DbId;
use sqlx::PgPool;

use crate::models::gallery::{CreateGallery, Gallery, UpdateGallery};

/// Column list for `galleries` queries.
const GALLERY_COLUMNS: &str = "\
    id, image, alt, category, is_active, sort_order, created_at, updated_at";

pub struct GalleryRepo;

impl GalleryRepo {
    /// List visible photos, newest first within the same `sort_order`.
    ///
    /// `All` (or no filter) matches every category.
    pub async fn list(
        pool: &PgPool,
        category: Option<GalleryCategory>,
    ) -> Result<Vec<Gallery>, sqlx::Error> {
        match category {
            Some(cat) if cat != GalleryCategory::All => {
                let query = format!(
                    "SELECT {GALLERY_COLUMNS} FROM galleries \
                     WHERE is_active = TRUE AND category = $1 \
                     ORDER BY sort_order, created_at DESC"
                );
                sqlx::query_as::<_, Gallery>(&query)
                    .bind(cat.as_str())
                    .fetch_all(pool)
                    .await
            }
            _ => {
                let query = format!(
                    "SELECT {GALLERY_COLUMNS} FROM galleries \
                     WHERE is_active = TRUE \
                     ORDER BY sort_order, created_at DESC"
                );
                sqlx::query_as::<_, Gallery>(&query).fetch_all(pool).await
            }
        }
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Gallery>, sqlx::Error> {
        let query = format!("SELECT {GALLERY_COLUMNS} FROM galleries WHERE id = $1");
        sqlx::query_as::<_, Gallery>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn create(pool: &PgPool, input: &CreateGallery) -> Result<Gallery, sqlx::Error> {
        let query = format!(
            "INSERT INTO galleries (image, alt, category, is_active, sort_order) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING {GALLERY_COLUMNS}"
        );
        sqlx::query_as::<_, Gallery>(&query)
            .bind(&input.image)
            .bind(input.alt.as_deref().unwrap_or("Gallery image"))
            .bind(input.category.unwrap_or(GalleryCategory::All).as_str())
            .bind(input.is_active.unwrap_or(true))
            .bind(input.sort_order.unwrap_or(0))
            .fetch_one(pool)
            .await
    }

    /// Partial update: absent fields keep their stored values.
    ///
    /// Returns `None` if no photo with the given ID exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateGallery,
    ) -> Result<Option<Gallery>, sqlx::Error> {
        let query = format!(
            "UPDATE galleries SET \
                 image = COALESCE($2, image), \
                 alt = COALESCE($3, alt), \
                 category = COALESCE($4, category), \
                 is_active = COALESCE($5, is_active), \
                 sort_order = COALESCE($6, sort_order), \
                 updated_at = now() \
             WHERE id = $1 \
             RETURNING {GALLERY_COLUMNS}"
        );
        sqlx::query_as::<_, Gallery>(&query)
            .bind(id)
            .bind(input.image.as_deref())
            .bind(input.alt.as_deref())
            .bind(input.category.map(GalleryCategory::as_str))
            .bind(input.is_active)
            .bind(input.sort_order)
            .fetch_optional(pool)
            .await
    }

    /// Hard delete. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM galleries WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
