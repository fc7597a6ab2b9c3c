//! Repository for the `banners` table.

use salon_core::types::DbId;
use sqlx::PgPool;

use crate::models::banner::{Banner, CreateBanner, UpdateBanner};

/// Column list for `banners` queries.
const BANNER_COLUMNS: &str = "\
    id, title, subtitle, image, link, is_active, sort_order, \
    created_at, updated_at";

pub struct BannerRepo;

impl BannerRepo {
    /// List visible banners, newest first within the same `sort_order`.
    pub async fn list(pool: &PgPool) -> Result<Vec<Banner>, sqlx::Error> {
        let query = format!(
            "SELECT {BANNER_COLUMNS} FROM banners \
             WHERE is_active = TRUE \
             ORDER BY sort_order, created_at DESC"
        );
        sqlx::query_as::<_, Banner>(&query).fetch_all(pool).await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Banner>, sqlx::Error> {
        let query = format!("SELECT {BANNER_COLUMNS} FROM banners WHERE id = $1");
        sqlx::query_as::<_, Banner>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn create(pool: &PgPool, input: &CreateBanner) -> Result<Banner, sqlx::Error> {
        let query = format!(
            "INSERT INTO banners (title, subtitle, image, link, is_active, sort_order) \
             VALUES ($1, $2, $3, $4, $5, $6) \
             RETURNING {BANNER_COLUMNS}"
        );
        sqlx::query_as::<_, Banner>(&query)
            .bind(&input.title)
            .bind(input.subtitle.as_deref().unwrap_or(""))
            .bind(&input.image)
            .bind(input.link.as_deref().unwrap_or(""))
            .bind(input.is_active.unwrap_or(true))
            .bind(input.sort_order.unwrap_or(0))
            .fetch_one(pool)
            .await
    }

    /// Partial update: absent fields keep their stored values.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateBanner,
    ) -> Result<Option<Banner>, sqlx::Error> {
        let query = format!(
            "UPDATE banners SET \
                 title = COALESCE($2, title), \
                 subtitle = COALESCE($3, subtitle), \
                 image = COALESCE($4, image), \
                 link = COALESCE($5, link), \
                 is_active = COALESCE($6, is_active), \
                 sort_order = COALESCE($7, sort_order), \
                 updated_at = now() \
             WHERE id = $1 \
             RETURNING {BANNER_COLUMNS}"
        );
        sqlx::query_as::<_, Banner>(&query)
            .bind(id)
            .bind(input.title.as_deref())
            .bind(input.subtitle.as_deref())
            .bind(input.image.as_deref())
            .bind(input.link.as_deref())
            .bind(input.is_active)
            .bind(input.sort_order)
            .fetch_optional(pool)
            .await
    }

    /// Hard delete. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM banners WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
