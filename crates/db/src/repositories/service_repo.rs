//! Repository for the `services` table.

use salon_core::types::DbId;
use sqlx::PgPool;

use crate::models::service::{CreateService, Service, UpdateService};

/// Column list for `services` queries.
const SERVICE_COLUMNS: &str = "\
    id, name, description, image, category, price, is_active, sort_order, \
    created_at, updated_at";

pub struct ServiceRepo;

impl ServiceRepo {
    /// List visible services. Unlike the other resources, ties on
    /// `sort_order` are broken oldest-first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Service>, sqlx::Error> {
        let query = format!(
            "SELECT {SERVICE_COLUMNS} FROM services \
             WHERE is_active = TRUE \
             ORDER BY sort_order, created_at"
        );
        sqlx::query_as::<_, Service>(&query).fetch_all(pool).await
    }

    /// Case-insensitive substring search over name and description,
    /// visible services only.
    pub async fn search(pool: &PgPool, keyword: &str) -> Result<Vec<Service>, sqlx::Error> {
        let pattern = format!("%{}%", escape_like(keyword));
        let query = format!(
            "SELECT {SERVICE_COLUMNS} FROM services \
             WHERE is_active = TRUE AND (name ILIKE $1 OR description ILIKE $1) \
             ORDER BY sort_order"
        );
        sqlx::query_as::<_, Service>(&query)
            .bind(&pattern)
            .fetch_all(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Service>, sqlx::Error> {
        let query = format!("SELECT {SERVICE_COLUMNS} FROM services WHERE id = $1");
        sqlx::query_as::<_, Service>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn create(pool: &PgPool, input: &CreateService) -> Result<Service, sqlx::Error> {
        let query = format!(
            "INSERT INTO services (name, description, image, category, price, is_active, sort_order) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) \
             RETURNING {SERVICE_COLUMNS}"
        );
        sqlx::query_as::<_, Service>(&query)
            .bind(&input.name)
            .bind(input.description.as_deref().unwrap_or(""))
            .bind(input.image.as_deref().unwrap_or(""))
            .bind(input.category.as_deref().unwrap_or(""))
            .bind(input.price)
            .bind(input.is_active.unwrap_or(true))
            .bind(input.sort_order.unwrap_or(0))
            .fetch_one(pool)
            .await
    }

    /// Partial update: absent fields keep their stored values. `price`
    /// cannot be cleared back to NULL through this path.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateService,
    ) -> Result<Option<Service>, sqlx::Error> {
        let query = format!(
            "UPDATE services SET \
                 name = COALESCE($2, name), \
                 description = COALESCE($3, description), \
                 image = COALESCE($4, image), \
                 category = COALESCE($5, category), \
                 price = COALESCE($6, price), \
                 is_active = COALESCE($7, is_active), \
                 sort_order = COALESCE($8, sort_order), \
                 updated_at = now() \
             WHERE id = $1 \
             RETURNING {SERVICE_COLUMNS}"
        );
        sqlx::query_as::<_, Service>(&query)
            .bind(id)
            .bind(input.name.as_deref())
            .bind(input.description.as_deref())
            .bind(input.image.as_deref())
            .bind(input.category.as_deref())
            .bind(input.price)
            .bind(input.is_active)
            .bind(input.sort_order)
            .fetch_optional(pool)
            .await
    }

    /// Hard delete. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM services WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

/// Escape LIKE metacharacters so user keywords match literally.
fn escape_like(keyword: &str) -> String {
    keyword
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_")
}

#[cfg(test)]
mod tests {
    use super::escape_like;

    #[test]
    fn escapes_like_metacharacters() {
        assert_eq!(escape_like("100%_a\\b"), "100\\%\\_a\\\\b");
    }

    #[test]
    fn leaves_plain_keywords_untouched() {
        assert_eq!(escape_like("tóc"), "tóc");
    }
}
