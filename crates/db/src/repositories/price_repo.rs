//! Repository for the `prices` table.

use salon_core::types::DbId;
use sqlx::PgPool;

use crate::models::price::{CreatePrice, Price, UpdatePrice};

/// Column list for `prices` queries.
const PRICE_COLUMNS: &str = "\
    id, name, price, category, description, is_active, sort_order, \
    created_at, updated_at";

pub struct PriceRepo;

impl PriceRepo {
    /// List visible price entries, optionally filtered by category.
    pub async fn list(pool: &PgPool, category: Option<&str>) -> Result<Vec<Price>, sqlx::Error> {
        match category {
            Some(cat) if cat != "all" => {
                let query = format!(
                    "SELECT {PRICE_COLUMNS} FROM prices \
                     WHERE is_active = TRUE AND category = $1 \
                     ORDER BY sort_order, created_at DESC"
                );
                sqlx::query_as::<_, Price>(&query)
                    .bind(cat)
                    .fetch_all(pool)
                    .await
            }
            _ => {
                let query = format!(
                    "SELECT {PRICE_COLUMNS} FROM prices \
                     WHERE is_active = TRUE \
                     ORDER BY sort_order, created_at DESC"
                );
                sqlx::query_as::<_, Price>(&query).fetch_all(pool).await
            }
        }
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Price>, sqlx::Error> {
        let query = format!("SELECT {PRICE_COLUMNS} FROM prices WHERE id = $1");
        sqlx::query_as::<_, Price>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn create(pool: &PgPool, input: &CreatePrice) -> Result<Price, sqlx::Error> {
        let query = format!(
            "INSERT INTO prices (name, price, category, description, is_active, sort_order) \
             VALUES ($1, $2, $3, $4, $5, $6) \
             RETURNING {PRICE_COLUMNS}"
        );
        sqlx::query_as::<_, Price>(&query)
            .bind(&input.name)
            .bind(input.price)
            .bind(input.category.as_deref().unwrap_or(""))
            .bind(input.description.as_deref().unwrap_or(""))
            .bind(input.is_active.unwrap_or(true))
            .bind(input.sort_order.unwrap_or(0))
            .fetch_one(pool)
            .await
    }

    /// Partial update: absent fields keep their stored values.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdatePrice,
    ) -> Result<Option<Price>, sqlx::Error> {
        let query = format!(
            "UPDATE prices SET \
                 name = COALESCE($2, name), \
                 price = COALESCE($3, price), \
                 category = COALESCE($4, category), \
                 description = COALESCE($5, description), \
                 is_active = COALESCE($6, is_active), \
                 sort_order = COALESCE($7, sort_order), \
                 updated_at = now() \
             WHERE id = $1 \
             RETURNING {PRICE_COLUMNS}"
        );
        sqlx::query_as::<_, Price>(&query)
            .bind(id)
            .bind(input.name.as_deref())
            .bind(input.price)
            .bind(input.category.as_deref())
            .bind(input.description.as_deref())
            .bind(input.is_active)
            .bind(input.sort_order)
            .fetch_optional(pool)
            .await
    }

    /// Hard delete. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM prices WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
