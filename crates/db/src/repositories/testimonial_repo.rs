//! Repository for the `testimonials` table.

use salon_core::enums::TestimonialPage;
use salon_core::types::DbId;
use sqlx::PgPool;

use crate::models::testimonial::{CreateTestimonial, Testimonial, UpdateTestimonial};

/// Column list for `testimonials` queries.
const TESTIMONIAL_COLUMNS: &str = "\
    id, name, comment, image, rating, page, is_active, sort_order, \
    created_at, updated_at";

pub struct TestimonialRepo;

impl TestimonialRepo {
    /// List visible testimonials, optionally filtered by page.
    ///
    /// Rows tagged `both` match either page filter; filtering by `both`
    /// itself returns everything.
    pub async fn list(
        pool: &PgPool,
        page: Option<TestimonialPage>,
    ) -> Result<Vec<Testimonial>, sqlx::Error> {
        match page {
            Some(page) if page != TestimonialPage::Both => {
                let query = format!(
                    "SELECT {TESTIMONIAL_COLUMNS} FROM testimonials \
                     WHERE is_active = TRUE AND page IN ($1, 'both') \
                     ORDER BY sort_order, created_at DESC"
                );
                sqlx::query_as::<_, Testimonial>(&query)
                    .bind(page.as_str())
                    .fetch_all(pool)
                    .await
            }
            _ => {
                let query = format!(
                    "SELECT {TESTIMONIAL_COLUMNS} FROM testimonials \
                     WHERE is_active = TRUE \
                     ORDER BY sort_order, created_at DESC"
                );
                sqlx::query_as::<_, Testimonial>(&query)
                    .fetch_all(pool)
                    .await
            }
        }
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Testimonial>, sqlx::Error> {
        let query = format!("SELECT {TESTIMONIAL_COLUMNS} FROM testimonials WHERE id = $1");
        sqlx::query_as::<_, Testimonial>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn create(
        pool: &PgPool,
        input: &CreateTestimonial,
    ) -> Result<Testimonial, sqlx::Error> {
        let query = format!(
            "INSERT INTO testimonials (name, comment, image, rating, page, is_active, sort_order) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) \
             RETURNING {TESTIMONIAL_COLUMNS}"
        );
        sqlx::query_as::<_, Testimonial>(&query)
            .bind(&input.name)
            .bind(&input.comment)
            .bind(input.image.as_deref().unwrap_or(""))
            .bind(input.rating.unwrap_or(5))
            .bind(input.page.unwrap_or(TestimonialPage::Both).as_str())
            .bind(input.is_active.unwrap_or(true))
            .bind(input.sort_order.unwrap_or(0))
            .fetch_one(pool)
            .await
    }

    /// Partial update: absent fields keep their stored values.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateTestimonial,
    ) -> Result<Option<Testimonial>, sqlx::Error> {
        let query = format!(
            "UPDATE testimonials SET \
                 name = COALESCE($2, name), \
                 comment = COALESCE($3, comment), \
                 image = COALESCE($4, image), \
                 rating = COALESCE($5, rating), \
                 page = COALESCE($6, page), \
                 is_active = COALESCE($7, is_active), \
                 sort_order = COALESCE($8, sort_order), \
                 updated_at = now() \
             WHERE id = $1 \
             RETURNING {TESTIMONIAL_COLUMNS}"
        );
        sqlx::query_as::<_, Testimonial>(&query)
            .bind(id)
            .bind(input.name.as_deref())
            .bind(input.comment.as_deref())
            .bind(input.image.as_deref())
            .bind(input.rating)
            .bind(input.page.map(TestimonialPage::as_str))
            .bind(input.is_active)
            .bind(input.sort_order)
            .fetch_optional(pool)
            .await
    }

    /// Hard delete. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM testimonials WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
