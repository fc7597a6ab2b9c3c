//! Repository for the `contacts` table.

use salon_core::types::DbId;
use sqlx::PgPool;

use crate::models::contact::{Contact, CreateContact, UpdateContact};

/// Column list for `contacts` queries.
const CONTACT_COLUMNS: &str = "\
    id, name, phone, email, address, note, is_active, sort_order, \
    created_at, updated_at";

pub struct ContactRepo;

impl ContactRepo {
    /// List visible contact entries, newest first within the same
    /// `sort_order`.
    pub async fn list(pool: &PgPool) -> Result<Vec<Contact>, sqlx::Error> {
        let query = format!(
            "SELECT {CONTACT_COLUMNS} FROM contacts \
             WHERE is_active = TRUE \
             ORDER BY sort_order, created_at DESC"
        );
        sqlx::query_as::<_, Contact>(&query).fetch_all(pool).await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Contact>, sqlx::Error> {
        let query = format!("SELECT {CONTACT_COLUMNS} FROM contacts WHERE id = $1");
        sqlx::query_as::<_, Contact>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn create(pool: &PgPool, input: &CreateContact) -> Result<Contact, sqlx::Error> {
        let query = format!(
            "INSERT INTO contacts (name, phone, email, address, note, is_active, sort_order) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) \
             RETURNING {CONTACT_COLUMNS}"
        );
        sqlx::query_as::<_, Contact>(&query)
            .bind(&input.name)
            .bind(input.phone.as_deref().unwrap_or(""))
            .bind(input.email.as_deref().unwrap_or(""))
            .bind(input.address.as_deref().unwrap_or(""))
            .bind(input.note.as_deref().unwrap_or(""))
            .bind(input.is_active.unwrap_or(true))
            .bind(input.sort_order.unwrap_or(0))
            .fetch_one(pool)
            .await
    }

    /// Partial update: absent fields keep their stored values.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateContact,
    ) -> Result<Option<Contact>, sqlx::Error> {
        let query = format!(
            "UPDATE contacts SET \
                 name = COALESCE($2, name), \
                 phone = COALESCE($3, phone), \
                 email = COALESCE($4, email), \
                 address = COALESCE($5, address), \
                 note = COALESCE($6, note), \
                 is_active = COALESCE($7, is_active), \
                 sort_order = COALESCE($8, sort_order), \
                 updated_at = now() \
             WHERE id = $1 \
             RETURNING {CONTACT_COLUMNS}"
        );
        sqlx::query_as::<_, Contact>(&query)
            .bind(id)
            .bind(input.name.as_deref())
            .bind(input.phone.as_deref())
            .bind(input.email.as_deref())
            .bind(input.address.as_deref())
            .bind(input.note.as_deref())
            .bind(input.is_active)
            .bind(input.sort_order)
            .fetch_optional(pool)
            .await
    }

    /// Hard delete. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM contacts WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
