//! Repository for the `clients` table.

use sqlx::PgPool;
use slotbook_core::types::DbId;

use crate::models::client::{Client, CreateClient, UpdateClient};

const COLUMNS: &str = "id, first_name, last_name, email, phone_number, tg_id, tg_nickname, \
                       created_at, updated_at";

/// Provides CRUD and lookup operations for clients.
pub struct ClientRepo;

impl ClientRepo {
    /// Insert a new client, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateClient) -> Result<Client, sqlx::Error> {
        let query = format!(
            "INSERT INTO clients (first_name, last_name, email, phone_number, tg_id, tg_nickname)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Client>(&query)
            .bind(&input.first_name)
            .bind(&input.last_name)
            .bind(&input.email)
            .bind(&input.phone_number)
            .bind(input.tg_id)
            .bind(&input.tg_nickname)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Client>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM clients WHERE id = $1");
        sqlx::query_as::<_, Client>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find several clients at once. Missing IDs are silently skipped.
    pub async fn find_by_ids(pool: &PgPool, ids: &[DbId]) -> Result<Vec<Client>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM clients WHERE id = ANY($1)");
        sqlx::query_as::<_, Client>(&query)
            .bind(ids)
            .fetch_all(pool)
            .await
    }

    pub async fn find_by_email(pool: &PgPool, email: &str) -> Result<Option<Client>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM clients WHERE email = $1");
        sqlx::query_as::<_, Client>(&query)
            .bind(email)
            .fetch_optional(pool)
            .await
    }

    /// Find the first client with the given phone number.
    ///
    /// Phone numbers are not unique, so the lowest ID wins.
    pub async fn find_by_phone(pool: &PgPool, phone: &str) -> Result<Option<Client>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM clients WHERE phone_number = $1 ORDER BY id LIMIT 1");
        sqlx::query_as::<_, Client>(&query)
            .bind(phone)
            .fetch_optional(pool)
            .await
    }

    pub async fn find_by_tg_id(pool: &PgPool, tg_id: i64) -> Result<Option<Client>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM clients WHERE tg_id = $1");
        sqlx::query_as::<_, Client>(&query)
            .bind(tg_id)
            .fetch_optional(pool)
            .await
    }

    /// Case-insensitive substring match on first or last name.
    pub async fn filter_by_name(pool: &PgPool, name: &str) -> Result<Vec<Client>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM clients
             WHERE first_name ILIKE $1 OR last_name ILIKE $1
             ORDER BY id"
        );
        sqlx::query_as::<_, Client>(&query)
            .bind(format!("%{}%", escape_like(name)))
            .fetch_all(pool)
            .await
    }

    /// Whether any client has the given phone number.
    pub async fn exists_by_phone(pool: &PgPool, phone: &str) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM clients WHERE phone_number = $1)")
            .bind(phone)
            .fetch_one(pool)
            .await
    }

    /// Whether any client has the given telegram id.
    pub async fn exists_by_tg_id(pool: &PgPool, tg_id: i64) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM clients WHERE tg_id = $1)")
            .bind(tg_id)
            .fetch_one(pool)
            .await
    }

    pub async fn list(pool: &PgPool) -> Result<Vec<Client>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM clients ORDER BY id");
        sqlx::query_as::<_, Client>(&query).fetch_all(pool).await
    }

    /// Update a client. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateClient,
    ) -> Result<Option<Client>, sqlx::Error> {
        let query = format!(
            "UPDATE clients SET
                first_name = COALESCE($2, first_name),
                last_name = COALESCE($3, last_name),
                email = COALESCE($4, email),
                phone_number = COALESCE($5, phone_number),
                tg_id = COALESCE($6, tg_id),
                tg_nickname = COALESCE($7, tg_nickname)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Client>(&query)
            .bind(id)
            .bind(&input.first_name)
            .bind(&input.last_name)
            .bind(&input.email)
            .bind(&input.phone_number)
            .bind(input.tg_id)
            .bind(&input.tg_nickname)
            .fetch_optional(pool)
            .await
    }

    /// Delete a client by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM clients WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

/// Escape `%`, `_` and `\` so user input matches literally inside ILIKE.
fn escape_like(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        if matches!(c, '%' | '_' | '\\') {
            out.push('\\');
        }
        out.push(c);
    }
    out
}
