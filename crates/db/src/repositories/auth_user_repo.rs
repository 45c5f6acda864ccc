//! Repository for the `auth_users` table.

use sqlx::PgPool;

use crate::models::auth_user::{AuthUser, CreateAuthUser};

const COLUMNS: &str = "id, username, password_hash, user_id, created_at, updated_at";

/// Credential account storage used by register and login.
pub struct AuthUserRepo;

impl AuthUserRepo {
    pub async fn create(pool: &PgPool, input: &CreateAuthUser) -> Result<AuthUser, sqlx::Error> {
        let query = format!(
            "INSERT INTO auth_users (username, password_hash, user_id)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, AuthUser>(&query)
            .bind(&input.username)
            .bind(&input.password_hash)
            .bind(input.user_id)
            .fetch_one(pool)
            .await
    }

    /// Find an account by username (case-sensitive).
    pub async fn find_by_username(
        pool: &PgPool,
        username: &str,
    ) -> Result<Option<AuthUser>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM auth_users WHERE username = $1");
        sqlx::query_as::<_, AuthUser>(&query)
            .bind(username)
            .fetch_optional(pool)
            .await
    }
}
