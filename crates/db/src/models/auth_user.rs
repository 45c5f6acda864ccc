//! Credential account model (`auth_users` table).
//!
//! Separate from the staff [`User`](crate::models::user::User) profile; an
//! account may optionally be linked to one.

use serde::Serialize;
use slotbook_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// Full credential row. Contains the password hash; never serialize it.
#[derive(Debug, Clone, FromRow)]
pub struct AuthUser {
    pub id: DbId,
    pub username: String,
    pub password_hash: String,
    pub user_id: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Public view of a credential account.
#[derive(Debug, Clone, Serialize)]
pub struct AuthUserResponse {
    pub id: DbId,
    pub username: String,
    pub user_id: Option<DbId>,
    pub created_at: Timestamp,
}

impl From<AuthUser> for AuthUserResponse {
    fn from(account: AuthUser) -> Self {
        Self {
            id: account.id,
            username: account.username,
            user_id: account.user_id,
            created_at: account.created_at,
        }
    }
}

/// DTO for inserting a credential account. The password is already hashed.
#[derive(Debug)]
pub struct CreateAuthUser {
    pub username: String,
    pub password_hash: String,
    pub user_id: Option<DbId>,
}
