//! Staff user management.

use serde::Deserialize;
use slotbook_core::error::CoreError;
use slotbook_core::types::DbId;
use slotbook_core::validation::{normalize_optional, reject_blank_override, validate_new_user};
use slotbook_db::models::user::{CreateUser, UpdateUser, UserResponse};
use slotbook_db::repositories::UserRepo;
use sqlx::PgPool;

use crate::auth::password::hash_password;
use crate::error::{AppError, AppResult};
use crate::services::not_found;

/// Request body for `POST /users`.
#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub role: String,
    pub email: Option<String>,
    pub phone_number: Option<String>,
}

/// Request body for `PUT /users/{id}`. Absent fields are left unchanged.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateUserRequest {
    pub username: Option<String>,
    pub password: Option<String>,
    pub role: Option<String>,
    pub email: Option<String>,
    pub phone_number: Option<String>,
}

pub struct UserService;

impl UserService {
    /// Create a staff user. Username and email must be unused.
    pub async fn create(pool: &PgPool, input: CreateUserRequest) -> AppResult<UserResponse> {
        validate_new_user(&input.username, &input.password, &input.role)?;
        let email = normalize_optional(input.email);

        Self::ensure_username_free(pool, &input.username, None).await?;
        if let Some(email) = &email {
            Self::ensure_email_free(pool, email, None).await?;
        }

        let password_hash = hash_password(&input.password)
            .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

        let user = UserRepo::create(
            pool,
            &CreateUser {
                username: input.username.trim().to_string(),
                password_hash,
                role: input.role.trim().to_string(),
                email,
                phone_number: normalize_optional(input.phone_number),
            },
        )
        .await?;

        tracing::info!(user_id = user.id, username = %user.username, "Staff user created");
        Ok(user.into())
    }

    pub async fn get(pool: &PgPool, id: DbId) -> AppResult<UserResponse> {
        let user = UserRepo::find_by_id(pool, id)
            .await?
            .ok_or_else(|| not_found("User", id))?;
        Ok(user.into())
    }

    pub async fn list(pool: &PgPool) -> AppResult<Vec<UserResponse>> {
        let users = UserRepo::list(pool).await?;
        Ok(users.into_iter().map(UserResponse::from).collect())
    }

    /// Apply a partial update. A new password is re-hashed; a new username or
    /// email must not belong to another user.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: UpdateUserRequest,
    ) -> AppResult<UserResponse> {
        reject_blank_override("username", input.username.as_deref())?;
        reject_blank_override("role", input.role.as_deref())?;
        if matches!(input.password.as_deref(), Some("")) {
            return Err(CoreError::Validation("password must not be empty".into()).into());
        }

        if UserRepo::find_by_id(pool, id).await?.is_none() {
            return Err(not_found("User", id));
        }

        let email = normalize_optional(input.email);
        if let Some(username) = &input.username {
            Self::ensure_username_free(pool, username, Some(id)).await?;
        }
        if let Some(email) = &email {
            Self::ensure_email_free(pool, email, Some(id)).await?;
        }

        let password_hash = input
            .password
            .as_deref()
            .map(hash_password)
            .transpose()
            .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

        let user = UserRepo::update(
            pool,
            id,
            &UpdateUser {
                username: input.username.map(|u| u.trim().to_string()),
                role: input.role.map(|r| r.trim().to_string()),
                email,
                phone_number: normalize_optional(input.phone_number),
                password_hash,
            },
        )
        .await?
        .ok_or_else(|| not_found("User", id))?;

        Ok(user.into())
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> AppResult<()> {
        if UserRepo::delete(pool, id).await? {
            tracing::info!(user_id = id, "Staff user deleted");
            Ok(())
        } else {
            Err(not_found("User", id))
        }
    }

    async fn ensure_username_free(
        pool: &PgPool,
        username: &str,
        owner: Option<DbId>,
    ) -> AppResult<()> {
        match UserRepo::find_by_username(pool, username.trim()).await? {
            Some(existing) if Some(existing.id) != owner => {
                Err(CoreError::Conflict("Username already exists".into()).into())
            }
            _ => Ok(()),
        }
    }

    async fn ensure_email_free(pool: &PgPool, email: &str, owner: Option<DbId>) -> AppResult<()> {
        match UserRepo::find_by_email(pool, email).await? {
            Some(existing) if Some(existing.id) != owner => {
                Err(CoreError::Conflict("Email already exists".into()).into())
            }
            _ => Ok(()),
        }
    }
}
