//! Credential accounts: registration, login and token issuance.

use serde::{Deserialize, Serialize};
use slotbook_core::error::CoreError;
use slotbook_core::types::DbId;
use slotbook_core::validation::{require_id, require_non_empty};
use slotbook_db::models::auth_user::{AuthUserResponse, CreateAuthUser};
use slotbook_db::repositories::{AuthUserRepo, UserRepo};
use sqlx::PgPool;

use crate::auth::jwt::{generate_token, JwtConfig};
use crate::auth::password::{hash_password, verify_password};
use crate::error::{AppError, AppResult};
use crate::services::dangling_reference;

/// Request body for `POST /auth/register`.
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
    /// Optional staff user to link the account to.
    pub user_id: Option<DbId>,
}

/// Request body for `POST /auth/login`.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

/// Successful login payload.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub token_type: &'static str,
    /// Token lifetime in seconds.
    pub expires_in: i64,
    pub account: AuthUserResponse,
}

pub struct AuthService;

impl AuthService {
    /// Create a credential account. Duplicate usernames are a 409.
    pub async fn register(pool: &PgPool, input: RegisterRequest) -> AppResult<AuthUserResponse> {
        require_non_empty("username", &input.username)?;
        require_non_empty("password", &input.password)?;

        let username = input.username.trim();
        if AuthUserRepo::find_by_username(pool, username)
            .await?
            .is_some()
        {
            return Err(CoreError::Conflict("Username already exists".into()).into());
        }

        if let Some(user_id) = input.user_id {
            require_id("user_id", user_id)?;
            if UserRepo::find_by_id(pool, user_id).await?.is_none() {
                return Err(dangling_reference("user_id", user_id));
            }
        }

        let password_hash = hash_password(&input.password)
            .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

        let account = AuthUserRepo::create(
            pool,
            &CreateAuthUser {
                username: username.to_string(),
                password_hash,
                user_id: input.user_id,
            },
        )
        .await?;

        tracing::info!(account_id = account.id, username = %account.username, "Account registered");
        Ok(account.into())
    }

    /// Verify credentials and issue a token. Unknown usernames and wrong
    /// passwords are indistinguishable to the caller.
    pub async fn login(
        pool: &PgPool,
        jwt: &JwtConfig,
        input: LoginRequest,
    ) -> AppResult<LoginResponse> {
        let invalid =
            || AppError::Core(CoreError::Unauthorized("Invalid username or password".into()));

        let account = AuthUserRepo::find_by_username(pool, input.username.trim())
            .await?
            .ok_or_else(invalid)?;

        let password_valid = verify_password(&input.password, &account.password_hash)
            .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;
        if !password_valid {
            tracing::debug!(account_id = account.id, "Login rejected: wrong password");
            return Err(invalid());
        }

        let token = generate_token(account.id, account.user_id, jwt)
            .map_err(|e| AppError::InternalError(format!("Token generation error: {e}")))?;

        if let Some(user_id) = account.user_id {
            UserRepo::record_login(pool, user_id).await?;
        }

        tracing::info!(account_id = account.id, "Login succeeded");
        Ok(LoginResponse {
            token,
            token_type: "Bearer",
            expires_in: jwt.expires_in_secs(),
            account: account.into(),
        })
    }
}
