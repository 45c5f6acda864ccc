//! Staff breaks.

use slotbook_core::types::DbId;
use slotbook_core::validation::{require_id, validate_break_window};
use slotbook_db::models::break_period::{Break, CreateBreak, UpdateBreak};
use slotbook_db::repositories::{BreakRepo, UserRepo};
use sqlx::PgPool;

use crate::error::AppResult;
use crate::services::{dangling_reference, not_found};

pub struct BreakService;

impl BreakService {
    pub async fn create(pool: &PgPool, input: CreateBreak) -> AppResult<Break> {
        require_id("user_id", input.user_id)?;
        validate_break_window(input.break_start, input.break_end)?;
        if UserRepo::find_by_id(pool, input.user_id).await?.is_none() {
            return Err(dangling_reference("user_id", input.user_id));
        }

        Ok(BreakRepo::create(pool, &input).await?)
    }

    pub async fn get(pool: &PgPool, id: DbId) -> AppResult<Break> {
        BreakRepo::find_by_id(pool, id)
            .await?
            .ok_or_else(|| not_found("Break", id))
    }

    pub async fn list(pool: &PgPool) -> AppResult<Vec<Break>> {
        Ok(BreakRepo::list(pool).await?)
    }

    /// Partial update; the window is re-checked against the merged row.
    pub async fn update(pool: &PgPool, id: DbId, input: UpdateBreak) -> AppResult<Break> {
        let existing = Self::get(pool, id).await?;
        validate_break_window(
            input.break_start.unwrap_or(existing.break_start),
            input.break_end.unwrap_or(existing.break_end),
        )?;
        if let Some(user_id) = input.user_id {
            require_id("user_id", user_id)?;
            if UserRepo::find_by_id(pool, user_id).await?.is_none() {
                return Err(dangling_reference("user_id", user_id));
            }
        }

        BreakRepo::update(pool, id, &input)
            .await?
            .ok_or_else(|| not_found("Break", id))
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> AppResult<()> {
        if BreakRepo::delete(pool, id).await? {
            Ok(())
        } else {
            Err(not_found("Break", id))
        }
    }
}
