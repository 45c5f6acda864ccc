//! Staff working schedules.

use slotbook_core::error::CoreError;
use slotbook_core::types::DbId;
use slotbook_core::validation::{
    reject_blank_override, require_id, validate_schedule, validate_schedule_day_len,
};
use slotbook_db::models::schedule::{CreateSchedule, Schedule, UpdateSchedule};
use slotbook_db::repositories::{ScheduleRepo, UserRepo};
use sqlx::PgPool;

use crate::error::AppResult;
use crate::services::{dangling_reference, not_found};

pub struct ScheduleService;

impl ScheduleService {
    pub async fn create(pool: &PgPool, input: CreateSchedule) -> AppResult<Schedule> {
        validate_schedule(
            input.user_id,
            &input.schedule_day,
            &input.start_time,
            &input.end_time,
        )?;
        ensure_user(pool, input.user_id).await?;

        Ok(ScheduleRepo::create(pool, &input).await?)
    }

    pub async fn get(pool: &PgPool, id: DbId) -> AppResult<Schedule> {
        ScheduleRepo::find_by_id(pool, id)
            .await?
            .ok_or_else(|| not_found("Schedule", id))
    }

    pub async fn list(pool: &PgPool) -> AppResult<Vec<Schedule>> {
        Ok(ScheduleRepo::list(pool).await?)
    }

    /// Schedules of one staff user. `user_id` is mandatory.
    pub async fn list_by_user(pool: &PgPool, user_id: Option<DbId>) -> AppResult<Vec<Schedule>> {
        let user_id =
            user_id.ok_or_else(|| CoreError::Validation("user_id is required".into()))?;
        require_id("user_id", user_id)?;
        Ok(ScheduleRepo::list_by_user(pool, user_id).await?)
    }

    pub async fn update(pool: &PgPool, id: DbId, input: UpdateSchedule) -> AppResult<Schedule> {
        reject_blank_override("schedule_day", input.schedule_day.as_deref())?;
        reject_blank_override("start_time", input.start_time.as_deref())?;
        reject_blank_override("end_time", input.end_time.as_deref())?;
        if let Some(day) = &input.schedule_day {
            validate_schedule_day_len(day)?;
        }
        if let Some(user_id) = input.user_id {
            require_id("user_id", user_id)?;
            ensure_user(pool, user_id).await?;
        }

        ScheduleRepo::update(pool, id, &input)
            .await?
            .ok_or_else(|| not_found("Schedule", id))
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> AppResult<()> {
        if ScheduleRepo::delete(pool, id).await? {
            Ok(())
        } else {
            Err(not_found("Schedule", id))
        }
    }
}

async fn ensure_user(pool: &PgPool, user_id: DbId) -> AppResult<()> {
    match UserRepo::find_by_id(pool, user_id).await? {
        Some(_) => Ok(()),
        None => Err(dangling_reference("user_id", user_id)),
    }
}
