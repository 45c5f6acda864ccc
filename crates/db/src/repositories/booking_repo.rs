//! Repository for the `bookings` table.

use sqlx::PgPool;
use slotbook_core::booking::Slot;
use slotbook_core::types::{DbId, Timestamp};

use crate::models::booking::{Booking, UpdateBooking};

const COLUMNS: &str =
    "id, client_id, service_id, user_id, booking_time, status, created_at, updated_at";

/// Provides CRUD and slot queries for bookings.
pub struct BookingRepo;

impl BookingRepo {
    /// Insert a booking with an already-resolved status.
    ///
    /// A second insert for the same slot fails with a unique violation on
    /// `uq_bookings_user_id_booking_time`.
    pub async fn create(
        pool: &PgPool,
        client_id: DbId,
        service_id: DbId,
        user_id: DbId,
        booking_time: Timestamp,
        status: &str,
    ) -> Result<Booking, sqlx::Error> {
        let query = format!(
            "INSERT INTO bookings (client_id, service_id, user_id, booking_time, status)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Booking>(&query)
            .bind(client_id)
            .bind(service_id)
            .bind(user_id)
            .bind(booking_time)
            .bind(status)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Booking>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM bookings WHERE id = $1");
        sqlx::query_as::<_, Booking>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all bookings, earliest booking time first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Booking>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM bookings ORDER BY booking_time, id");
        sqlx::query_as::<_, Booking>(&query).fetch_all(pool).await
    }

    pub async fn list_by_client(
        pool: &PgPool,
        client_id: DbId,
    ) -> Result<Vec<Booking>, sqlx::Error> {
        Self::list_where(pool, "client_id", client_id).await
    }

    pub async fn list_by_user(pool: &PgPool, user_id: DbId) -> Result<Vec<Booking>, sqlx::Error> {
        Self::list_where(pool, "user_id", user_id).await
    }

    pub async fn list_by_service(
        pool: &PgPool,
        service_id: DbId,
    ) -> Result<Vec<Booking>, sqlx::Error> {
        Self::list_where(pool, "service_id", service_id).await
    }

    /// `column` is always one of the fixed foreign-key names above.
    async fn list_where(
        pool: &PgPool,
        column: &'static str,
        id: DbId,
    ) -> Result<Vec<Booking>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM bookings WHERE {column} = $1 ORDER BY booking_time, id");
        sqlx::query_as::<_, Booking>(&query)
            .bind(id)
            .fetch_all(pool)
            .await
    }

    /// Whether any booking holds `slot`, ignoring the booking `exclude_id`.
    pub async fn is_slot_occupied(
        pool: &PgPool,
        slot: Slot,
        exclude_id: Option<DbId>,
    ) -> Result<bool, sqlx::Error> {
        let occupied: bool = sqlx::query_scalar(
            "SELECT EXISTS(
                SELECT 1 FROM bookings
                WHERE user_id = $1 AND booking_time = $2
                  AND ($3::BIGINT IS NULL OR id <> $3)
             )",
        )
        .bind(slot.user_id)
        .bind(slot.booking_time)
        .bind(exclude_id)
        .fetch_one(pool)
        .await?;
        Ok(occupied)
    }

    /// Update a booking. Only non-`None` fields in `input` are applied.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateBooking,
    ) -> Result<Option<Booking>, sqlx::Error> {
        let query = format!(
            "UPDATE bookings SET
                client_id = COALESCE($2, client_id),
                service_id = COALESCE($3, service_id),
                user_id = COALESCE($4, user_id),
                booking_time = COALESCE($5, booking_time),
                status = COALESCE($6, status)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Booking>(&query)
            .bind(id)
            .bind(input.client_id)
            .bind(input.service_id)
            .bind(input.user_id)
            .bind(input.booking_time)
            .bind(&input.status)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM bookings WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
