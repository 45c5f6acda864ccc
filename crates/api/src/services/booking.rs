//! Bookings and slot conflict detection.
//!
//! A slot is (staff user, exact booking time). Create and update refuse an
//! occupied slot with 409; the `uq_bookings_user_id_booking_time` constraint
//! catches the concurrent inserts that slip past the pre-check, and the
//! error mapper reports those as 409 too.

use std::collections::HashMap;

use slotbook_core::booking::{initial_status, parse_booking_time, Slot};
use slotbook_core::error::CoreError;
use slotbook_core::types::DbId;
use slotbook_core::validation::{reject_blank_override, require_id};
use slotbook_db::models::booking::{Booking, BookingDetail, CreateBooking, UpdateBooking};
use slotbook_db::models::client::Client;
use slotbook_db::models::service::Service;
use slotbook_db::models::user::UserResponse;
use slotbook_db::repositories::{BookingRepo, ClientRepo, ServiceRepo, UserRepo};
use sqlx::PgPool;

use crate::error::AppResult;
use crate::query::AvailabilityParams;
use crate::services::{dangling_reference, not_found};

const SLOT_TAKEN: &str = "Time slot is already booked";

pub struct BookingService;

impl BookingService {
    /// Create a booking after checking its references and its slot.
    pub async fn create(pool: &PgPool, input: CreateBooking) -> AppResult<Booking> {
        require_id("client_id", input.client_id)?;
        require_id("service_id", input.service_id)?;
        require_id("user_id", input.user_id)?;
        ensure_references(
            pool,
            Some(input.client_id),
            Some(input.service_id),
            Some(input.user_id),
        )
        .await?;

        let slot = Slot::new(input.user_id, input.booking_time);
        if BookingRepo::is_slot_occupied(pool, slot, None).await? {
            tracing::warn!(
                user_id = slot.user_id,
                booking_time = %slot.booking_time,
                "Booking rejected: slot already taken"
            );
            return Err(CoreError::Conflict(SLOT_TAKEN.into()).into());
        }

        let booking = BookingRepo::create(
            pool,
            input.client_id,
            input.service_id,
            input.user_id,
            input.booking_time,
            &initial_status(input.status.as_deref()),
        )
        .await?;

        tracing::info!(
            booking_id = booking.id,
            user_id = booking.user_id,
            booking_time = %booking.booking_time,
            "Booking created"
        );
        Ok(booking)
    }

    /// A booking with its client, service and staff user attached.
    pub async fn get(pool: &PgPool, id: DbId) -> AppResult<BookingDetail> {
        let booking = BookingRepo::find_by_id(pool, id)
            .await?
            .ok_or_else(|| not_found("Booking", id))?;
        let mut details = attach_details(pool, vec![booking]).await?;
        details.pop().ok_or_else(|| not_found("Booking", id))
    }

    /// All bookings with their related rows attached.
    pub async fn list(pool: &PgPool) -> AppResult<Vec<BookingDetail>> {
        let bookings = BookingRepo::list(pool).await?;
        Ok(attach_details(pool, bookings).await?)
    }

    pub async fn list_by_client(pool: &PgPool, client_id: DbId) -> AppResult<Vec<Booking>> {
        Ok(BookingRepo::list_by_client(pool, client_id).await?)
    }

    pub async fn list_by_user(pool: &PgPool, user_id: DbId) -> AppResult<Vec<Booking>> {
        Ok(BookingRepo::list_by_user(pool, user_id).await?)
    }

    pub async fn list_by_service(pool: &PgPool, service_id: DbId) -> AppResult<Vec<Booking>> {
        Ok(BookingRepo::list_by_service(pool, service_id).await?)
    }

    /// `true` when no booking holds the requested slot.
    pub async fn is_available(pool: &PgPool, params: &AvailabilityParams) -> AppResult<bool> {
        let user_id = params
            .user_id
            .ok_or_else(|| CoreError::Validation("user_id is required".into()))?;
        require_id("user_id", user_id)?;
        let booking_time = parse_booking_time(params.booking_time.as_deref().unwrap_or_default())?;

        let occupied =
            BookingRepo::is_slot_occupied(pool, Slot::new(user_id, booking_time), None).await?;
        Ok(!occupied)
    }

    /// Partial update. Moving a booking to another staff user or time
    /// re-checks the target slot, ignoring the booking itself.
    pub async fn update(pool: &PgPool, id: DbId, input: UpdateBooking) -> AppResult<Booking> {
        reject_blank_override("status", input.status.as_deref())?;
        for (field, value) in [
            ("client_id", input.client_id),
            ("service_id", input.service_id),
            ("user_id", input.user_id),
        ] {
            if let Some(value) = value {
                require_id(field, value)?;
            }
        }

        let existing = BookingRepo::find_by_id(pool, id)
            .await?
            .ok_or_else(|| not_found("Booking", id))?;
        ensure_references(pool, input.client_id, input.service_id, input.user_id).await?;

        let slot = Slot::new(
            input.user_id.unwrap_or(existing.user_id),
            input.booking_time.unwrap_or(existing.booking_time),
        );
        if slot != Slot::new(existing.user_id, existing.booking_time)
            && BookingRepo::is_slot_occupied(pool, slot, Some(id)).await?
        {
            tracing::warn!(
                booking_id = id,
                user_id = slot.user_id,
                "Booking move rejected: slot already taken"
            );
            return Err(CoreError::Conflict(SLOT_TAKEN.into()).into());
        }

        BookingRepo::update(pool, id, &input)
            .await?
            .ok_or_else(|| not_found("Booking", id))
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> AppResult<()> {
        if BookingRepo::delete(pool, id).await? {
            tracing::info!(booking_id = id, "Booking deleted");
            Ok(())
        } else {
            Err(not_found("Booking", id))
        }
    }
}

/// Reject references to rows that do not exist (400, not 409).
async fn ensure_references(
    pool: &PgPool,
    client_id: Option<DbId>,
    service_id: Option<DbId>,
    user_id: Option<DbId>,
) -> AppResult<()> {
    if let Some(id) = client_id {
        if ClientRepo::find_by_id(pool, id).await?.is_none() {
            return Err(dangling_reference("client_id", id));
        }
    }
    if let Some(id) = service_id {
        if ServiceRepo::find_by_id(pool, id).await?.is_none() {
            return Err(dangling_reference("service_id", id));
        }
    }
    if let Some(id) = user_id {
        if UserRepo::find_by_id(pool, id).await?.is_none() {
            return Err(dangling_reference("user_id", id));
        }
    }
    Ok(())
}

/// Load the related rows for a batch of bookings with one query per table.
async fn attach_details(
    pool: &PgPool,
    bookings: Vec<Booking>,
) -> Result<Vec<BookingDetail>, sqlx::Error> {
    let client_ids = unique_ids(bookings.iter().map(|b| b.client_id));
    let service_ids = unique_ids(bookings.iter().map(|b| b.service_id));
    let user_ids = unique_ids(bookings.iter().map(|b| b.user_id));

    let clients: HashMap<DbId, Client> = ClientRepo::find_by_ids(pool, &client_ids)
        .await?
        .into_iter()
        .map(|c| (c.id, c))
        .collect();
    let services: HashMap<DbId, Service> = ServiceRepo::find_by_ids(pool, &service_ids)
        .await?
        .into_iter()
        .map(|s| (s.id, s))
        .collect();
    let users: HashMap<DbId, UserResponse> = UserRepo::find_by_ids(pool, &user_ids)
        .await?
        .into_iter()
        .map(|u| (u.id, UserResponse::from(u)))
        .collect();

    Ok(bookings
        .into_iter()
        .map(|booking| BookingDetail {
            client: clients.get(&booking.client_id).cloned(),
            service: services.get(&booking.service_id).cloned(),
            user: users.get(&booking.user_id).cloned(),
            booking,
        })
        .collect())
}

fn unique_ids(ids: impl Iterator<Item = DbId>) -> Vec<DbId> {
    let mut ids: Vec<DbId> = ids.collect();
    ids.sort_unstable();
    ids.dedup();
    ids
}
