//! Service layer: business rules between the HTTP handlers and the
//! repositories.
//!
//! Each service is a zero-sized struct whose methods take `&PgPool`, mirroring
//! the repository style. Handlers never call repositories directly.

use slotbook_core::error::CoreError;
use slotbook_core::types::DbId;

use crate::error::AppError;

pub mod auth;
pub mod booking;
pub mod breaks;
pub mod catalog;
pub mod client;
pub mod notification;
pub mod schedule;
pub mod user;

pub use auth::AuthService;
pub use booking::BookingService;
pub use breaks::BreakService;
pub use catalog::CatalogService;
pub use client::ClientService;
pub use notification::NotificationService;
pub use schedule::ScheduleService;
pub use user::UserService;

/// `404` for a primary-key lookup that found nothing.
pub(crate) fn not_found(entity: &'static str, id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound { entity, id })
}

/// `400` for a foreign key in a request body that points nowhere.
pub(crate) fn dangling_reference(field: &str, id: DbId) -> AppError {
    AppError::Core(CoreError::Validation(format!(
        "{field} {id} does not reference an existing record"
    )))
}
