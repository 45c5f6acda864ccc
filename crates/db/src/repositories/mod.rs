//! Repository layer: zero-sized structs with async CRUD methods over `&PgPool`.

pub mod auth_user_repo;
pub mod booking_repo;
pub mod break_repo;
pub mod client_repo;
pub mod notification_repo;
pub mod schedule_repo;
pub mod service_repo;
pub mod user_repo;

pub use auth_user_repo::AuthUserRepo;
pub use booking_repo::BookingRepo;
pub use break_repo::BreakRepo;
pub use client_repo::ClientRepo;
pub use notification_repo::NotificationRepo;
pub use schedule_repo::ScheduleRepo;
pub use service_repo::ServiceRepo;
pub use user_repo::UserRepo;
