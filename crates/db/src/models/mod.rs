//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//! - A `Deserialize` update DTO (all `Option` fields) for patches

pub mod auth_user;
pub mod booking;
pub mod break_period;
pub mod client;
pub mod notification;
pub mod schedule;
pub mod service;
pub mod user;
