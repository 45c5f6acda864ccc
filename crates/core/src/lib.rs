//! Domain types, error taxonomy, and pure business rules for slotbook.
//!
//! Nothing in this crate touches the database or HTTP; the `db` and `api`
//! crates call into these functions before they persist anything.

pub mod booking;
pub mod client;
pub mod error;
pub mod types;
pub mod validation;
