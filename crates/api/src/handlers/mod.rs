pub mod auth;
pub mod booking;
pub mod breaks;
pub mod catalog;
pub mod client;
pub mod notification;
pub mod schedule;
pub mod user;
