use crate::types::DbId;

/// Domain-level error shared by every layer above the database.
///
/// Each variant corresponds to one HTTP status class; the mapping lives in
/// the API crate's `AppError`.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    /// A lookup by something other than a primary key found nothing.
    #[error("{0}")]
    NotFoundBy(String),

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),
}
