//! Service catalog (the treatments / session types that can be booked).

use slotbook_core::types::DbId;
use slotbook_core::validation::{reject_blank_override, require_non_empty, validate_service_terms};
use slotbook_db::models::service::{CreateService, Service, UpdateService};
use slotbook_db::repositories::ServiceRepo;
use sqlx::PgPool;

use crate::error::AppResult;
use crate::services::not_found;

pub struct CatalogService;

impl CatalogService {
    /// Create a service with a name, positive price and positive duration.
    pub async fn create(pool: &PgPool, input: CreateService) -> AppResult<Service> {
        require_non_empty("name", &input.name)?;
        validate_service_terms(input.price, input.duration)?;

        let service = ServiceRepo::create(pool, &input).await?;
        tracing::info!(service_id = service.id, name = %service.name, "Service created");
        Ok(service)
    }

    pub async fn get(pool: &PgPool, id: DbId) -> AppResult<Service> {
        ServiceRepo::find_by_id(pool, id)
            .await?
            .ok_or_else(|| not_found("Service", id))
    }

    pub async fn list(pool: &PgPool, active_only: bool) -> AppResult<Vec<Service>> {
        let services = if active_only {
            ServiceRepo::list_active(pool).await?
        } else {
            ServiceRepo::list(pool).await?
        };
        Ok(services)
    }

    /// Partial update. Price and duration are validated on the merged row, so
    /// an update touching only the name never trips the price rule.
    pub async fn update(pool: &PgPool, id: DbId, input: UpdateService) -> AppResult<Service> {
        reject_blank_override("name", input.name.as_deref())?;

        let existing = Self::get(pool, id).await?;
        validate_service_terms(
            input.price.unwrap_or(existing.price),
            input.duration.unwrap_or(existing.duration),
        )?;

        ServiceRepo::update(pool, id, &input)
            .await?
            .ok_or_else(|| not_found("Service", id))
    }

    /// Take a service off the catalog without deleting its bookings.
    pub async fn deactivate(pool: &PgPool, id: DbId) -> AppResult<Service> {
        let service = ServiceRepo::deactivate(pool, id)
            .await?
            .ok_or_else(|| not_found("Service", id))?;
        tracing::info!(service_id = id, "Service deactivated");
        Ok(service)
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> AppResult<()> {
        if ServiceRepo::delete(pool, id).await? {
            Ok(())
        } else {
            Err(not_found("Service", id))
        }
    }
}
