//! Client management, lookups and quick-add.

use slotbook_core::client::{existence_key, search_keys, validate_quick_add, ClientLookup};
use slotbook_core::error::CoreError;
use slotbook_core::types::DbId;
use slotbook_core::validation::normalize_optional;
use slotbook_db::models::client::{Client, CreateClient, UpdateClient};
use slotbook_db::repositories::ClientRepo;
use sqlx::PgPool;

use crate::error::AppResult;
use crate::services::not_found;

pub struct ClientService;

impl ClientService {
    pub async fn create(pool: &PgPool, input: CreateClient) -> AppResult<Client> {
        let client = ClientRepo::create(pool, &normalize_create(input)).await?;
        tracing::info!(client_id = client.id, "Client created");
        Ok(client)
    }

    pub async fn get(pool: &PgPool, id: DbId) -> AppResult<Client> {
        ClientRepo::find_by_id(pool, id)
            .await?
            .ok_or_else(|| not_found("Client", id))
    }

    pub async fn list(pool: &PgPool) -> AppResult<Vec<Client>> {
        Ok(ClientRepo::list(pool).await?)
    }

    pub async fn update(pool: &PgPool, id: DbId, input: UpdateClient) -> AppResult<Client> {
        let input = UpdateClient {
            email: normalize_optional(input.email),
            phone_number: normalize_optional(input.phone_number),
            tg_id: input.tg_id.filter(|id| *id != 0),
            ..input
        };
        ClientRepo::update(pool, id, &input)
            .await?
            .ok_or_else(|| not_found("Client", id))
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> AppResult<()> {
        if ClientRepo::delete(pool, id).await? {
            Ok(())
        } else {
            Err(not_found("Client", id))
        }
    }

    pub async fn find_by_tg_id(pool: &PgPool, tg_id: i64) -> AppResult<Client> {
        ClientRepo::find_by_tg_id(pool, tg_id).await?.ok_or_else(|| {
            CoreError::NotFoundBy(format!("Client with tg_id {tg_id} not found")).into()
        })
    }

    /// Case-insensitive substring match on first or last name. An absent or
    /// empty name matches every client.
    pub async fn filter_by_name(pool: &PgPool, name: Option<&str>) -> AppResult<Vec<Client>> {
        let name = name.unwrap_or_default().trim();
        Ok(ClientRepo::filter_by_name(pool, name).await?)
    }

    /// Create a client from a phone number and/or telegram id, refusing
    /// duplicates on either.
    pub async fn quick_add(pool: &PgPool, input: CreateClient) -> AppResult<Client> {
        let input = normalize_create(input);
        validate_quick_add(input.phone_number.as_deref(), input.tg_id)?;

        if let Some(phone) = &input.phone_number {
            if ClientRepo::exists_by_phone(pool, phone).await? {
                return Err(CoreError::Conflict(
                    "Client with this phone number already exists".into(),
                )
                .into());
            }
        }
        if let Some(tg_id) = input.tg_id {
            if ClientRepo::exists_by_tg_id(pool, tg_id).await? {
                return Err(
                    CoreError::Conflict("Client with this tg_id already exists".into()).into(),
                );
            }
        }

        let client = ClientRepo::create(pool, &input).await?;
        tracing::info!(client_id = client.id, "Client quick-added");
        Ok(client)
    }

    /// Find a client by email, falling back to phone number.
    pub async fn search(
        pool: &PgPool,
        email: Option<&str>,
        phone: Option<&str>,
    ) -> AppResult<Client> {
        for key in search_keys(email, phone)? {
            if let Some(client) = Self::lookup(pool, key).await? {
                return Ok(client);
            }
        }
        Err(CoreError::NotFoundBy("Client not found".into()).into())
    }

    /// Whether a client with the phone number (or, failing that, telegram id)
    /// exists.
    pub async fn exists(pool: &PgPool, phone: Option<&str>, tg_id: Option<i64>) -> AppResult<bool> {
        let key = existence_key(phone, tg_id)?;
        Ok(Self::lookup(pool, key).await?.is_some())
    }

    async fn lookup(pool: &PgPool, key: ClientLookup<'_>) -> Result<Option<Client>, sqlx::Error> {
        match key {
            ClientLookup::Email(email) => ClientRepo::find_by_email(pool, email).await,
            ClientLookup::Phone(phone) => ClientRepo::find_by_phone(pool, phone).await,
            ClientLookup::TelegramId(tg_id) => ClientRepo::find_by_tg_id(pool, tg_id).await,
        }
    }
}

/// Blank contact fields and a zero telegram id mean "not supplied"; storing
/// them would collide on the unique indexes.
fn normalize_create(input: CreateClient) -> CreateClient {
    CreateClient {
        first_name: input.first_name.trim().to_string(),
        last_name: input.last_name.trim().to_string(),
        email: normalize_optional(input.email),
        phone_number: normalize_optional(input.phone_number),
        tg_id: input.tg_id.filter(|id| *id != 0),
        tg_nickname: normalize_optional(input.tg_nickname),
    }
}
