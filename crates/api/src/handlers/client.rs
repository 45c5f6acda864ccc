//! Handlers for the `/clients` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;
use slotbook_core::types::DbId;
use slotbook_db::models::client::{Client, CreateClient, UpdateClient};

use crate::error::AppResult;
use crate::extract::{ValidJson, ValidPath, ValidQuery};
use crate::middleware::auth::AuthContext;
use crate::query::{ClientCheckParams, ClientSearchParams, NameParams};
use crate::response::{ApiResponse, Deleted};
use crate::services::ClientService;
use crate::state::AppState;

/// Payload of `GET /clients/check`.
#[derive(Debug, Serialize)]
pub struct ExistsResponse {
    pub exists: bool,
}

/// POST /api/clients
pub async fn create(
    _auth: AuthContext,
    State(state): State<AppState>,
    ValidJson(input): ValidJson<CreateClient>,
) -> AppResult<(StatusCode, Json<ApiResponse<Client>>)> {
    let client = ClientService::create(&state.pool, input).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::ok(client))))
}

/// GET /api/clients
pub async fn list(
    _auth: AuthContext,
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<Vec<Client>>>> {
    let clients = ClientService::list(&state.pool).await?;
    Ok(Json(ApiResponse::ok(clients)))
}

/// GET /api/clients/{id}
pub async fn get_by_id(
    _auth: AuthContext,
    State(state): State<AppState>,
    ValidPath(id): ValidPath<DbId>,
) -> AppResult<Json<ApiResponse<Client>>> {
    let client = ClientService::get(&state.pool, id).await?;
    Ok(Json(ApiResponse::ok(client)))
}

/// PUT /api/clients/{id}
pub async fn update(
    _auth: AuthContext,
    State(state): State<AppState>,
    ValidPath(id): ValidPath<DbId>,
    ValidJson(input): ValidJson<UpdateClient>,
) -> AppResult<Json<ApiResponse<Client>>> {
    let client = ClientService::update(&state.pool, id, input).await?;
    Ok(Json(ApiResponse::ok(client)))
}

/// DELETE /api/clients/{id}
pub async fn delete(
    _auth: AuthContext,
    State(state): State<AppState>,
    ValidPath(id): ValidPath<DbId>,
) -> AppResult<Json<ApiResponse<Deleted>>> {
    ClientService::delete(&state.pool, id).await?;
    Ok(Json(ApiResponse::ok(Deleted { id })))
}

/// GET /api/clients/telegram/{tg_id}
pub async fn get_by_telegram(
    _auth: AuthContext,
    State(state): State<AppState>,
    ValidPath(tg_id): ValidPath<i64>,
) -> AppResult<Json<ApiResponse<Client>>> {
    let client = ClientService::find_by_tg_id(&state.pool, tg_id).await?;
    Ok(Json(ApiResponse::ok(client)))
}

/// GET /api/clients/filter?name=
pub async fn filter(
    _auth: AuthContext,
    State(state): State<AppState>,
    ValidQuery(params): ValidQuery<NameParams>,
) -> AppResult<Json<ApiResponse<Vec<Client>>>> {
    let clients = ClientService::filter_by_name(&state.pool, params.name.as_deref()).await?;
    Ok(Json(ApiResponse::ok(clients)))
}

/// POST /api/clients/quick_add
pub async fn quick_add(
    _auth: AuthContext,
    State(state): State<AppState>,
    ValidJson(input): ValidJson<CreateClient>,
) -> AppResult<(StatusCode, Json<ApiResponse<Client>>)> {
    let client = ClientService::quick_add(&state.pool, input).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::ok(client))))
}

/// GET /api/clients/search?email=&phone=
pub async fn search(
    _auth: AuthContext,
    State(state): State<AppState>,
    ValidQuery(params): ValidQuery<ClientSearchParams>,
) -> AppResult<Json<ApiResponse<Client>>> {
    let client =
        ClientService::search(&state.pool, params.email.as_deref(), params.phone.as_deref())
            .await?;
    Ok(Json(ApiResponse::ok(client)))
}

/// GET /api/clients/check?phone_number=&tg_id=
pub async fn check(
    _auth: AuthContext,
    State(state): State<AppState>,
    ValidQuery(params): ValidQuery<ClientCheckParams>,
) -> AppResult<Json<ApiResponse<ExistsResponse>>> {
    let exists =
        ClientService::exists(&state.pool, params.phone_number.as_deref(), params.tg_id).await?;
    Ok(Json(ApiResponse::ok(ExistsResponse { exists })))
}
