//! Account registration and lookup handlers.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use uuid::Uuid;

use docesabor_entity::account::{Account, RegisterAccount};

use crate::error::ApiResult;
use crate::extractors::{ApiJson, ApiPath, AuthUser};
use crate::state::AppState;

/// POST /clientes, POST /usuarios
pub async fn register_client(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<RegisterAccount>,
) -> ApiResult<(StatusCode, Json<Account>)> {
    let account = state.account_service.register_client(req).await?;
    Ok((StatusCode::CREATED, Json(account)))
}

/// POST /funcionarios, POST /usuarios/funcionarios
pub async fn create_staff(
    State(state): State<AppState>,
    auth: AuthUser,
    ApiJson(req): ApiJson<RegisterAccount>,
) -> ApiResult<(StatusCode, Json<Account>)> {
    let account = state.account_service.create_staff(&auth, req).await?;
    Ok((StatusCode::CREATED, Json(account)))
}

/// GET /usuarios
pub async fn list_accounts(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<Vec<Account>>> {
    Ok(Json(state.account_service.list(&auth).await?))
}

/// GET /clientes
pub async fn list_clients(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<Vec<Account>>> {
    Ok(Json(state.account_service.list_clients(&auth).await?))
}

/// GET /funcionarios
pub async fn list_staff(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<Vec<Account>>> {
    Ok(Json(state.account_service.list_staff(&auth).await?))
}

/// GET /usuarios/{id}, /clientes/{id}, /funcionarios/{id}
pub async fn get_account(
    State(state): State<AppState>,
    auth: AuthUser,
    ApiPath(id): ApiPath<Uuid>,
) -> ApiResult<Json<Account>> {
    Ok(Json(state.account_service.get(&auth, id).await?))
}
