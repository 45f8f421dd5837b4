//! Login handler.

use axum::Json;
use axum::extract::State;

use docesabor_service::{LoginOutcome, LoginRequest};

use crate::error::ApiResult;
use crate::extractors::ApiJson;
use crate::state::AppState;

/// POST /login (also /clientes/login, /funcionarios/login, /admins/login)
pub async fn login(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<LoginRequest>,
) -> ApiResult<Json<LoginOutcome>> {
    let outcome = state.account_service.login(req).await?;
    Ok(Json(outcome))
}
