//! Audit log handler.

use axum::Json;
use axum::extract::State;

use docesabor_entity::audit::AuditLogEntry;

use crate::error::ApiResult;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// GET /logs
pub async fn list_logs(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<Vec<AuditLogEntry>>> {
    Ok(Json(state.audit_trail.list(&auth).await?))
}
