//! Dashboard handlers. Staff only.

use axum::Json;
use axum::extract::State;

use docesabor_entity::dashboard::{CategoryCount, CityCount, GeneralStats, StatusCount};

use crate::error::ApiResult;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// GET /dashboard/gerais, GET /dashboard/estatisticas
pub async fn general(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<GeneralStats>> {
    Ok(Json(state.dashboard_service.general(&auth).await?))
}

/// GET /dashboard/bolosPorCategoria, GET /dashboard/bolosCategoria
pub async fn cakes_by_category(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<Vec<CategoryCount>>> {
    Ok(Json(state.dashboard_service.cakes_by_category(&auth).await?))
}

/// GET /dashboard/clientesCidade
pub async fn customers_by_city(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<Vec<CityCount>>> {
    Ok(Json(state.dashboard_service.customers_by_city(&auth).await?))
}

/// GET /dashboard/pedidosPorStatus
pub async fn orders_by_status(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<Vec<StatusCount>>> {
    Ok(Json(state.dashboard_service.orders_by_status(&auth).await?))
}
