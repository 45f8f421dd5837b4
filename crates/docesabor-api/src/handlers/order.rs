//! Order handlers.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use uuid::Uuid;

use docesabor_entity::order::{CreateOrder, OrderDetails, OrderStatus};

use crate::dto::request::StatusUpdateRequest;
use crate::error::ApiResult;
use crate::extractors::{ApiJson, ApiPath, AuthUser, MaybeAuthUser};
use crate::state::AppState;

/// GET /pedidos
pub async fn list_orders(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<Vec<OrderDetails>>> {
    Ok(Json(state.order_service.list_all(&auth).await?))
}

/// POST /pedidos
///
/// Guests are accepted only when `ordering.allow_guest_orders` is on.
pub async fn place_order(
    State(state): State<AppState>,
    MaybeAuthUser(ctx): MaybeAuthUser,
    ApiJson(req): ApiJson<CreateOrder>,
) -> ApiResult<(StatusCode, Json<OrderDetails>)> {
    let order = state.order_service.place(ctx.as_ref(), req).await?;
    Ok((StatusCode::CREATED, Json(order)))
}

/// GET /pedidos/cliente/{id}, GET /pedidos/usuario/{id}
pub async fn list_customer_orders(
    State(state): State<AppState>,
    auth: AuthUser,
    ApiPath(customer_id): ApiPath<Uuid>,
) -> ApiResult<Json<Vec<OrderDetails>>> {
    Ok(Json(
        state
            .order_service
            .list_for_customer(&auth, customer_id)
            .await?,
    ))
}

/// PATCH /pedidos/{id}, PATCH /pedidos/{id}/status
///
/// An unknown status label is rejected before the order is touched.
pub async fn change_status(
    State(state): State<AppState>,
    auth: AuthUser,
    ApiPath(id): ApiPath<i64>,
    ApiJson(req): ApiJson<StatusUpdateRequest>,
) -> ApiResult<Json<OrderDetails>> {
    let target: OrderStatus = req.status.parse()?;
    Ok(Json(
        state.order_lifecycle.change_status(&auth, id, target).await?,
    ))
}

/// PATCH /pedidos/recebido/{id}
pub async fn confirm_receipt(
    State(state): State<AppState>,
    auth: AuthUser,
    ApiPath(id): ApiPath<i64>,
) -> ApiResult<Json<OrderDetails>> {
    Ok(Json(state.order_lifecycle.confirm_receipt(&auth, id).await?))
}

/// PATCH /pedidos/cancelar/{id}
pub async fn cancel_order(
    State(state): State<AppState>,
    auth: AuthUser,
    ApiPath(id): ApiPath<i64>,
) -> ApiResult<Json<OrderDetails>> {
    Ok(Json(state.order_lifecycle.cancel(&auth, id).await?))
}

/// DELETE /pedidos/{id}
pub async fn purge_order(
    State(state): State<AppState>,
    auth: AuthUser,
    ApiPath(id): ApiPath<i64>,
) -> ApiResult<StatusCode> {
    state.order_service.purge(&auth, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
