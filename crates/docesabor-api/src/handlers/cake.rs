//! Cake catalog handlers.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;

use docesabor_entity::catalog::{Cake, CakeInput};

use crate::error::ApiResult;
use crate::extractors::{ApiJson, ApiPath, AuthUser};
use crate::state::AppState;

/// GET /bolos
pub async fn list_cakes(State(state): State<AppState>) -> ApiResult<Json<Vec<Cake>>> {
    Ok(Json(state.cake_catalog.list().await?))
}

/// GET /bolos/destaques
pub async fn featured_cakes(State(state): State<AppState>) -> ApiResult<Json<Vec<Cake>>> {
    Ok(Json(state.cake_catalog.featured().await?))
}

/// GET /bolos/recentes
pub async fn recent_cakes(State(state): State<AppState>) -> ApiResult<Json<Vec<Cake>>> {
    Ok(Json(state.cake_catalog.recent().await?))
}

/// GET /bolos/pesquisa/{termo}
pub async fn search_cakes(
    State(state): State<AppState>,
    ApiPath(term): ApiPath<String>,
) -> ApiResult<Json<Vec<Cake>>> {
    Ok(Json(state.cake_catalog.search(&term).await?))
}

/// GET /bolos/{id}
pub async fn get_cake(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
) -> ApiResult<Json<Cake>> {
    Ok(Json(state.cake_catalog.get(id).await?))
}

/// POST /bolos
pub async fn create_cake(
    State(state): State<AppState>,
    auth: AuthUser,
    ApiJson(input): ApiJson<CakeInput>,
) -> ApiResult<(StatusCode, Json<Cake>)> {
    let cake = state.cake_catalog.create(&auth, input).await?;
    Ok((StatusCode::CREATED, Json(cake)))
}

/// PUT /bolos/{id}
pub async fn replace_cake(
    State(state): State<AppState>,
    auth: AuthUser,
    ApiPath(id): ApiPath<i64>,
    ApiJson(input): ApiJson<CakeInput>,
) -> ApiResult<Json<Cake>> {
    Ok(Json(state.cake_catalog.replace(&auth, id, input).await?))
}

/// DELETE /bolos/{id}: soft delete.
pub async fn deactivate_cake(
    State(state): State<AppState>,
    auth: AuthUser,
    ApiPath(id): ApiPath<i64>,
) -> ApiResult<Json<Cake>> {
    Ok(Json(state.cake_catalog.deactivate(&auth, id).await?))
}

/// PATCH /bolos/destacar/{id}
pub async fn toggle_featured(
    State(state): State<AppState>,
    auth: AuthUser,
    ApiPath(id): ApiPath<i64>,
) -> ApiResult<Json<Cake>> {
    Ok(Json(state.cake_catalog.toggle_featured(&auth, id).await?))
}
