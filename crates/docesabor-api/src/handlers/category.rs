//! Category handlers.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;

use docesabor_entity::catalog::{Category, CategoryInput};

use crate::error::ApiResult;
use crate::extractors::{ApiJson, ApiPath, AuthUser};
use crate::state::AppState;

/// GET /categorias
pub async fn list_categories(State(state): State<AppState>) -> ApiResult<Json<Vec<Category>>> {
    Ok(Json(state.category_catalog.list().await?))
}

/// POST /categorias
pub async fn create_category(
    State(state): State<AppState>,
    auth: AuthUser,
    ApiJson(input): ApiJson<CategoryInput>,
) -> ApiResult<(StatusCode, Json<Category>)> {
    let category = state.category_catalog.create(&auth, input).await?;
    Ok((StatusCode::CREATED, Json(category)))
}

/// PUT /categorias/{id}
pub async fn replace_category(
    State(state): State<AppState>,
    auth: AuthUser,
    ApiPath(id): ApiPath<i64>,
    ApiJson(input): ApiJson<CategoryInput>,
) -> ApiResult<Json<Category>> {
    Ok(Json(state.category_catalog.replace(&auth, id, input).await?))
}

/// DELETE /categorias/{id}
pub async fn purge_category(
    State(state): State<AppState>,
    auth: AuthUser,
    ApiPath(id): ApiPath<i64>,
) -> ApiResult<StatusCode> {
    state.category_catalog.purge(&auth, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
