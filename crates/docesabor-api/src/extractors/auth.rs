//! Bearer-token extractors: pull the JWT from the Authorization header,
//! verify it, and inject the caller's context.

use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use tracing::debug;

use docesabor_auth::jwt::AUTHENTICATION_MESSAGE;
use docesabor_core::error::AppError;
use docesabor_service::RequestContext;

use crate::error::ApiError;
use crate::state::AppState;

/// Extracted authenticated caller available in handlers.
#[derive(Debug, Clone)]
pub struct AuthUser(pub RequestContext);

impl std::ops::Deref for AuthUser {
    type Target = RequestContext;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        match authenticate(parts, state)? {
            Some(ctx) => Ok(AuthUser(ctx)),
            None => {
                debug!(path = %parts.uri.path(), "Missing Authorization header");
                Err(AppError::authentication(AUTHENTICATION_MESSAGE).into())
            }
        }
    }
}

/// Caller context when a token is sent, `None` when the header is absent.
///
/// A header that is present but invalid is still rejected with 401.
#[derive(Debug, Clone)]
pub struct MaybeAuthUser(pub Option<RequestContext>);

impl FromRequestParts<AppState> for MaybeAuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        Ok(MaybeAuthUser(authenticate(parts, state)?))
    }
}

fn authenticate(parts: &Parts, state: &AppState) -> Result<Option<RequestContext>, AppError> {
    let Some(header) = parts.headers.get(AUTHORIZATION) else {
        return Ok(None);
    };

    let token = header
        .to_str()
        .ok()
        .and_then(bearer_token)
        .ok_or_else(|| {
            debug!("Authorization header is not a bearer token");
            AppError::authentication(AUTHENTICATION_MESSAGE)
        })?;

    let claims = state.jwt_decoder.decode(token)?;
    Ok(Some(RequestContext::from(&claims)))
}

/// Token part of a `Bearer <token>` header value. The scheme is
/// case-insensitive.
fn bearer_token(value: &str) -> Option<&str> {
    let (scheme, token) = value.trim().split_once(' ')?;
    let token = token.trim();
    (scheme.eq_ignore_ascii_case("bearer") && !token.is_empty()).then_some(token)
}
