//! Typed path parameter extractor.

use axum::extract::FromRequestParts;

use crate::error::ApiError;

/// Like `axum::extract::Path`, but an unparsable segment is a 400 `{erro}`.
#[derive(Debug, Clone, Copy, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(ApiError))]
pub struct ApiPath<T>(pub T);
