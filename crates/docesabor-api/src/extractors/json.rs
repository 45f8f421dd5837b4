//! JSON body extractor whose rejections use the API error body.

use axum::extract::FromRequest;

use crate::error::ApiError;

/// Like `axum::Json`, but a malformed body is a 400 `{erro}`.
#[derive(Debug, Clone, Copy, Default, FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct ApiJson<T>(pub T);
