//! JWT token validation.

use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};
use tracing::debug;

use docesabor_core::config::AuthConfig;
use docesabor_core::error::AppError;

use super::claims::Claims;

/// Message returned for every authentication failure, including a missing
/// token.
pub const AUTHENTICATION_MESSAGE: &str = "Authentication required";

/// Validates bearer tokens.
#[derive(Clone)]
pub struct JwtDecoder {
    /// HMAC secret key for verification.
    decoding_key: DecodingKey,
    /// Validation configuration.
    validation: Validation,
}

impl std::fmt::Debug for JwtDecoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtDecoder")
            .field("validation", &self.validation)
            .finish()
    }
}

impl JwtDecoder {
    /// Creates a new decoder from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.leeway = 0;

        Self {
            decoding_key: DecodingKey::from_secret(config.jwt_secret.as_bytes()),
            validation,
        }
    }

    /// Decodes and validates a token string.
    ///
    /// Every failure maps to the same authentication error; the concrete
    /// reason is only logged.
    pub fn decode(&self, token: &str) -> Result<Claims, AppError> {
        let token_data =
            decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| {
                let reason = match e.kind() {
                    jsonwebtoken::errors::ErrorKind::ExpiredSignature => "expired",
                    jsonwebtoken::errors::ErrorKind::InvalidSignature => "bad signature",
                    jsonwebtoken::errors::ErrorKind::InvalidToken => "malformed",
                    _ => "invalid claims",
                };
                debug!(reason, error = %e, "Rejected bearer token");
                AppError::authentication(AUTHENTICATION_MESSAGE)
            })?;

        Ok(token_data.claims)
    }
}
