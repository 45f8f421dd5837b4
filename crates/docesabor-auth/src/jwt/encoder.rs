//! JWT token creation with configurable signing and TTL.

use chrono::{DateTime, Utc};
use jsonwebtoken::{EncodingKey, Header, encode};
use uuid::Uuid;

use docesabor_core::config::AuthConfig;
use docesabor_core::error::AppError;
use docesabor_entity::account::Role;

use super::claims::Claims;

/// Creates signed HS256 bearer tokens.
#[derive(Clone)]
pub struct JwtEncoder {
    /// HMAC secret key for signing.
    encoding_key: EncodingKey,
    /// Token TTL in minutes.
    ttl_minutes: i64,
}

impl std::fmt::Debug for JwtEncoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtEncoder")
            .field("ttl_minutes", &self.ttl_minutes)
            .finish()
    }
}

/// A freshly signed token.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct IssuedToken {
    /// Compact JWS string.
    pub token: String,
    /// Expiration timestamp.
    pub expires_at: DateTime<Utc>,
}

impl JwtEncoder {
    /// Creates a new encoder from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(config.jwt_secret.as_bytes()),
            ttl_minutes: config.token_ttl_minutes as i64,
        }
    }

    /// Issues a token for the given account, expiring after the configured TTL.
    pub fn issue(&self, account_id: Uuid, name: &str, role: Role) -> Result<IssuedToken, AppError> {
        let now = Utc::now();
        let expires_at = now + chrono::Duration::minutes(self.ttl_minutes);

        let claims = Claims {
            sub: account_id,
            name: name.to_string(),
            role,
            iat: now.timestamp(),
            exp: expires_at.timestamp(),
        };

        Ok(IssuedToken {
            token: self.encode_claims(&claims)?,
            expires_at,
        })
    }

    /// Signs an arbitrary claims payload.
    pub fn encode_claims(&self, claims: &Claims) -> Result<String, AppError> {
        encode(&Header::default(), claims, &self.encoding_key)
            .map_err(|e| AppError::internal(format!("Failed to encode token: {e}")))
    }
}
