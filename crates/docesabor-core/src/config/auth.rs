//! Authentication configuration.

use serde::{Deserialize, Serialize};

/// Placeholder secret shipped in `config/default.toml`.
pub const PLACEHOLDER_JWT_SECRET: &str = "CHANGE_ME_IN_PRODUCTION";

/// Token signing and password hashing configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Secret key for JWT signing (HMAC-SHA256).
    #[serde(default = "default_jwt_secret")]
    pub jwt_secret: String,
    /// Access token TTL in minutes.
    #[serde(default = "default_token_ttl")]
    pub token_ttl_minutes: u64,
    /// Minimum password length.
    #[serde(default = "default_password_min")]
    pub password_min_length: usize,
    /// Argon2 memory cost in KiB.
    #[serde(default = "default_hash_memory")]
    pub hash_memory_kib: u32,
    /// Argon2 iteration count.
    #[serde(default = "default_hash_iterations")]
    pub hash_iterations: u32,
    /// Argon2 degree of parallelism.
    #[serde(default = "default_hash_parallelism")]
    pub hash_parallelism: u32,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: default_jwt_secret(),
            token_ttl_minutes: default_token_ttl(),
            password_min_length: default_password_min(),
            hash_memory_kib: default_hash_memory(),
            hash_iterations: default_hash_iterations(),
            hash_parallelism: default_hash_parallelism(),
        }
    }
}

fn default_jwt_secret() -> String {
    PLACEHOLDER_JWT_SECRET.to_string()
}

fn default_token_ttl() -> u64 {
    60
}

fn default_password_min() -> usize {
    8
}

fn default_hash_memory() -> u32 {
    19 * 1024
}

fn default_hash_iterations() -> u32 {
    2
}

fn default_hash_parallelism() -> u32 {
    1
}
