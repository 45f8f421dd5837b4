//! Argon2id password hashing and verification.

use argon2::{
    Algorithm, Argon2, Params, Version,
    password_hash::{
        PasswordHash, PasswordHasher as ArgonHasher, PasswordVerifier, SaltString, rand_core::OsRng,
    },
};
use tracing::warn;

use docesabor_core::config::AuthConfig;
use docesabor_core::error::AppError;

/// Prefixes of bcrypt hashes written by the previous storefront backend.
const BCRYPT_PREFIXES: [&str; 3] = ["$2a$", "$2b$", "$2y$"];

/// Handles password hashing and verification.
///
/// New hashes are Argon2id with the configured cost. Verification also
/// accepts legacy bcrypt hashes.
#[derive(Debug, Clone)]
pub struct PasswordHasher {
    /// Argon2 cost parameters.
    params: Params,
    /// Hash of a throwaway password, verified when an account is unknown.
    dummy_hash: Option<String>,
}

impl PasswordHasher {
    /// Creates a hasher with Argon2's default cost.
    pub fn new() -> Self {
        Self::with_params(Params::default())
    }

    /// Creates a hasher from auth configuration.
    pub fn from_config(config: &AuthConfig) -> Result<Self, AppError> {
        let params = Params::new(
            config.hash_memory_kib,
            config.hash_iterations,
            config.hash_parallelism,
            None,
        )
        .map_err(|e| AppError::configuration(format!("Invalid password hashing cost: {e}")))?;
        Ok(Self::with_params(params))
    }

    fn with_params(params: Params) -> Self {
        let mut hasher = Self {
            params,
            dummy_hash: None,
        };
        hasher.dummy_hash = hasher.hash_password("docesabor-dummy-password").ok();
        hasher
    }

    fn argon2(&self) -> Argon2<'static> {
        Argon2::new(Algorithm::Argon2id, Version::V0x13, self.params.clone())
    }

    /// Hashes a plaintext password using Argon2id with a random salt.
    pub fn hash_password(&self, password: &str) -> Result<String, AppError> {
        let salt = SaltString::generate(&mut OsRng);

        let hash = self
            .argon2()
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| AppError::internal(format!("Password hashing failed: {e}")))?;

        Ok(hash.to_string())
    }

    /// Verifies a plaintext password against a stored hash.
    ///
    /// Fails closed: an unparsable hash or any verifier error is a mismatch.
    pub fn verify_password(&self, password: &str, hash: &str) -> bool {
        if BCRYPT_PREFIXES.iter().any(|p| hash.starts_with(p)) {
            return match bcrypt::verify(password, hash) {
                Ok(matched) => matched,
                Err(e) => {
                    warn!(error = %e, "Stored bcrypt hash could not be verified");
                    false
                }
            };
        }

        let parsed_hash = match PasswordHash::new(hash) {
            Ok(parsed) => parsed,
            Err(e) => {
                warn!(error = %e, "Stored password hash has an invalid format");
                return false;
            }
        };

        match self.argon2().verify_password(password.as_bytes(), &parsed_hash) {
            Ok(()) => true,
            Err(argon2::password_hash::Error::Password) => false,
            Err(e) => {
                warn!(error = %e, "Password verification failed");
                false
            }
        }
    }

    /// Spends one verification on a throwaway hash.
    ///
    /// Called when a login names an unknown e-mail so the response time does
    /// not reveal whether the account exists.
    pub fn verify_dummy(&self, password: &str) {
        if let Some(hash) = &self.dummy_hash {
            let _ = self.verify_password(password, hash);
        }
    }
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new()
    }
}
