//! Credential login.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use uuid::Uuid;

use docesabor_core::error::AppError;
use docesabor_core::result::AppResult;
use docesabor_entity::account::Role;
use docesabor_entity::audit::CreateAuditLogEntry;

use super::service::AccountService;

/// Message for every failed login. Unknown e-mail and wrong password look
/// the same to the caller.
pub const INVALID_CREDENTIALS_MESSAGE: &str = "Invalid e-mail or password";

/// Login payload.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoginRequest {
    /// Login e-mail.
    #[serde(default)]
    pub email: String,
    /// Plaintext password.
    #[serde(rename = "senha", default)]
    pub password: String,
}

/// Successful login response.
#[derive(Debug, Clone, Serialize)]
pub struct LoginOutcome {
    /// Account id.
    pub id: Uuid,
    /// Display name.
    #[serde(rename = "nome")]
    pub name: String,
    /// Login e-mail.
    pub email: String,
    /// Role.
    #[serde(rename = "tipo")]
    pub role: Role,
    /// Bearer token.
    pub token: String,
}

impl AccountService {
    /// Verify credentials and issue a token.
    pub async fn login(&self, req: LoginRequest) -> AppResult<LoginOutcome> {
        let email = req.email.trim().to_lowercase();
        if email.is_empty() || req.password.is_empty() {
            return Err(AppError::validation(INVALID_CREDENTIALS_MESSAGE));
        }

        let Some(account) = self.accounts.find_by_email(&email).await? else {
            // Same hashing work as a real check.
            self.verify_blocking(req.password, None).await?;
            debug!("Login failed: unknown e-mail");
            return Err(AppError::validation(INVALID_CREDENTIALS_MESSAGE));
        };

        let matched = self
            .verify_blocking(req.password, Some(account.password_hash.clone()))
            .await?;
        if !matched {
            debug!(account_id = %account.id, "Login failed: wrong password");
            self.audit.record(
                CreateAuditLogEntry::new(account.id, "Failed login attempt")
                    .with_supplement(account.email.clone()),
            );
            return Err(AppError::validation(INVALID_CREDENTIALS_MESSAGE));
        }

        let issued = self.encoder.issue(account.id, &account.name, account.role)?;
        info!(account_id = %account.id, role = %account.role, "Login successful");

        Ok(LoginOutcome {
            id: account.id,
            name: account.name,
            email: account.email,
            role: account.role,
            token: issued.token,
        })
    }
}
