//! Account entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

use super::role::Role;

/// A registered account: customer, employee or administrator.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Account {
    /// Unique account identifier.
    pub id: Uuid,
    /// Display name.
    #[serde(rename = "nome")]
    pub name: String,
    /// Login e-mail, unique case-insensitively.
    pub email: String,
    /// Password hash (Argon2id, or bcrypt for legacy accounts).
    #[serde(skip_serializing, default)]
    pub password_hash: String,
    /// Role tier, fixed at creation.
    #[serde(rename = "tipo")]
    pub role: Role,
    /// City, used by the customers-by-city chart.
    #[serde(rename = "cidade", skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    /// When the account was created.
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

/// Data required to insert a new account.
#[derive(Debug, Clone)]
pub struct NewAccount {
    /// Display name.
    pub name: String,
    /// Login e-mail.
    pub email: String,
    /// Pre-hashed password.
    pub password_hash: String,
    /// Assigned role.
    pub role: Role,
    /// City (optional).
    pub city: Option<String>,
}

/// Registration payload shared by client and staff sign-up.
///
/// `tipo` is only honoured on staff registration; client registration
/// always forces [`Role::Client`].
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RegisterAccount {
    /// Display name.
    #[serde(rename = "nome", default)]
    #[validate(length(min = 3, message = "Name must have at least 3 characters"))]
    pub name: String,
    /// Login e-mail.
    #[serde(default)]
    #[validate(email(message = "Invalid e-mail address"))]
    pub email: String,
    /// Plaintext password; checked against the acceptance policy.
    #[serde(rename = "senha", default)]
    pub password: String,
    /// City (optional).
    #[serde(rename = "cidade", default)]
    #[validate(length(min = 2, message = "City must have at least 2 characters"))]
    pub city: Option<String>,
    /// Requested role (staff registration only).
    #[serde(rename = "tipo", default)]
    pub role: Option<Role>,
}

impl RegisterAccount {
    /// Trimmed, lowercased e-mail used for storage and lookups.
    pub fn normalized_email(&self) -> String {
        self.email.trim().to_lowercase()
    }
}
