//! Audit log entry entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// An append-only record of a privileged or security-relevant action.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct AuditLogEntry {
    /// Entry identifier.
    pub id: i64,
    /// What happened (e.g. `"Order 12 moved to SHIPPED"`).
    #[serde(rename = "descricao")]
    pub description: String,
    /// Additional context.
    #[serde(rename = "complemento")]
    pub supplement: Option<String>,
    /// The account that acted, or the account targeted by a failed login.
    #[serde(rename = "usuarioId")]
    pub actor_id: Uuid,
    /// When the entry was written.
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

/// Data required to append an audit log entry.
#[derive(Debug, Clone)]
pub struct CreateAuditLogEntry {
    /// What happened.
    pub description: String,
    /// Additional context.
    pub supplement: Option<String>,
    /// Acting account.
    pub actor_id: Uuid,
}

impl CreateAuditLogEntry {
    /// Build an entry with no supplement.
    pub fn new(actor_id: Uuid, description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            supplement: None,
            actor_id,
        }
    }

    /// Attach a supplement.
    pub fn with_supplement(mut self, supplement: impl Into<String>) -> Self {
        self.supplement = Some(supplement.into());
        self
    }
}
