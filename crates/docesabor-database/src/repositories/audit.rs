//! Audit log repository implementation.

use async_trait::async_trait;
use sqlx::PgPool;

use docesabor_core::error::{AppError, ErrorKind};
use docesabor_core::result::AppResult;
use docesabor_entity::audit::{AuditLogEntry, CreateAuditLogEntry};

use crate::store::AuditStore;

/// Repository for the append-only audit trail.
#[derive(Debug, Clone)]
pub struct AuditRepository {
    pool: PgPool,
}

impl AuditRepository {
    /// Create a new audit repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AuditStore for AuditRepository {
    async fn append(&self, entry: &CreateAuditLogEntry) -> AppResult<AuditLogEntry> {
        sqlx::query_as::<_, AuditLogEntry>(
            "INSERT INTO audit_logs (description, supplement, actor_id) \
             VALUES ($1, $2, $3) RETURNING *",
        )
        .bind(&entry.description)
        .bind(&entry.supplement)
        .bind(entry.actor_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to write audit entry", e))
    }

    async fn list(&self) -> AppResult<Vec<AuditLogEntry>> {
        sqlx::query_as::<_, AuditLogEntry>(
            "SELECT * FROM audit_logs ORDER BY created_at DESC, id DESC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list audit entries", e))
    }
}
