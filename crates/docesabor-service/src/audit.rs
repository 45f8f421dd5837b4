//! Best-effort audit trail.

use std::sync::Arc;

use tracing::{debug, warn};

use docesabor_auth::{AccessGuard, Capability};
use docesabor_core::result::AppResult;
use docesabor_database::AuditStore;
use docesabor_entity::audit::{AuditLogEntry, CreateAuditLogEntry};

use crate::context::RequestContext;

/// Appends audit entries without holding up the request that caused them.
#[derive(Clone)]
pub struct AuditTrail {
    store: Arc<dyn AuditStore>,
    guard: Arc<AccessGuard>,
}

impl std::fmt::Debug for AuditTrail {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuditTrail").finish_non_exhaustive()
    }
}

impl AuditTrail {
    /// Creates a new audit trail.
    pub fn new(store: Arc<dyn AuditStore>, guard: Arc<AccessGuard>) -> Self {
        Self { store, guard }
    }

    /// Spawn the write. A failed write is logged and otherwise ignored.
    pub fn record(&self, entry: CreateAuditLogEntry) {
        let store = self.store.clone();
        tokio::spawn(async move {
            match store.append(&entry).await {
                Ok(saved) => debug!(entry_id = saved.id, description = %saved.description, "Audit entry recorded"),
                Err(e) => warn!(error = %e, description = %entry.description, "Failed to record audit entry"),
            }
        });
    }

    /// List every entry, newest first.
    pub async fn list(&self, ctx: &RequestContext) -> AppResult<Vec<AuditLogEntry>> {
        self.guard.require(ctx.role, Capability::ViewAuditLog)?;
        self.store.list().await
    }
}
