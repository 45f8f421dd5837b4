use async_trait::async_trait;
use chrono::Utc;

use docesabor_core::result::AppResult;
use docesabor_entity::audit::{AuditLogEntry, CreateAuditLogEntry};

use super::MemoryDatabase;
use crate::store::AuditStore;

#[async_trait]
impl AuditStore for MemoryDatabase {
    async fn append(&self, entry: &CreateAuditLogEntry) -> AppResult<AuditLogEntry> {
        let mut tables = self.tables.lock().await;
        tables.last_audit_id += 1;
        let row = AuditLogEntry {
            id: tables.last_audit_id,
            description: entry.description.clone(),
            supplement: entry.supplement.clone(),
            actor_id: entry.actor_id,
            created_at: Utc::now(),
        };
        tables.audit.push(row.clone());
        Ok(row)
    }

    async fn list(&self) -> AppResult<Vec<AuditLogEntry>> {
        let tables = self.tables.lock().await;
        Ok(tables.audit.iter().rev().cloned().collect())
    }
}
