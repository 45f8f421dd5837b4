//! Generic validated CRUD resource.

use std::sync::Arc;

use tracing::info;
use validator::Validate;

use docesabor_auth::{AccessGuard, Capability};
use docesabor_core::error::AppError;
use docesabor_core::result::AppResult;
use docesabor_core::traits::CrudStore;
use docesabor_entity::audit::CreateAuditLogEntry;

use crate::audit::AuditTrail;
use crate::context::RequestContext;

/// Validates input, checks catalog capabilities and delegates to a store.
///
/// Reads are public. Create and replace need [`Capability::ManageCatalog`];
/// purge needs [`Capability::RemoveCatalogItem`] and is audited.
pub struct CrudResource<S: ?Sized> {
    store: Arc<S>,
    guard: Arc<AccessGuard>,
    audit: AuditTrail,
    /// Singular noun used in messages, e.g. "Category".
    noun: &'static str,
}

impl<S: ?Sized> Clone for CrudResource<S> {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
            guard: self.guard.clone(),
            audit: self.audit.clone(),
            noun: self.noun,
        }
    }
}

impl<S: ?Sized> std::fmt::Debug for CrudResource<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CrudResource")
            .field("noun", &self.noun)
            .finish_non_exhaustive()
    }
}

impl<S> CrudResource<S>
where
    S: CrudStore + ?Sized,
    S::Input: Validate,
{
    /// Creates a resource over the given store.
    pub fn new(
        store: Arc<S>,
        guard: Arc<AccessGuard>,
        audit: AuditTrail,
        noun: &'static str,
    ) -> Self {
        Self {
            store,
            guard,
            audit,
            noun,
        }
    }

    /// Every record.
    pub async fn list(&self) -> AppResult<Vec<S::Entity>> {
        self.store.find_all().await
    }

    /// One record, or `NotFound`.
    pub async fn get(&self, id: S::Id) -> AppResult<S::Entity> {
        self.store
            .find_by_id(id)
            .await?
            .ok_or_else(|| self.not_found(id))
    }

    /// Validate and insert.
    pub async fn create(&self, ctx: &RequestContext, input: S::Input) -> AppResult<S::Entity> {
        self.guard.require(ctx.role, Capability::ManageCatalog)?;
        input.validate()?;
        let created = self.store.create(&input).await?;
        info!(resource = self.noun, actor = %ctx.account_id, "Catalog record created");
        Ok(created)
    }

    /// Validate and overwrite every field of an existing record.
    pub async fn replace(
        &self,
        ctx: &RequestContext,
        id: S::Id,
        input: S::Input,
    ) -> AppResult<S::Entity> {
        self.guard.require(ctx.role, Capability::ManageCatalog)?;
        input.validate()?;
        let updated = self
            .store
            .replace(id, &input)
            .await?
            .ok_or_else(|| self.not_found(id))?;
        info!(resource = self.noun, id = %id, actor = %ctx.account_id, "Catalog record replaced");
        Ok(updated)
    }

    /// Hard-delete a record.
    pub async fn purge(&self, ctx: &RequestContext, id: S::Id) -> AppResult<()> {
        self.guard.require(ctx.role, Capability::RemoveCatalogItem)?;
        if !self.store.purge(id).await? {
            return Err(self.not_found(id));
        }
        info!(resource = self.noun, id = %id, actor = %ctx.account_id, "Catalog record purged");
        self.audit.record(
            CreateAuditLogEntry::new(ctx.account_id, format!("{} removed", self.noun))
                .with_supplement(format!("id {id}")),
        );
        Ok(())
    }

    /// Number of records.
    pub async fn count(&self) -> AppResult<u64> {
        self.store.count().await
    }

    fn not_found(&self, id: S::Id) -> AppError {
        AppError::not_found(format!("{} {id} not found", self.noun))
    }
}
