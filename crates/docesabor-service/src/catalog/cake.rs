//! Cake catalog: CRUD plus storefront queries.

use std::sync::Arc;

use tracing::info;

use docesabor_auth::{AccessGuard, Capability};
use docesabor_core::error::AppError;
use docesabor_core::result::AppResult;
use docesabor_database::CakeStore;
use docesabor_entity::audit::CreateAuditLogEntry;
use docesabor_entity::catalog::{Cake, CakeInput, SearchTerm};

use super::resource::CrudResource;
use crate::audit::AuditTrail;
use crate::context::RequestContext;

/// Cake catalog service.
///
/// Cakes are never purged over the API; `DELETE /bolos/{id}` deactivates.
#[derive(Clone)]
pub struct CakeCatalog {
    resource: CrudResource<dyn CakeStore>,
    store: Arc<dyn CakeStore>,
    guard: Arc<AccessGuard>,
    audit: AuditTrail,
    /// How many cakes `recent` returns.
    recent_limit: u32,
}

impl std::fmt::Debug for CakeCatalog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CakeCatalog")
            .field("recent_limit", &self.recent_limit)
            .finish_non_exhaustive()
    }
}

impl CakeCatalog {
    /// Creates a new cake catalog.
    pub fn new(
        store: Arc<dyn CakeStore>,
        guard: Arc<AccessGuard>,
        audit: AuditTrail,
        recent_limit: u32,
    ) -> Self {
        Self {
            resource: CrudResource::new(store.clone(), guard.clone(), audit.clone(), "Cake"),
            store,
            guard,
            audit,
            recent_limit,
        }
    }

    /// Active cakes.
    pub async fn list(&self) -> AppResult<Vec<Cake>> {
        self.resource.list().await
    }

    /// One cake, active or not.
    pub async fn get(&self, id: i64) -> AppResult<Cake> {
        self.resource.get(id).await
    }

    /// Add a cake.
    pub async fn create(&self, ctx: &RequestContext, input: CakeInput) -> AppResult<Cake> {
        self.resource.create(ctx, input).await
    }

    /// Replace a cake's fields.
    pub async fn replace(
        &self,
        ctx: &RequestContext,
        id: i64,
        input: CakeInput,
    ) -> AppResult<Cake> {
        self.resource.replace(ctx, id, input).await
    }

    /// Active featured cakes.
    pub async fn featured(&self) -> AppResult<Vec<Cake>> {
        self.store.find_featured().await
    }

    /// Most recently added active cakes.
    pub async fn recent(&self) -> AppResult<Vec<Cake>> {
        self.store.find_recent(self.recent_limit).await
    }

    /// Search active cakes. A numeric term is a maximum price; anything
    /// else matches cake or category names.
    pub async fn search(&self, raw: &str) -> AppResult<Vec<Cake>> {
        if raw.trim().is_empty() {
            return Err(AppError::validation("Search term must not be empty"));
        }
        self.store.search(&SearchTerm::parse(raw)).await
    }

    /// Soft-delete: hide the cake from listings, keep it for order history.
    pub async fn deactivate(&self, ctx: &RequestContext, id: i64) -> AppResult<Cake> {
        self.guard.require(ctx.role, Capability::RemoveCatalogItem)?;
        let cake = self
            .store
            .deactivate(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Cake {id} not found")))?;

        info!(cake_id = id, actor = %ctx.account_id, "Cake deactivated");
        self.audit.record(
            CreateAuditLogEntry::new(ctx.account_id, "Cake deactivated")
                .with_supplement(format!("{} (id {id})", cake.name)),
        );
        Ok(cake)
    }

    /// Flip the featured flag.
    pub async fn toggle_featured(&self, ctx: &RequestContext, id: i64) -> AppResult<Cake> {
        self.guard.require(ctx.role, Capability::ManageCatalog)?;
        let cake = self
            .store
            .toggle_featured(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Cake {id} not found")))?;
        info!(cake_id = id, featured = cake.featured, "Cake featured flag toggled");
        Ok(cake)
    }
}
