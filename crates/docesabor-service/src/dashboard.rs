//! Admin dashboard aggregates.

use std::sync::Arc;

use docesabor_auth::{AccessGuard, Capability};
use docesabor_core::result::AppResult;
use docesabor_database::DashboardStore;
use docesabor_entity::dashboard::{CategoryCount, CityCount, GeneralStats, StatusCount};

use crate::context::RequestContext;

/// Read-only aggregate counts for staff.
#[derive(Clone)]
pub struct DashboardService {
    store: Arc<dyn DashboardStore>,
    guard: Arc<AccessGuard>,
}

impl std::fmt::Debug for DashboardService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DashboardService").finish_non_exhaustive()
    }
}

impl DashboardService {
    /// Creates a new dashboard service.
    pub fn new(store: Arc<dyn DashboardStore>, guard: Arc<AccessGuard>) -> Self {
        Self { store, guard }
    }

    /// Customer, cake and order totals.
    pub async fn general(&self, ctx: &RequestContext) -> AppResult<GeneralStats> {
        self.guard.require(ctx.role, Capability::ViewDashboard)?;
        self.store.general_stats().await
    }

    /// Active cakes per category.
    pub async fn cakes_by_category(&self, ctx: &RequestContext) -> AppResult<Vec<CategoryCount>> {
        self.guard.require(ctx.role, Capability::ViewDashboard)?;
        self.store.cakes_by_category().await
    }

    /// Customers per city.
    pub async fn customers_by_city(&self, ctx: &RequestContext) -> AppResult<Vec<CityCount>> {
        self.guard.require(ctx.role, Capability::ViewDashboard)?;
        self.store.customers_by_city().await
    }

    /// Orders per status.
    pub async fn orders_by_status(&self, ctx: &RequestContext) -> AppResult<Vec<StatusCount>> {
        self.guard.require(ctx.role, Capability::ViewDashboard)?;
        self.store.orders_by_status().await
    }
}
