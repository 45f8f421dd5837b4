//! Application state shared across all handlers.

use std::sync::Arc;

use tracing::info;

use docesabor_auth::{AccessGuard, JwtDecoder, JwtEncoder, PasswordHasher, PasswordPolicy};
use docesabor_core::config::{AppConfig, MailConfig};
use docesabor_core::result::AppResult;
use docesabor_database::Stores;
use docesabor_service::{
    AccountService, AuditTrail, CakeCatalog, CategoryCatalog, DashboardService, DisabledMailer,
    HttpMailRelay, MailDispatcher, OrderLifecycle, OrderNotifier, OrderService,
};

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    // ── Configuration ────────────────────────────────────────
    /// Application configuration
    pub config: Arc<AppConfig>,

    // ── Infrastructure ───────────────────────────────────────
    /// Store handles (PostgreSQL or in-memory)
    pub stores: Stores,

    // ── Auth ─────────────────────────────────────────────────
    /// JWT token decoder and validator
    pub jwt_decoder: Arc<JwtDecoder>,

    // ── Services ─────────────────────────────────────────────
    /// Registration, listings and login
    pub account_service: Arc<AccountService>,
    /// Category CRUD
    pub category_catalog: Arc<CategoryCatalog>,
    /// Cake catalog
    pub cake_catalog: Arc<CakeCatalog>,
    /// Order placement and listings
    pub order_service: Arc<OrderService>,
    /// Order status transitions
    pub order_lifecycle: Arc<OrderLifecycle>,
    /// Audit trail
    pub audit_trail: AuditTrail,
    /// Dashboard aggregates
    pub dashboard_service: Arc<DashboardService>,
}

impl AppState {
    /// Wire every service over the given stores and mail dispatcher.
    pub fn new(
        config: AppConfig,
        stores: Stores,
        mailer: Arc<dyn MailDispatcher>,
    ) -> AppResult<Self> {
        let hasher = Arc::new(PasswordHasher::from_config(&config.auth)?);
        let policy = Arc::new(PasswordPolicy::new(&config.auth));
        let jwt_encoder = Arc::new(JwtEncoder::new(&config.auth));
        let jwt_decoder = Arc::new(JwtDecoder::new(&config.auth));
        let guard = Arc::new(AccessGuard::new());

        let audit_trail = AuditTrail::new(stores.audit.clone(), Arc::clone(&guard));

        let account_service = Arc::new(AccountService::new(
            stores.accounts.clone(),
            hasher,
            policy,
            jwt_encoder,
            Arc::clone(&guard),
            audit_trail.clone(),
        ));
        let category_catalog = Arc::new(CategoryCatalog::new(
            stores.categories.clone(),
            Arc::clone(&guard),
            audit_trail.clone(),
            "Category",
        ));
        let cake_catalog = Arc::new(CakeCatalog::new(
            stores.cakes.clone(),
            Arc::clone(&guard),
            audit_trail.clone(),
            config.ordering.recent_cakes_limit,
        ));
        let order_service = Arc::new(OrderService::new(
            stores.orders.clone(),
            stores.accounts.clone(),
            stores.cakes.clone(),
            Arc::clone(&guard),
            audit_trail.clone(),
            config.ordering.allow_guest_orders,
        ));
        let order_lifecycle = Arc::new(OrderLifecycle::new(
            stores.orders.clone(),
            Arc::clone(&guard),
            OrderNotifier::new(mailer),
            audit_trail.clone(),
        ));
        let dashboard_service = Arc::new(DashboardService::new(
            stores.dashboard.clone(),
            Arc::clone(&guard),
        ));

        Ok(Self {
            config: Arc::new(config),
            stores,
            jwt_decoder,
            account_service,
            category_catalog,
            cake_catalog,
            order_service,
            order_lifecycle,
            audit_trail,
            dashboard_service,
        })
    }
}

/// Pick the mail dispatcher the configuration asks for.
pub fn build_mailer(config: &MailConfig) -> AppResult<Arc<dyn MailDispatcher>> {
    if config.enabled {
        info!(relay = %config.relay_url, "Mail notifications enabled");
        Ok(Arc::new(HttpMailRelay::new(config)?))
    } else {
        info!("Mail notifications disabled; status e-mails are only logged");
        Ok(Arc::new(DisabledMailer))
    }
}
