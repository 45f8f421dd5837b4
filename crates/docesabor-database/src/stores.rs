//! The bundle of store handles injected into the service layer.

use std::sync::Arc;

use tracing::{info, warn};

use docesabor_core::config::{DatabaseConfig, DatabaseProvider};
use docesabor_core::result::AppResult;

use crate::connection::DatabasePool;
use crate::memory::MemoryDatabase;
use crate::migration::run_migrations;
use crate::repositories::{
    AccountRepository, AuditRepository, CakeRepository, CategoryRepository, DashboardRepository,
    OrderRepository,
};
use crate::store::{
    AccountStore, AuditStore, CakeStore, CategoryStore, DashboardStore, OrderStore,
};

/// One handle per store, all backed by the same database.
#[derive(Clone)]
pub struct Stores {
    /// Credential store.
    pub accounts: Arc<dyn AccountStore>,
    /// Category store.
    pub categories: Arc<dyn CategoryStore>,
    /// Cake store.
    pub cakes: Arc<dyn CakeStore>,
    /// Order store.
    pub orders: Arc<dyn OrderStore>,
    /// Audit trail.
    pub audit: Arc<dyn AuditStore>,
    /// Dashboard aggregates.
    pub dashboard: Arc<dyn DashboardStore>,
    pool: Option<DatabasePool>,
}

impl std::fmt::Debug for Stores {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Stores")
            .field("backend", &if self.pool.is_some() { "postgres" } else { "memory" })
            .finish()
    }
}

impl Stores {
    /// Open the configured backend, applying migrations when asked to.
    pub async fn from_config(config: &DatabaseConfig) -> AppResult<Self> {
        match config.provider {
            DatabaseProvider::Postgres => {
                let pool = DatabasePool::connect(config).await?;
                if config.run_migrations {
                    run_migrations(pool.pool()).await?;
                }
                Ok(Self::postgres(pool))
            }
            DatabaseProvider::Memory => {
                warn!("Using the in-memory store; data is lost on restart");
                Ok(Self::memory(MemoryDatabase::new()))
            }
        }
    }

    /// PostgreSQL repositories sharing one pool.
    pub fn postgres(pool: DatabasePool) -> Self {
        let pg = pool.pool().clone();
        info!("Using PostgreSQL store");
        Self {
            accounts: Arc::new(AccountRepository::new(pg.clone())),
            categories: Arc::new(CategoryRepository::new(pg.clone())),
            cakes: Arc::new(CakeRepository::new(pg.clone())),
            orders: Arc::new(OrderRepository::new(pg.clone())),
            audit: Arc::new(AuditRepository::new(pg.clone())),
            dashboard: Arc::new(DashboardRepository::new(pg)),
            pool: Some(pool),
        }
    }

    /// In-memory stores sharing one set of tables.
    pub fn memory(db: MemoryDatabase) -> Self {
        Self {
            accounts: Arc::new(db.clone()),
            categories: Arc::new(db.categories()),
            cakes: Arc::new(db.cakes()),
            orders: Arc::new(db.clone()),
            audit: Arc::new(db.clone()),
            dashboard: Arc::new(db),
            pool: None,
        }
    }

    /// Whether the backing database answers. Always `true` in memory.
    pub async fn health_check(&self) -> bool {
        match &self.pool {
            Some(pool) => pool.health_check().await.unwrap_or(false),
            None => true,
        }
    }

    /// Close the connection pool, if any.
    pub async fn close(&self) {
        if let Some(pool) = &self.pool {
            pool.close().await;
        }
    }
}
