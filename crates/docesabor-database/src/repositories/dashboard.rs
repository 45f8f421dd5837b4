//! Dashboard aggregate queries.

use async_trait::async_trait;
use sqlx::PgPool;

use docesabor_core::error::{AppError, ErrorKind};
use docesabor_core::result::AppResult;
use docesabor_entity::dashboard::{CategoryCount, CityCount, GeneralStats, StatusCount};

use crate::store::DashboardStore;

/// Read-only aggregate queries.
#[derive(Debug, Clone)]
pub struct DashboardRepository {
    pool: PgPool,
}

impl DashboardRepository {
    /// Create a new dashboard repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DashboardStore for DashboardRepository {
    async fn general_stats(&self) -> AppResult<GeneralStats> {
        let (clientes, bolos, pedidos): (i64, i64, i64) = sqlx::query_as(
            "SELECT \
                (SELECT COUNT(*) FROM accounts WHERE role = 'CLIENT'), \
                (SELECT COUNT(*) FROM cakes WHERE active), \
                (SELECT COUNT(*) FROM orders)",
        )
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to compute totals", e))?;

        Ok(GeneralStats {
            clientes,
            bolos,
            pedidos,
        })
    }

    async fn cakes_by_category(&self) -> AppResult<Vec<CategoryCount>> {
        sqlx::query_as::<_, CategoryCount>(
            "SELECT cat.name AS categoria, COUNT(c.id) AS num \
             FROM categories cat JOIN cakes c ON c.category_id = cat.id AND c.active \
             GROUP BY cat.id, cat.name \
             ORDER BY cat.name ASC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to count cakes by category", e)
        })
    }

    async fn customers_by_city(&self) -> AppResult<Vec<CityCount>> {
        sqlx::query_as::<_, CityCount>(
            "SELECT city AS cidade, COUNT(*) AS num FROM accounts \
             WHERE role = 'CLIENT' AND city IS NOT NULL \
             GROUP BY city ORDER BY city ASC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to count customers by city", e)
        })
    }

    async fn orders_by_status(&self) -> AppResult<Vec<StatusCount>> {
        sqlx::query_as::<_, StatusCount>(
            "SELECT status, COUNT(*) AS num FROM orders GROUP BY status ORDER BY status ASC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to count orders by status", e)
        })
    }
}
