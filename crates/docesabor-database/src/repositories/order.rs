//! Order repository implementation.

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use docesabor_core::error::{AppError, ErrorKind};
use docesabor_core::result::AppResult;
use docesabor_entity::order::{CreateOrder, OrderDetails, OrderStatus};

use crate::store::OrderStore;

/// Join of an order row (`o`) with its customer and cake.
const DETAILS_COLUMNS: &str = "o.*, a.name AS customer_name, a.email AS customer_email, \
                               c.name AS cake_name";

/// Repository for orders.
#[derive(Debug, Clone)]
pub struct OrderRepository {
    pool: PgPool,
}

impl OrderRepository {
    /// Create a new order repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn select_details(filter: &str) -> String {
    format!(
        "SELECT {DETAILS_COLUMNS} FROM orders o \
         JOIN accounts a ON a.id = o.customer_id \
         JOIN cakes c ON c.id = o.cake_id \
         {filter}"
    )
}

/// Wrap a data-modifying statement so its `RETURNING *` row comes back with
/// the customer and cake columns, in a single round trip.
fn details_returning(statement: &str) -> String {
    format!(
        "WITH o AS ({statement} RETURNING *) \
         SELECT {DETAILS_COLUMNS} FROM o \
         JOIN accounts a ON a.id = o.customer_id \
         JOIN cakes c ON c.id = o.cake_id"
    )
}

#[async_trait]
impl OrderStore for OrderRepository {
    async fn find_by_id(&self, id: i64) -> AppResult<Option<OrderDetails>> {
        let sql = select_details("WHERE o.id = $1");
        sqlx::query_as::<_, OrderDetails>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find order", e))
    }

    async fn find_all(&self) -> AppResult<Vec<OrderDetails>> {
        let sql = select_details("ORDER BY o.created_at DESC, o.id DESC");
        sqlx::query_as::<_, OrderDetails>(&sql)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list orders", e))
    }

    async fn find_by_customer(&self, customer_id: Uuid) -> AppResult<Vec<OrderDetails>> {
        let sql = select_details("WHERE o.customer_id = $1 ORDER BY o.created_at DESC, o.id DESC");
        sqlx::query_as::<_, OrderDetails>(&sql)
            .bind(customer_id)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to list customer orders", e)
            })
    }

    async fn create(&self, data: &CreateOrder) -> AppResult<OrderDetails> {
        let sql = details_returning(
            "INSERT INTO orders (customer_id, cake_id, quantity, observations, status) \
             VALUES ($1, $2, $3, $4, $5)",
        );
        sqlx::query_as::<_, OrderDetails>(&sql)
            .bind(data.customer_id)
            .bind(data.cake_id)
            .bind(data.quantity)
            .bind(&data.observations)
            .bind(OrderStatus::Placed)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| match e {
                sqlx::Error::Database(ref db_err)
                    if db_err.constraint() == Some("orders_customer_id_fkey") =>
                {
                    AppError::validation("Unknown customer")
                }
                sqlx::Error::Database(ref db_err)
                    if db_err.constraint() == Some("orders_cake_id_fkey") =>
                {
                    AppError::validation("Unknown cake")
                }
                _ => AppError::with_source(ErrorKind::Database, "Failed to create order", e),
            })
    }

    async fn update_status(
        &self,
        id: i64,
        expected: OrderStatus,
        next: OrderStatus,
    ) -> AppResult<Option<OrderDetails>> {
        let sql = details_returning("UPDATE orders SET status = $3 WHERE id = $1 AND status = $2");
        sqlx::query_as::<_, OrderDetails>(&sql)
            .bind(id)
            .bind(expected)
            .bind(next)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to update order status", e)
            })
    }

    async fn purge(&self, id: i64) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM orders WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete order", e))?;
        Ok(result.rows_affected() > 0)
    }
}
