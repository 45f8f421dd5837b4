use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use docesabor_core::error::AppError;
use docesabor_core::result::AppResult;
use docesabor_entity::order::{CreateOrder, Order, OrderDetails, OrderStatus};

use super::MemoryDatabase;
use crate::store::OrderStore;

#[async_trait]
impl OrderStore for MemoryDatabase {
    async fn find_by_id(&self, id: i64) -> AppResult<Option<OrderDetails>> {
        let tables = self.tables.lock().await;
        Ok(tables.orders.get(&id).and_then(|o| tables.order_details(o)))
    }

    async fn find_all(&self) -> AppResult<Vec<OrderDetails>> {
        let tables = self.tables.lock().await;
        Ok(tables
            .orders
            .values()
            .rev()
            .filter_map(|o| tables.order_details(o))
            .collect())
    }

    async fn find_by_customer(&self, customer_id: Uuid) -> AppResult<Vec<OrderDetails>> {
        let tables = self.tables.lock().await;
        Ok(tables
            .orders
            .values()
            .rev()
            .filter(|o| o.customer_id == customer_id)
            .filter_map(|o| tables.order_details(o))
            .collect())
    }

    async fn create(&self, data: &CreateOrder) -> AppResult<OrderDetails> {
        let mut tables = self.tables.lock().await;
        if !tables.accounts.iter().any(|a| a.id == data.customer_id) {
            return Err(AppError::validation("Unknown customer"));
        }
        if !tables.cakes.contains_key(&data.cake_id) {
            return Err(AppError::validation("Unknown cake"));
        }

        tables.last_order_id += 1;
        let order = Order {
            id: tables.last_order_id,
            customer_id: data.customer_id,
            cake_id: data.cake_id,
            quantity: data.quantity,
            observations: data.observations.clone(),
            status: OrderStatus::Placed,
            created_at: Utc::now(),
        };
        tables.orders.insert(order.id, order.clone());
        tables
            .order_details(&order)
            .ok_or_else(|| AppError::internal("Inserted order could not be joined"))
    }

    async fn update_status(
        &self,
        id: i64,
        expected: OrderStatus,
        next: OrderStatus,
    ) -> AppResult<Option<OrderDetails>> {
        let mut tables = self.tables.lock().await;
        let updated = match tables.orders.get_mut(&id) {
            Some(order) if order.status == expected => {
                order.status = next;
                order.clone()
            }
            _ => return Ok(None),
        };
        Ok(tables.order_details(&updated))
    }

    async fn purge(&self, id: i64) -> AppResult<bool> {
        Ok(self.tables.lock().await.orders.remove(&id).is_some())
    }
}
