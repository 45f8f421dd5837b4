//! In-memory store for single-process runs and tests.
//!
//! All tables live behind one Tokio mutex, so every store call is atomic
//! with respect to the others. Data is lost when the process exits.

mod account;
mod audit;
mod catalog;
mod dashboard;
mod order;

use std::collections::BTreeMap;
use std::sync::Arc;

use tokio::sync::Mutex;

use docesabor_entity::account::Account;
use docesabor_entity::audit::AuditLogEntry;
use docesabor_entity::catalog::{Cake, Category};
use docesabor_entity::order::{Order, OrderDetails};

pub use catalog::{MemoryCakes, MemoryCategories};

/// Table contents.
#[derive(Debug, Default)]
struct Tables {
    accounts: Vec<Account>,
    categories: BTreeMap<i64, Category>,
    cakes: BTreeMap<i64, Cake>,
    orders: BTreeMap<i64, Order>,
    audit: Vec<AuditLogEntry>,
    last_category_id: i64,
    last_cake_id: i64,
    last_order_id: i64,
    last_audit_id: i64,
}

impl Tables {
    /// Cake with its category name filled in, as the SQL join would return it.
    fn joined_cake(&self, cake: &Cake) -> Cake {
        let mut joined = cake.clone();
        joined.category_name = self.categories.get(&cake.category_id).map(|c| c.name.clone());
        joined
    }

    /// Order joined with its customer and cake; `None` if either is missing.
    fn order_details(&self, order: &Order) -> Option<OrderDetails> {
        let customer = self.accounts.iter().find(|a| a.id == order.customer_id)?;
        let cake = self.cakes.get(&order.cake_id)?;
        Some(OrderDetails {
            order: order.clone(),
            customer_name: customer.name.clone(),
            customer_email: customer.email.clone(),
            cake_name: cake.name.clone(),
        })
    }
}

/// Handle to a process-local database. Clones share the same tables.
#[derive(Debug, Clone, Default)]
pub struct MemoryDatabase {
    tables: Arc<Mutex<Tables>>,
}

impl MemoryDatabase {
    /// Create an empty database.
    pub fn new() -> Self {
        Self::default()
    }

    /// Category store over these tables.
    pub fn categories(&self) -> MemoryCategories {
        MemoryCategories::new(self.tables.clone())
    }

    /// Cake store over these tables.
    pub fn cakes(&self) -> MemoryCakes {
        MemoryCakes::new(self.tables.clone())
    }
}
