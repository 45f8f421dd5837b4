//! # docesabor-database
//!
//! Persistence for the Doce Sabor storefront: the store traits the service
//! layer depends on, their PostgreSQL implementations, and an in-memory
//! implementation used for local runs and tests.

pub mod connection;
pub mod memory;
pub mod migration;
pub mod repositories;
pub mod store;
pub mod stores;

pub use connection::DatabasePool;
pub use memory::MemoryDatabase;
pub use store::{
    AccountStore, AuditStore, CakeStore, CategoryStore, DashboardStore, OrderStore,
};
pub use stores::Stores;
