//! PostgreSQL implementations of the store traits.

pub mod account;
pub mod audit;
pub mod cake;
pub mod category;
pub mod dashboard;
pub mod order;

pub use account::AccountRepository;
pub use audit::AuditRepository;
pub use cake::CakeRepository;
pub use category::CategoryRepository;
pub use dashboard::DashboardRepository;
pub use order::OrderRepository;
