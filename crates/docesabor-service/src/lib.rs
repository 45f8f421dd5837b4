//! # docesabor-service
//!
//! Business logic service layer for the Doce Sabor storefront. Each service
//! receives its store handles and auth primitives at construction time
//! (`Arc` references) and enforces the capability checks for its use cases.

pub mod account;
pub mod audit;
pub mod catalog;
pub mod context;
pub mod dashboard;
pub mod notification;
pub mod order;

pub use account::{AccountService, INVALID_CREDENTIALS_MESSAGE, LoginOutcome, LoginRequest};
pub use audit::AuditTrail;
pub use catalog::{CakeCatalog, CategoryCatalog, CrudResource};
pub use context::RequestContext;
pub use dashboard::DashboardService;
pub use notification::{
    DisabledMailer, HttpMailRelay, MailDispatcher, MailMessage, OrderNotifier,
};
pub use order::{OrderLifecycle, OrderService};
