//! Orders: placement, listings and the status lifecycle.

pub mod lifecycle;
pub mod service;

pub use lifecycle::{OrderLifecycle, Scope, Transition, plan_transition};
pub use service::OrderService;
