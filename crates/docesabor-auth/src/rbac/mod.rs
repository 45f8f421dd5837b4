//! Role-based access control.

pub mod guard;
pub mod policies;

pub use guard::{AccessGuard, Decision, FORBIDDEN_MESSAGE};
pub use policies::{Capability, CapabilityPolicies};
