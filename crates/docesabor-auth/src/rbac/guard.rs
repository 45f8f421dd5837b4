//! Access guard: decides whether a caller's role satisfies a capability.

use tracing::debug;

use docesabor_core::error::AppError;
use docesabor_entity::account::Role;

use super::policies::{Capability, CapabilityPolicies};

/// Message returned for every denied capability.
pub const FORBIDDEN_MESSAGE: &str = "You are not allowed to perform this action";

/// Outcome of an authorization check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// The role grants the capability.
    Allow,
    /// The role does not grant the capability.
    Deny,
}

/// Enforces role-based access control.
#[derive(Debug, Clone, Default)]
pub struct AccessGuard {
    policies: CapabilityPolicies,
}

impl AccessGuard {
    /// Creates a guard with the default policy set.
    pub fn new() -> Self {
        Self {
            policies: CapabilityPolicies::new(),
        }
    }

    /// Decides for a bare role.
    pub fn decide(&self, role: Role, capability: Capability) -> Decision {
        if self.policies.has_capability(role, capability) {
            Decision::Allow
        } else {
            Decision::Deny
        }
    }

    /// Returns `Ok(())` if allowed, or an authorization error if denied.
    pub fn require(&self, role: Role, capability: Capability) -> Result<(), AppError> {
        match self.decide(role, capability) {
            Decision::Allow => Ok(()),
            Decision::Deny => {
                debug!(%role, ?capability, "Capability denied");
                Err(AppError::authorization(FORBIDDEN_MESSAGE))
            }
        }
    }
}
