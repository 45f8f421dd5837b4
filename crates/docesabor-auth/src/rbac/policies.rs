//! Role-to-capability mapping definitions.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use docesabor_entity::account::Role;

/// An action a route may require of its caller.
///
/// Catalog browsing is public and has no capability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Capability {
    // Customer actions
    /// Place an order for oneself.
    PlaceOrder,
    /// List one's own orders.
    ViewOwnOrders,
    /// Confirm receipt of one's own shipped order.
    ConfirmReceipt,
    /// Cancel one's own order before it is in preparation.
    CancelOwnOrder,

    // Staff actions
    /// List every order.
    ListAllOrders,
    /// List and look up any account.
    ListAccounts,
    /// Register employee and admin accounts.
    CreateStaffAccount,
    /// Create and replace categories and cakes, toggle featured cakes.
    ManageCatalog,
    /// Deactivate cakes and purge categories.
    RemoveCatalogItem,
    /// Move an order forward through preparation and shipping.
    AdvanceOrder,
    /// Cancel any non-terminal order.
    CancelAnyOrder,
    /// Permanently delete an order.
    PurgeOrder,
    /// Read the audit log.
    ViewAuditLog,
    /// Read dashboard aggregates.
    ViewDashboard,
}

/// Role → set of granted capabilities.
#[derive(Debug, Clone)]
pub struct CapabilityPolicies {
    policies: HashMap<Role, HashSet<Capability>>,
}

impl CapabilityPolicies {
    /// Creates the default policy set. Employees and admins share every
    /// staff capability.
    pub fn new() -> Self {
        let client: HashSet<Capability> = [
            Capability::PlaceOrder,
            Capability::ViewOwnOrders,
            Capability::ConfirmReceipt,
            Capability::CancelOwnOrder,
        ]
        .into_iter()
        .collect();

        let employee: HashSet<Capability> = [
            Capability::ListAllOrders,
            Capability::ListAccounts,
            Capability::CreateStaffAccount,
            Capability::ManageCatalog,
            Capability::RemoveCatalogItem,
            Capability::AdvanceOrder,
            Capability::CancelAnyOrder,
            Capability::PurgeOrder,
            Capability::ViewAuditLog,
            Capability::ViewDashboard,
        ]
        .into_iter()
        .collect();

        let mut policies = HashMap::new();
        policies.insert(Role::Client, client);
        policies.insert(Role::Admin, employee.clone());
        policies.insert(Role::Employee, employee);

        Self { policies }
    }

    /// Checks whether a role has a capability.
    pub fn has_capability(&self, role: Role, capability: Capability) -> bool {
        self.policies
            .get(&role)
            .is_some_and(|caps| caps.contains(&capability))
    }
}

impl Default for CapabilityPolicies {
    fn default() -> Self {
        Self::new()
    }
}
