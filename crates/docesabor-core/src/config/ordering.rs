//! Storefront ordering policy.

use serde::{Deserialize, Serialize};

/// Policy knobs for order placement and catalog listings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderingConfig {
    /// Accept orders from requests without an `Authorization` header.
    #[serde(default)]
    pub allow_guest_orders: bool,
    /// How many cakes `GET /bolos/recentes` returns.
    #[serde(default = "default_recent_limit")]
    pub recent_cakes_limit: u32,
}

impl Default for OrderingConfig {
    fn default() -> Self {
        Self {
            allow_guest_orders: false,
            recent_cakes_limit: default_recent_limit(),
        }
    }
}

fn default_recent_limit() -> u32 {
    4
}
