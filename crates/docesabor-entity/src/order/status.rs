//! Order status enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Lifecycle state of an order.
///
/// The forward path is `PLACED → CONFIRMED → IN_PREPARATION → SHIPPED →
/// CUSTOMER_RECEIVED`; `CANCELLED` is reachable from any non-terminal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "order_status", rename_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    /// Submitted by the customer.
    Placed,
    /// Accepted by the shop.
    Confirmed,
    /// Being baked.
    InPreparation,
    /// Out for delivery.
    Shipped,
    /// Delivery confirmed by the customer.
    CustomerReceived,
    /// Cancelled by the customer or the shop.
    Cancelled,
}

impl OrderStatus {
    /// Every status, in lifecycle order.
    pub const ALL: [OrderStatus; 6] = [
        Self::Placed,
        Self::Confirmed,
        Self::InPreparation,
        Self::Shipped,
        Self::CustomerReceived,
        Self::Cancelled,
    ];

    /// Check if the order can no longer change.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::CustomerReceived | Self::Cancelled)
    }

    /// The next state on the forward path, if any.
    pub fn next(&self) -> Option<Self> {
        match self {
            Self::Placed => Some(Self::Confirmed),
            Self::Confirmed => Some(Self::InPreparation),
            Self::InPreparation => Some(Self::Shipped),
            Self::Shipped => Some(Self::CustomerReceived),
            Self::CustomerReceived | Self::Cancelled => None,
        }
    }

    /// The state an order must be in to move into `self` on the forward path.
    pub fn previous(&self) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.next() == Some(*self))
    }

    /// Return the status as its wire label.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Placed => "PLACED",
            Self::Confirmed => "CONFIRMED",
            Self::InPreparation => "IN_PREPARATION",
            Self::Shipped => "SHIPPED",
            Self::CustomerReceived => "CUSTOMER_RECEIVED",
            Self::Cancelled => "CANCELLED",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for OrderStatus {
    type Err = docesabor_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let label = s.trim().to_uppercase();
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == label)
            .ok_or_else(|| {
                docesabor_core::AppError::validation(format!(
                    "Invalid order status: '{s}'. Expected one of: {}",
                    Self::ALL.map(|st| st.as_str()).join(", ")
                ))
            })
    }
}
