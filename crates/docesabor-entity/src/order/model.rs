//! Order entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

use super::status::OrderStatus;

/// A customer order for one cake.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Order {
    /// Order identifier.
    pub id: i64,
    /// Ordering customer.
    #[serde(rename = "clienteId")]
    pub customer_id: Uuid,
    /// Ordered cake.
    #[serde(rename = "boloId")]
    pub cake_id: i64,
    /// Number of cakes.
    #[serde(rename = "quantidade")]
    pub quantity: i32,
    /// Free-text notes from the customer.
    #[serde(rename = "observacoes")]
    pub observations: Option<String>,
    /// Current lifecycle state.
    pub status: OrderStatus,
    /// When the order was placed.
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

/// An order joined with the customer and cake it references.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct OrderDetails {
    /// The order row.
    #[serde(flatten)]
    #[sqlx(flatten)]
    pub order: Order,
    /// Customer display name.
    #[serde(rename = "clienteNome")]
    pub customer_name: String,
    /// Customer e-mail, used for notifications only.
    #[serde(skip_serializing, default)]
    pub customer_email: String,
    /// Cake name.
    #[serde(rename = "boloNome")]
    pub cake_name: String,
}

/// Order placement payload.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateOrder {
    /// Ordering customer.
    #[serde(rename = "clienteId")]
    pub customer_id: Uuid,
    /// Ordered cake.
    #[serde(rename = "boloId")]
    pub cake_id: i64,
    /// Number of cakes.
    #[serde(rename = "quantidade", default = "default_quantity")]
    #[validate(range(min = 1, message = "Quantity must be at least 1"))]
    pub quantity: i32,
    /// Free-text notes.
    #[serde(rename = "observacoes", default)]
    #[validate(length(min = 5, message = "Observations must have at least 5 characters"))]
    pub observations: Option<String>,
}

fn default_quantity() -> i32 {
    1
}
