//! Read models for the admin dashboard.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::order::OrderStatus;

/// Headline counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneralStats {
    /// Registered customers.
    pub clientes: i64,
    /// Active cakes.
    pub bolos: i64,
    /// Orders of any status.
    pub pedidos: i64,
}

/// Active cakes per category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct CategoryCount {
    /// Category name.
    pub categoria: String,
    /// Number of active cakes.
    pub num: i64,
}

/// Customers per city.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct CityCount {
    /// City name.
    pub cidade: String,
    /// Number of customers.
    pub num: i64,
}

/// Orders per status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct StatusCount {
    /// Order status.
    pub status: OrderStatus,
    /// Number of orders.
    pub num: i64,
}
