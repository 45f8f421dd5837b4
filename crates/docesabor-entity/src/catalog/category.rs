//! Cake category entity.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A catalog category (e.g. "Chocolate", "Frutas").
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Category {
    /// Category identifier.
    pub id: i64,
    /// Category name.
    #[serde(rename = "nome")]
    pub name: String,
}

/// Write payload for creating or replacing a category.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CategoryInput {
    /// Category name.
    #[serde(rename = "nome", default)]
    #[validate(length(min = 3, message = "Name must have at least 3 characters"))]
    pub name: String,
}
