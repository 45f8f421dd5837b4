//! Cake entity.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::{Validate, ValidationError};

/// A cake in the catalog.
///
/// Deactivated cakes keep their row so past orders still resolve; they are
/// hidden from every listing.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Cake {
    /// Cake identifier.
    pub id: i64,
    /// Cake name.
    #[serde(rename = "nome")]
    pub name: String,
    /// Unit price.
    #[serde(rename = "preco")]
    pub price: Decimal,
    /// Photo URL.
    #[serde(rename = "foto")]
    pub photo: String,
    /// Ingredient description.
    #[serde(rename = "ingredientes")]
    pub ingredients: String,
    /// Shown on the storefront's featured shelf.
    #[serde(rename = "destaque")]
    pub featured: bool,
    /// `false` once the cake has been deactivated.
    #[serde(rename = "ativo")]
    pub active: bool,
    /// Owning category.
    #[serde(rename = "categoriaId")]
    pub category_id: i64,
    /// Category name, joined on read.
    #[serde(rename = "categoriaNome", skip_serializing_if = "Option::is_none", default)]
    pub category_name: Option<String>,
    /// When the cake was added.
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

impl Cake {
    /// Whether this cake matches a free-text catalog search term.
    ///
    /// A numeric term is a price ceiling; anything else matches the cake or
    /// category name case-insensitively.
    pub fn matches_search(&self, term: &SearchTerm) -> bool {
        match term {
            SearchTerm::MaxPrice(max) => self.price <= *max,
            SearchTerm::Text(text) => {
                let needle = text.to_lowercase();
                self.name.to_lowercase().contains(&needle)
                    || self
                        .category_name
                        .as_deref()
                        .is_some_and(|c| c.to_lowercase().contains(&needle))
            }
        }
    }
}

/// A parsed catalog search term.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchTerm {
    /// Cakes priced at or below this value.
    MaxPrice(Decimal),
    /// Case-insensitive substring of the cake or category name.
    Text(String),
}

impl SearchTerm {
    /// Classify a raw path segment.
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        match trimmed.replace(',', ".").parse::<Decimal>() {
            Ok(value) => Self::MaxPrice(value),
            Err(_) => Self::Text(trimmed.to_string()),
        }
    }
}

/// Write payload for creating or replacing a cake.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CakeInput {
    /// Cake name.
    #[serde(rename = "nome")]
    #[validate(length(min = 3, message = "Name must have at least 3 characters"))]
    pub name: String,
    /// Unit price.
    #[serde(rename = "preco")]
    #[validate(custom(function = "validate_positive_price"))]
    pub price: Decimal,
    /// Photo URL.
    #[serde(rename = "foto")]
    #[validate(url(message = "Photo must be a valid URL"))]
    pub photo: String,
    /// Ingredient description.
    #[serde(rename = "ingredientes")]
    #[validate(length(min = 10, message = "Ingredients must have at least 10 characters"))]
    pub ingredients: String,
    /// Featured flag.
    #[serde(rename = "destaque", default)]
    pub featured: bool,
    /// Owning category.
    #[serde(rename = "categoriaId")]
    pub category_id: i64,
}

fn validate_positive_price(value: &Decimal) -> Result<(), ValidationError> {
    if *value <= Decimal::ZERO {
        return Err(ValidationError::new("price_not_positive")
            .with_message("Price must be greater than zero".into()));
    }
    Ok(())
}
