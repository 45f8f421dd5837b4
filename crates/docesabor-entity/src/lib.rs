//! # docesabor-entity
//!
//! Domain entity models for the Doce Sabor storefront. Every struct in this
//! crate represents a database table row, an aggregate read model, or a
//! validated write payload. Row types derive `sqlx::FromRow`; JSON field
//! names follow the storefront's public API (`nome`, `preco`, `tipo`, ...).

pub mod account;
pub mod audit;
pub mod catalog;
pub mod dashboard;
pub mod order;
