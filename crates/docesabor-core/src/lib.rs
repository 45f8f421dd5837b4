//! # docesabor-core
//!
//! Core crate for the Doce Sabor storefront backend. Contains the
//! configuration schema, the generic store trait, and the unified
//! error system.
//!
//! This crate has **no** internal dependencies on other Doce Sabor crates.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;

pub use error::AppError;
pub use result::AppResult;
