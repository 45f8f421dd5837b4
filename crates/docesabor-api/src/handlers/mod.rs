//! Route handlers organized by domain.

pub mod account;
pub mod audit;
pub mod auth;
pub mod cake;
pub mod category;
pub mod dashboard;
pub mod health;
pub mod order;
