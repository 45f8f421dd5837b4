//! Core traits defined in `docesabor-core` and implemented by other crates.

pub mod repository;

pub use repository::CrudStore;
