//! Catalog entities: categories and cakes.

pub mod cake;
pub mod category;

pub use cake::{Cake, CakeInput, SearchTerm};
pub use category::{Category, CategoryInput};
