//! Product catalog: categories and cakes.

pub mod cake;
pub mod resource;

pub use cake::CakeCatalog;
pub use resource::CrudResource;

use docesabor_database::CategoryStore;

/// Category CRUD is the plain validated resource.
pub type CategoryCatalog = CrudResource<dyn CategoryStore>;
