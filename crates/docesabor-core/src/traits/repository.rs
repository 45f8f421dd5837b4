//! Generic store trait for validated CRUD resources.

use async_trait::async_trait;

use crate::result::AppResult;

/// Generic CRUD store.
///
/// Each catalog resource (categories, cakes) implements this once per
/// backend. `Input` is the validated write payload; `Entity` is the row
/// returned to callers. Resource-specific queries live on the concrete
/// store traits.
#[async_trait]
pub trait CrudStore: Send + Sync + 'static {
    /// Row type returned by reads and writes.
    type Entity: Send + Sync + serde::Serialize + 'static;
    /// Write payload accepted by `create` and `replace`.
    type Input: Send + Sync + 'static;
    /// Primary key.
    type Id: Send + Sync + Copy + std::fmt::Display + 'static;

    /// Find an entity by its primary key.
    async fn find_by_id(&self, id: Self::Id) -> AppResult<Option<Self::Entity>>;

    /// List every entity visible to catalog readers.
    async fn find_all(&self) -> AppResult<Vec<Self::Entity>>;

    /// Insert a new entity and return it.
    async fn create(&self, input: &Self::Input) -> AppResult<Self::Entity>;

    /// Overwrite an existing entity. Returns `None` when the id is unknown.
    async fn replace(&self, id: Self::Id, input: &Self::Input) -> AppResult<Option<Self::Entity>>;

    /// Hard-delete an entity by its primary key. Returns `true` if deleted.
    async fn purge(&self, id: Self::Id) -> AppResult<bool>;

    /// Count entities.
    async fn count(&self) -> AppResult<u64>;
}
