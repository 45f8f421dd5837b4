//! Store traits consumed by the service layer.
//!
//! Each trait has a PostgreSQL implementation in [`crate::repositories`] and
//! an in-memory one in [`crate::memory`].

use async_trait::async_trait;
use uuid::Uuid;

use docesabor_core::result::AppResult;
use docesabor_core::traits::CrudStore;
use docesabor_entity::account::{Account, NewAccount, Role};
use docesabor_entity::audit::{AuditLogEntry, CreateAuditLogEntry};
use docesabor_entity::catalog::{Cake, CakeInput, Category, CategoryInput, SearchTerm};
use docesabor_entity::dashboard::{CategoryCount, CityCount, GeneralStats, StatusCount};
use docesabor_entity::order::{CreateOrder, OrderDetails, OrderStatus};

/// Credential store: account lookup and creation.
#[async_trait]
pub trait AccountStore: Send + Sync + 'static {
    /// Find an account by primary key.
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Account>>;

    /// Find an account by e-mail, case-insensitively.
    async fn find_by_email(&self, email: &str) -> AppResult<Option<Account>>;

    /// List every account, newest first.
    async fn find_all(&self) -> AppResult<Vec<Account>>;

    /// List accounts holding any of the given roles, newest first.
    async fn find_by_roles(&self, roles: &[Role]) -> AppResult<Vec<Account>>;

    /// Insert an account. A duplicate e-mail is a validation error.
    async fn create(&self, data: &NewAccount) -> AppResult<Account>;
}

/// Category CRUD.
pub trait CategoryStore: CrudStore<Entity = Category, Input = CategoryInput, Id = i64> {}

impl<T> CategoryStore for T where T: CrudStore<Entity = Category, Input = CategoryInput, Id = i64> {}

/// Cake CRUD plus storefront queries.
///
/// `find_all`, `find_featured`, `find_recent` and `search` only return
/// active cakes; `find_by_id` returns inactive ones too. `purge` is not
/// exposed over HTTP; cakes are retired with `deactivate`.
#[async_trait]
pub trait CakeStore: CrudStore<Entity = Cake, Input = CakeInput, Id = i64> {
    /// Active cakes flagged as featured.
    async fn find_featured(&self) -> AppResult<Vec<Cake>>;

    /// The most recently added active cakes.
    async fn find_recent(&self, limit: u32) -> AppResult<Vec<Cake>>;

    /// Active cakes matching a search term.
    async fn search(&self, term: &SearchTerm) -> AppResult<Vec<Cake>>;

    /// Mark a cake inactive. Returns `None` when the id is unknown.
    async fn deactivate(&self, id: i64) -> AppResult<Option<Cake>>;

    /// Flip the featured flag. Returns `None` when the id is unknown.
    async fn toggle_featured(&self, id: i64) -> AppResult<Option<Cake>>;
}

/// Order store.
#[async_trait]
pub trait OrderStore: Send + Sync + 'static {
    /// Find an order by primary key.
    async fn find_by_id(&self, id: i64) -> AppResult<Option<OrderDetails>>;

    /// List every order, newest first.
    async fn find_all(&self) -> AppResult<Vec<OrderDetails>>;

    /// List one customer's orders, newest first.
    async fn find_by_customer(&self, customer_id: Uuid) -> AppResult<Vec<OrderDetails>>;

    /// Insert an order in [`OrderStatus::Placed`].
    async fn create(&self, data: &CreateOrder) -> AppResult<OrderDetails>;

    /// Compare-and-set the status.
    ///
    /// Writes `next` only if the order is currently `expected`, and returns
    /// the updated row. `None` means no row matched: the order is gone or
    /// its status changed concurrently.
    async fn update_status(
        &self,
        id: i64,
        expected: OrderStatus,
        next: OrderStatus,
    ) -> AppResult<Option<OrderDetails>>;

    /// Hard-delete an order. Returns `true` if deleted.
    async fn purge(&self, id: i64) -> AppResult<bool>;
}

/// Append-only audit trail.
#[async_trait]
pub trait AuditStore: Send + Sync + 'static {
    /// Append an entry.
    async fn append(&self, entry: &CreateAuditLogEntry) -> AppResult<AuditLogEntry>;

    /// List every entry, newest first.
    async fn list(&self) -> AppResult<Vec<AuditLogEntry>>;
}

/// Aggregate queries for the admin dashboard.
#[async_trait]
pub trait DashboardStore: Send + Sync + 'static {
    /// Customer, active cake and order counts.
    async fn general_stats(&self) -> AppResult<GeneralStats>;

    /// Active cakes per category, omitting empty categories.
    async fn cakes_by_category(&self) -> AppResult<Vec<CategoryCount>>;

    /// Customers per city, omitting customers without a city.
    async fn customers_by_city(&self) -> AppResult<Vec<CityCount>>;

    /// Orders per status, omitting statuses with no orders.
    async fn orders_by_status(&self) -> AppResult<Vec<StatusCount>>;
}
