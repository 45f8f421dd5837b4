//! Account repository implementation.

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use docesabor_core::error::{AppError, ErrorKind};
use docesabor_core::result::AppResult;
use docesabor_entity::account::{Account, NewAccount, Role};

use crate::store::AccountStore;

/// Repository for account lookup and creation.
#[derive(Debug, Clone)]
pub struct AccountRepository {
    pool: PgPool,
}

impl AccountRepository {
    /// Create a new account repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AccountStore for AccountRepository {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Account>> {
        sqlx::query_as::<_, Account>("SELECT * FROM accounts WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find account by id", e)
            })
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<Account>> {
        sqlx::query_as::<_, Account>("SELECT * FROM accounts WHERE LOWER(email) = LOWER($1)")
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find account by email", e)
            })
    }

    async fn find_all(&self) -> AppResult<Vec<Account>> {
        sqlx::query_as::<_, Account>("SELECT * FROM accounts ORDER BY created_at DESC")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list accounts", e))
    }

    async fn find_by_roles(&self, roles: &[Role]) -> AppResult<Vec<Account>> {
        sqlx::query_as::<_, Account>(
            "SELECT * FROM accounts WHERE role = ANY($1) ORDER BY created_at DESC",
        )
        .bind(roles)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list accounts by role", e)
        })
    }

    async fn create(&self, data: &NewAccount) -> AppResult<Account> {
        sqlx::query_as::<_, Account>(
            "INSERT INTO accounts (id, name, email, password_hash, role, city) \
             VALUES ($1, $2, $3, $4, $5, $6) \
             RETURNING *",
        )
        .bind(Uuid::new_v4())
        .bind(&data.name)
        .bind(&data.email)
        .bind(&data.password_hash)
        .bind(data.role)
        .bind(&data.city)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err)
                if db_err.constraint() == Some("accounts_email_key") =>
            {
                AppError::validation("E-mail already in use")
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to create account", e),
        })
    }
}
