//! Category repository implementation.

use async_trait::async_trait;
use sqlx::PgPool;

use docesabor_core::error::{AppError, ErrorKind};
use docesabor_core::result::AppResult;
use docesabor_core::traits::CrudStore;
use docesabor_entity::catalog::{Category, CategoryInput};

/// Repository for category CRUD.
#[derive(Debug, Clone)]
pub struct CategoryRepository {
    pool: PgPool,
}

impl CategoryRepository {
    /// Create a new category repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CrudStore for CategoryRepository {
    type Entity = Category;
    type Input = CategoryInput;
    type Id = i64;

    async fn find_by_id(&self, id: i64) -> AppResult<Option<Category>> {
        sqlx::query_as::<_, Category>("SELECT * FROM categories WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find category", e))
    }

    async fn find_all(&self) -> AppResult<Vec<Category>> {
        sqlx::query_as::<_, Category>("SELECT * FROM categories ORDER BY name ASC")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list categories", e))
    }

    async fn create(&self, input: &CategoryInput) -> AppResult<Category> {
        sqlx::query_as::<_, Category>("INSERT INTO categories (name) VALUES ($1) RETURNING *")
            .bind(&input.name)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create category", e))
    }

    async fn replace(&self, id: i64, input: &CategoryInput) -> AppResult<Option<Category>> {
        sqlx::query_as::<_, Category>("UPDATE categories SET name = $2 WHERE id = $1 RETURNING *")
            .bind(id)
            .bind(&input.name)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update category", e))
    }

    async fn purge(&self, id: i64) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM categories WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| match e {
                sqlx::Error::Database(ref db_err)
                    if db_err.constraint() == Some("cakes_category_id_fkey") =>
                {
                    AppError::validation("Category still has cakes and cannot be deleted")
                }
                _ => AppError::with_source(ErrorKind::Database, "Failed to delete category", e),
            })?;

        Ok(result.rows_affected() > 0)
    }

    async fn count(&self) -> AppResult<u64> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM categories")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count categories", e))?;
        Ok(total as u64)
    }
}
