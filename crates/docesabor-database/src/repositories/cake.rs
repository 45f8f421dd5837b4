//! Cake repository implementation.

use async_trait::async_trait;
use sqlx::PgPool;

use docesabor_core::error::{AppError, ErrorKind};
use docesabor_core::result::AppResult;
use docesabor_core::traits::CrudStore;
use docesabor_entity::catalog::{Cake, CakeInput, SearchTerm};

use crate::store::CakeStore;

/// Cake columns joined with the owning category's name.
const SELECT_CAKE: &str = "SELECT c.*, cat.name AS category_name \
                           FROM cakes c JOIN categories cat ON cat.id = c.category_id";

/// Repository for the cake catalog.
#[derive(Debug, Clone)]
pub struct CakeRepository {
    pool: PgPool,
}

impl CakeRepository {
    /// Create a new cake repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Wrap a data-modifying statement so its `RETURNING *` row comes back
/// joined with the category name.
fn joined_returning(statement: &str) -> String {
    format!(
        "WITH written AS ({statement} RETURNING *) \
         SELECT w.*, cat.name AS category_name \
         FROM written w JOIN categories cat ON cat.id = w.category_id"
    )
}

fn write_error(e: sqlx::Error, context: &'static str) -> AppError {
    match e {
        sqlx::Error::Database(ref db_err) if db_err.constraint() == Some("cakes_category_id_fkey") => {
            AppError::validation("Unknown category")
        }
        _ => AppError::with_source(ErrorKind::Database, context, e),
    }
}

#[async_trait]
impl CrudStore for CakeRepository {
    type Entity = Cake;
    type Input = CakeInput;
    type Id = i64;

    async fn find_by_id(&self, id: i64) -> AppResult<Option<Cake>> {
        let sql = format!("{SELECT_CAKE} WHERE c.id = $1");
        sqlx::query_as::<_, Cake>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find cake", e))
    }

    async fn find_all(&self) -> AppResult<Vec<Cake>> {
        let sql = format!("{SELECT_CAKE} WHERE c.active ORDER BY c.name ASC");
        sqlx::query_as::<_, Cake>(&sql)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list cakes", e))
    }

    async fn create(&self, input: &CakeInput) -> AppResult<Cake> {
        let sql = joined_returning(
            "INSERT INTO cakes (name, price, photo, ingredients, featured, category_id) \
             VALUES ($1, $2, $3, $4, $5, $6)",
        );
        sqlx::query_as::<_, Cake>(&sql)
            .bind(&input.name)
            .bind(input.price)
            .bind(&input.photo)
            .bind(&input.ingredients)
            .bind(input.featured)
            .bind(input.category_id)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| write_error(e, "Failed to create cake"))
    }

    async fn replace(&self, id: i64, input: &CakeInput) -> AppResult<Option<Cake>> {
        let sql = joined_returning(
            "UPDATE cakes SET name = $2, price = $3, photo = $4, ingredients = $5, \
             featured = $6, category_id = $7 WHERE id = $1",
        );
        sqlx::query_as::<_, Cake>(&sql)
            .bind(id)
            .bind(&input.name)
            .bind(input.price)
            .bind(&input.photo)
            .bind(&input.ingredients)
            .bind(input.featured)
            .bind(input.category_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| write_error(e, "Failed to update cake"))
    }

    async fn purge(&self, id: i64) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM cakes WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| match e {
                sqlx::Error::Database(ref db_err)
                    if db_err.constraint() == Some("orders_cake_id_fkey") =>
                {
                    AppError::validation("Cake has orders and cannot be deleted")
                }
                _ => AppError::with_source(ErrorKind::Database, "Failed to delete cake", e),
            })?;
        Ok(result.rows_affected() > 0)
    }

    async fn count(&self) -> AppResult<u64> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM cakes WHERE active")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count cakes", e))?;
        Ok(total as u64)
    }
}

#[async_trait]
impl CakeStore for CakeRepository {
    async fn find_featured(&self) -> AppResult<Vec<Cake>> {
        let sql = format!("{SELECT_CAKE} WHERE c.active AND c.featured ORDER BY c.name ASC");
        sqlx::query_as::<_, Cake>(&sql)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to list featured cakes", e)
            })
    }

    async fn find_recent(&self, limit: u32) -> AppResult<Vec<Cake>> {
        let sql =
            format!("{SELECT_CAKE} WHERE c.active ORDER BY c.created_at DESC, c.id DESC LIMIT $1");
        sqlx::query_as::<_, Cake>(&sql)
            .bind(i64::from(limit))
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to list recent cakes", e)
            })
    }

    async fn search(&self, term: &SearchTerm) -> AppResult<Vec<Cake>> {
        let result = match term {
            SearchTerm::MaxPrice(max) => {
                let sql = format!("{SELECT_CAKE} WHERE c.active AND c.price <= $1 ORDER BY c.price ASC");
                sqlx::query_as::<_, Cake>(&sql)
                    .bind(*max)
                    .fetch_all(&self.pool)
                    .await
            }
            SearchTerm::Text(text) => {
                let sql = format!(
                    "{SELECT_CAKE} WHERE c.active AND (c.name ILIKE $1 OR cat.name ILIKE $1) \
                     ORDER BY c.name ASC"
                );
                sqlx::query_as::<_, Cake>(&sql)
                    .bind(format!("%{}%", escape_like(text)))
                    .fetch_all(&self.pool)
                    .await
            }
        };

        result.map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to search cakes", e))
    }

    async fn deactivate(&self, id: i64) -> AppResult<Option<Cake>> {
        let sql = joined_returning("UPDATE cakes SET active = FALSE WHERE id = $1");
        sqlx::query_as::<_, Cake>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| write_error(e, "Failed to deactivate cake"))
    }

    async fn toggle_featured(&self, id: i64) -> AppResult<Option<Cake>> {
        let sql = joined_returning("UPDATE cakes SET featured = NOT featured WHERE id = $1");
        sqlx::query_as::<_, Cake>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| write_error(e, "Failed to toggle featured cake"))
    }
}

/// Escape `%`, `_` and `\` so user input matches literally inside `ILIKE`.
fn escape_like(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}
