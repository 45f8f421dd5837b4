//! Embedded schema migrations.

use sqlx::PgPool;
use sqlx::migrate::Migrator;
use tracing::info;

use docesabor_core::error::{AppError, ErrorKind};

/// Migrations compiled into the binary from the workspace `migrations/` directory.
pub static MIGRATOR: Migrator = sqlx::migrate!("../../migrations");

/// Apply every pending migration.
pub async fn run_migrations(pool: &PgPool) -> Result<(), AppError> {
    info!(known = MIGRATOR.iter().count(), "Applying database migrations");

    MIGRATOR.run(pool).await.map_err(|e| {
        AppError::with_source(
            ErrorKind::Database,
            format!("Failed to run migrations: {e}"),
            e,
        )
    })?;

    info!("Database schema is up to date");
    Ok(())
}
