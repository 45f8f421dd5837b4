//! Database migration commands.

use anyhow::{Context, bail};
use clap::Args;

use docesabor_core::config::{AppConfig, DatabaseProvider};
use docesabor_database::DatabasePool;
use docesabor_database::connection::mask_password;
use docesabor_database::migration::{MIGRATOR, run_migrations};

use crate::output;

/// Arguments for the migrate command
#[derive(Debug, Args)]
pub struct MigrateArgs {
    /// List the migrations compiled into this binary without applying them
    #[arg(long)]
    pub list: bool,
}

/// Execute the migrate command
pub async fn execute(args: &MigrateArgs, config: &AppConfig) -> anyhow::Result<()> {
    if args.list {
        for migration in MIGRATOR.iter() {
            output::print_kv(&migration.version.to_string(), &migration.description);
        }
        return Ok(());
    }

    if config.database.provider != DatabaseProvider::Postgres {
        bail!("Migrations only apply to the postgres provider");
    }

    println!(
        "Running migrations against {}...",
        mask_password(&config.database.url)
    );
    let pool = DatabasePool::connect(&config.database).await?;
    let result = run_migrations(pool.pool())
        .await
        .context("Migration failed");
    pool.close().await;
    result?;

    output::print_success("All migrations applied.");
    Ok(())
}
