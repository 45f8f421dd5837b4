//! CLI command definitions and dispatch.

pub mod hash_password;
pub mod migrate;
pub mod seed_admin;

use anyhow::Context;
use clap::{Parser, Subcommand};

use docesabor_core::config::AppConfig;

/// Environment variable naming the configuration overlay.
const ENV_VAR: &str = "DOCESABOR_ENV";

/// Doce Sabor operator tool
#[derive(Debug, Parser)]
#[command(name = "docesabor-cli", version, about, long_about = None)]
pub struct Cli {
    /// Configuration overlay to load (`config/<env>.toml`); defaults to
    /// `$DOCESABOR_ENV` or `development`
    #[arg(short, long)]
    pub env: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Apply pending database migrations
    Migrate(migrate::MigrateArgs),
    /// Create the first administrator account
    SeedAdmin(seed_admin::SeedAdminArgs),
    /// Hash a password the way the server stores it
    HashPassword(hash_password::HashPasswordArgs),
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(&self) -> anyhow::Result<()> {
        let config = self.load_config()?;
        match &self.command {
            Commands::Migrate(args) => migrate::execute(args, &config).await,
            Commands::SeedAdmin(args) => seed_admin::execute(args, &config).await,
            Commands::HashPassword(args) => hash_password::execute(args, &config),
        }
    }

    fn load_config(&self) -> anyhow::Result<AppConfig> {
        dotenvy::dotenv().ok();
        let env = self
            .env
            .clone()
            .or_else(|| std::env::var(ENV_VAR).ok())
            .unwrap_or_else(|| "development".to_string());
        AppConfig::load(&env).with_context(|| format!("Failed to load configuration for '{env}'"))
    }
}

/// Use the given password or prompt for one, with confirmation.
pub fn password_or_prompt(given: Option<&str>, prompt: &str) -> anyhow::Result<String> {
    if let Some(password) = given {
        return Ok(password.to_string());
    }
    dialoguer::Password::new()
        .with_prompt(prompt)
        .with_confirmation("Confirm password", "Passwords do not match")
        .interact()
        .context("Failed to read password")
}
