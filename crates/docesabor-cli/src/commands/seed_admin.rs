//! First administrator provisioning.

use anyhow::{Context, bail};
use clap::Args;
use tracing::info;

use docesabor_auth::{PasswordHasher, PasswordPolicy};
use docesabor_core::config::{AppConfig, DatabaseProvider};
use docesabor_database::{AccountStore, Stores};
use docesabor_entity::account::{NewAccount, Role};

use crate::output;

/// Arguments for the seed-admin command
#[derive(Debug, Args)]
pub struct SeedAdminArgs {
    /// Administrator e-mail
    #[arg(short, long, default_value = "adm@email.com")]
    pub email: String,

    /// Display name
    #[arg(short, long, default_value = "Administrador")]
    pub name: String,

    /// Password (will prompt if not provided)
    #[arg(short, long)]
    pub password: Option<String>,
}

/// Execute the seed-admin command.
///
/// Does nothing when an account with the e-mail already exists.
pub async fn execute(args: &SeedAdminArgs, config: &AppConfig) -> anyhow::Result<()> {
    if config.database.provider != DatabaseProvider::Postgres {
        bail!(
            "Seeding needs the postgres provider; pick another --env or set DOCESABOR__DATABASE__PROVIDER"
        );
    }

    let email = args.email.trim().to_lowercase();
    if email.is_empty() || !email.contains('@') {
        bail!("'{}' is not a valid e-mail address", args.email);
    }

    let stores = Stores::from_config(&config.database).await?;
    let result = seed(&stores, args, &email, config).await;
    stores.close().await;
    result
}

async fn seed(
    stores: &Stores,
    args: &SeedAdminArgs,
    email: &str,
    config: &AppConfig,
) -> anyhow::Result<()> {
    if let Some(existing) = stores.accounts.find_by_email(email).await? {
        output::print_warning(&format!(
            "Account {email} already exists (role {}); nothing to do.",
            existing.role
        ));
        return Ok(());
    }

    let password = super::password_or_prompt(args.password.as_deref(), "Admin password")?;
    PasswordPolicy::new(&config.auth)
        .check(&password)
        .map_err(|e| match e.details {
            Some(details) => anyhow::anyhow!("{}: {details}", e.message),
            None => anyhow::anyhow!(e),
        })?;

    let password_hash = PasswordHasher::from_config(&config.auth)?.hash_password(&password)?;
    let account = stores
        .accounts
        .create(&NewAccount {
            name: args.name.trim().to_string(),
            email: email.to_string(),
            password_hash,
            role: Role::Admin,
            city: None,
        })
        .await
        .context("Failed to create the admin account")?;

    info!(account_id = %account.id, "Seeded administrator account");
    output::print_success("Administrator account created.");
    output::print_kv("ID", &account.id.to_string());
    output::print_kv("E-mail", &account.email);
    Ok(())
}
