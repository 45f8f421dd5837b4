//! Password hashing command.

use clap::Args;

use docesabor_auth::{PasswordHasher, PasswordPolicy};
use docesabor_core::config::AppConfig;

use crate::output;

/// Arguments for the hash-password command
#[derive(Debug, Args)]
pub struct HashPasswordArgs {
    /// Password to hash (will prompt if not provided)
    #[arg(short, long)]
    pub password: Option<String>,

    /// Hash even if the password breaks the acceptance policy
    #[arg(long)]
    pub skip_policy: bool,
}

/// Execute the hash-password command
pub fn execute(args: &HashPasswordArgs, config: &AppConfig) -> anyhow::Result<()> {
    let password = super::password_or_prompt(args.password.as_deref(), "Password")?;

    if args.skip_policy {
        output::print_warning("Skipping the password policy check.");
    } else {
        let violations = PasswordPolicy::new(&config.auth).violations(&password);
        if !violations.is_empty() {
            for violation in &violations {
                output::print_error(&violation.to_string());
            }
            anyhow::bail!("Password rejected by the acceptance policy");
        }
    }

    let hash = PasswordHasher::from_config(&config.auth)?.hash_password(&password)?;
    println!("{hash}");
    Ok(())
}
