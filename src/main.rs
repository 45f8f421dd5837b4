//! Doce Sabor storefront server.
//!
//! Loads configuration, initializes logging and hands over to the API crate.

use tracing_subscriber::{EnvFilter, fmt};

use docesabor_core::config::AppConfig;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    let env = std::env::var("DOCESABOR_ENV")
        .or_else(|_| std::env::var("APP_ENV"))
        .unwrap_or_else(|_| "development".to_string());

    let config = match AppConfig::load(&env) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    init_logging(&config);
    tracing::info!(env = %env, version = env!("CARGO_PKG_VERSION"), "Configuration loaded");

    if config.uses_placeholder_secret() {
        tracing::warn!(
            "auth.jwt_secret is the shipped placeholder; set DOCESABOR__AUTH__JWT_SECRET or JWT_KEY"
        );
    }

    if let Err(e) = docesabor_api::run_server(config).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .with_thread_ids(true)
                .init();
        }
        _ => {
            fmt()
                .pretty()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
    }
}
