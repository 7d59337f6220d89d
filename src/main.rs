//! Folder Structure Viewer server.
//!
//! Loads configuration, initializes logging and serves the folder API until
//! Ctrl+C or SIGTERM.

use foldertree_core::config::AppConfig;
use foldertree_core::error::AppError;

#[tokio::main]
async fn main() {
    let config = match load_configuration() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    foldertree_api::init_logging(&config.logging);

    if let Err(e) = run(config).await {
        tracing::error!("Server error: {e}");
        std::process::exit(1);
    }
}

/// Load configuration from file and environment.
fn load_configuration() -> Result<AppConfig, AppError> {
    let config_path =
        std::env::var("FOLDERTREE_CONFIG").unwrap_or_else(|_| "config/default.toml".to_string());
    let env = std::env::var("FOLDERTREE_ENV").unwrap_or_else(|_| "development".to_string());

    AppConfig::load_from(&config_path, &env)
}

async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        backend = ?config.database.backend,
        "Starting Folder Structure Viewer"
    );

    foldertree_api::run_server(config).await?;

    tracing::info!("Server shut down gracefully");
    Ok(())
}
