//! Application configuration schemas.
//!
//! All configuration structs are deserialized via the `config` crate from
//! TOML files and environment variables. Each sub-module represents a logical
//! configuration section, and every field has a default so that an empty
//! configuration is valid.

pub mod app;
pub mod client;
pub mod database;
pub mod folders;
pub mod logging;

use serde::{Deserialize, Serialize};

pub use self::app::{CorsConfig, ServerConfig};
pub use self::client::ClientConfig;
pub use self::database::{DatabaseConfig, StoreBackend};
pub use self::folders::FoldersConfig;
pub use self::logging::LoggingConfig;

use crate::error::AppError;

/// Prefix for structured environment overrides (`FOLDERTREE__SERVER__PORT`).
const ENV_PREFIX: &str = "FOLDERTREE";

/// Root application configuration.
///
/// Top-level deserialization target for the merged configuration
/// (default.toml + environment overlay + environment variables).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// HTTP server settings.
    #[serde(default)]
    pub server: ServerConfig,
    /// Folder store settings.
    #[serde(default)]
    pub database: DatabaseConfig,
    /// Folder hierarchy settings.
    #[serde(default)]
    pub folders: FoldersConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
    /// API client settings used by the CLI.
    #[serde(default)]
    pub client: ClientConfig,
}

impl AppConfig {
    /// Load configuration for the given environment name.
    ///
    /// Merges `config/default`, `config/{env}` and environment variables
    /// prefixed with `FOLDERTREE__`.
    pub fn load(env: &str) -> Result<Self, AppError> {
        Self::load_from("config/default", env)
    }

    /// Load configuration starting from an explicit base file.
    ///
    /// The environment overlay is looked up next to the base file. Missing
    /// files are skipped. The plain `DATABASE_URL`, `CLIENT_URL` and `PORT`
    /// variables are honoured as well, and win over the files.
    pub fn load_from(base: &str, env: &str) -> Result<Self, AppError> {
        let base = base.trim_end_matches(".toml");
        let overlay = match base.rsplit_once('/') {
            Some((dir, _)) => format!("{dir}/{env}"),
            None => env.to_string(),
        };

        let port = std::env::var("PORT").ok().and_then(|p| p.parse::<u16>().ok());
        let client_url = std::env::var("CLIENT_URL").ok().map(|url| vec![url]);

        let config = config::Config::builder()
            .add_source(config::File::with_name(base).required(false))
            .add_source(config::File::with_name(&overlay).required(false))
            .add_source(environment())
            .set_override_option("database.url", std::env::var("DATABASE_URL").ok())?
            .set_override_option("server.port", port.map(i64::from))?
            .set_override_option("server.cors.allowed_origins", client_url)?
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build config: {e}")))?;

        config
            .try_deserialize()
            .map_err(|e| AppError::configuration(format!("Failed to deserialize config: {e}")))
    }

    /// Address the HTTP server binds to.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

/// `FOLDERTREE__*` variables. List keys take comma-separated values.
fn environment() -> config::Environment {
    config::Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
        .list_separator(",")
        .with_list_parse_key("server.cors.allowed_origins")
        .with_list_parse_key("server.cors.allowed_methods")
        .with_list_parse_key("server.cors.allowed_headers")
}
