//! CLI command definitions and dispatch.

pub mod browse;
pub mod folder;
pub mod migrate;
pub mod serve;

use clap::{Args, Parser, Subcommand};

use foldertree_client::FolderApiClient;
use foldertree_core::config::{AppConfig, LoggingConfig};
use foldertree_core::error::AppError;

use crate::output::OutputFormat;

/// FolderTree: browse and edit a folder hierarchy
#[derive(Debug, Parser)]
#[command(name = "foldertree", version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "config/default.toml")]
    pub config: String,

    /// Configuration environment overlay (config/{env}.toml)
    #[arg(long, env = "FOLDERTREE_ENV", default_value = "development")]
    pub env: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Start the API server
    Serve(serve::ServeArgs),
    /// Run PostgreSQL migrations
    Migrate,
    /// Fetch and render the folder tree
    Tree(folder::TreeArgs),
    /// Print the flat folder list
    List(ApiArgs),
    /// Create a folder
    Add(folder::AddArgs),
    /// Delete a folder
    Delete(folder::DeleteArgs),
    /// Browse the tree interactively
    Browse(ApiArgs),
}

/// Options shared by commands that talk to a running server.
#[derive(Debug, Clone, Args)]
pub struct ApiArgs {
    /// Base URL of the folder API (overrides `client.api_url`)
    #[arg(long, env = "FOLDERTREE_API_URL")]
    pub api_url: Option<String>,
}

impl Cli {
    /// Load configuration from `--config` and `--env`
    pub fn load_config(&self) -> Result<AppConfig, AppError> {
        AppConfig::load_from(&self.config, &self.env)
    }

    /// Logging settings for this invocation.
    ///
    /// `serve` follows the configured level and format like the server
    /// binary. Client commands only report warnings, in pretty form.
    pub fn logging_config(&self, config: &AppConfig) -> LoggingConfig {
        match self.command {
            Commands::Serve(_) => config.logging.clone(),
            _ => LoggingConfig {
                level: "warn".to_string(),
                format: "pretty".to_string(),
            },
        }
    }

    /// Execute the CLI command
    pub async fn execute(&self, config: AppConfig) -> Result<(), AppError> {
        match &self.command {
            Commands::Serve(args) => serve::execute(args, config).await,
            Commands::Migrate => migrate::execute(&config).await,
            Commands::Tree(args) => folder::tree(args, &config, self.format).await,
            Commands::List(args) => folder::list(args, &config, self.format).await,
            Commands::Add(args) => folder::add(args, &config, self.format).await,
            Commands::Delete(args) => folder::delete(args, &config).await,
            Commands::Browse(args) => browse::execute(args, &config).await,
        }
    }
}

/// Helper: build an API client, applying the `--api-url` override
pub fn api_client(args: &ApiArgs, config: &AppConfig) -> Result<FolderApiClient, AppError> {
    let mut client_config = config.client.clone();
    if let Some(url) = &args.api_url {
        client_config.api_url = url.clone();
    }
    FolderApiClient::new(&client_config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_tree_with_expands() {
        let id = foldertree_core::types::FolderId::new();
        let cli = Cli::try_parse_from([
            "foldertree",
            "--format",
            "json",
            "tree",
            "--expand",
            &id.to_string(),
            "--api-url",
            "http://api.test",
        ])
        .unwrap();

        assert_eq!(cli.format, OutputFormat::Json);
        match cli.command {
            Commands::Tree(args) => {
                assert_eq!(args.expand, vec![id]);
                assert!(!args.all);
                assert_eq!(args.api.api_url.as_deref(), Some("http://api.test"));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_serve_logging_follows_config() {
        let mut config = AppConfig::default();
        config.logging.level = "debug".into();
        config.logging.format = "json".into();

        let serve = Cli::try_parse_from(["foldertree", "serve", "--memory"]).unwrap();
        let logging = serve.logging_config(&config);
        assert_eq!(logging.level, "debug");
        assert!(logging.is_json());

        let list = Cli::try_parse_from(["foldertree", "list"]).unwrap();
        let logging = list.logging_config(&config);
        assert_eq!(logging.level, "warn");
        assert!(!logging.is_json());
    }

    #[test]
    fn test_api_url_override() {
        let config = AppConfig::default();
        let client = api_client(
            &ApiArgs {
                api_url: Some("http://other:8080/".into()),
            },
            &config,
        )
        .unwrap();
        assert_eq!(client.base_url(), "http://other:8080");
    }
}
