//! Database migration command.

use foldertree_core::config::AppConfig;
use foldertree_core::error::AppError;
use foldertree_database::DatabasePool;
use foldertree_database::migration::run_migrations;

use crate::output;

/// Run all pending migrations against the configured database.
pub async fn execute(config: &AppConfig) -> Result<(), AppError> {
    let pool = DatabasePool::connect(&config.database).await?;

    println!("Running database migrations...");
    run_migrations(pool.pool()).await?;
    pool.pool().close().await;

    output::print_success("All migrations applied successfully.");
    Ok(())
}
