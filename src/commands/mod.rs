//! CLI command definitions and dispatch.

pub mod migrate;
pub mod product;

use clap::{Parser, Subcommand};

use crate::output::{self, OutputFormat};
use shop_core::config::AppConfig;
use shop_core::error::AppError;
use shop_database::DatabasePool;

/// Internet shop product catalog
#[derive(Debug, Parser)]
#[command(name = "shop", version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "config/default.toml")]
    pub config: String,

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
    /// Apply the database schema
    Migrate,
    /// Check database connectivity
    Health,
    /// Product catalog management
    #[command(flatten)]
    Product(product::ProductCommand),
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(&self, config: &AppConfig) -> Result<(), AppError> {
        let pool = DatabasePool::connect(&config.database).await?;

        let result = match &self.command {
            Commands::Migrate => migrate::execute(&pool).await,
            Commands::Health => health(&pool).await,
            Commands::Product(command) => product::execute(command, &pool, self.format).await,
        };

        pool.close().await;
        result
    }
}

/// Report whether the database answers a trivial query
async fn health(pool: &DatabasePool) -> Result<(), AppError> {
    if pool.health_check().await? {
        output::print_success("Database is reachable.");
    } else {
        output::print_warning("Database answered unexpectedly.");
    }
    Ok(())
}
