//! Schema command.

use crate::output;
use shop_core::error::AppError;
use shop_database::DatabasePool;

/// Apply the embedded schema
pub async fn execute(pool: &DatabasePool) -> Result<(), AppError> {
    println!("Applying database schema...");
    shop_database::migration::run_migrations(pool.pool()).await?;
    output::print_success("Schema applied successfully.");
    Ok(())
}
