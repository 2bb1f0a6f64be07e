//! Schema runner.

use sqlx::PgPool;
use tracing::info;

use shop_core::error::{AppError, ErrorKind};

/// Apply the embedded schema to the database.
pub async fn run_migrations(pool: &PgPool) -> Result<(), AppError> {
    info!("Applying database schema...");

    sqlx::migrate!("../../migrations")
        .run(pool)
        .await
        .map_err(|e| {
            AppError::with_source(
                ErrorKind::StoreAccess,
                format!("Failed to apply schema: {e}"),
                e,
            )
        })?;

    info!("Database schema is up to date");
    Ok(())
}
