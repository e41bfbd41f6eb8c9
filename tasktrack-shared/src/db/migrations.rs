/// Database migration runner
///
/// Migrations live in the `migrations/` directory at the workspace root and
/// are applied at startup with sqlx's embedded migrator.

use sqlx::postgres::PgPool;
use tracing::info;

/// Runs all pending database migrations
///
/// # Errors
///
/// Returns an error if any migration fails to apply.
pub async fn run_migrations(pool: &PgPool) -> Result<(), sqlx::migrate::MigrateError> {
    info!("Running database migrations");
    sqlx::migrate!("../migrations").run(pool).await?;
    info!("Database schema up to date");
    Ok(())
}
