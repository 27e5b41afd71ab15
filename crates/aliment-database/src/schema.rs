//! Idempotent schema setup.

use sqlx::SqlitePool;
use tracing::info;

use aliment_core::error::{AppError, ErrorKind};
use aliment_core::result::AppResult;

/// The aliment table. `AUTOINCREMENT` keeps ids monotonically increasing
/// and never reuses the id of a deleted row.
const CREATE_ALIMENT_TABLE: &str = "\
CREATE TABLE IF NOT EXISTS aliment (
    id          INTEGER PRIMARY KEY AUTOINCREMENT,
    name        VARCHAR(255) NOT NULL,
    description TEXT NOT NULL DEFAULT '',
    status      BOOLEAN NOT NULL
)";

/// Create the schema if it does not exist yet. Safe to run on every startup.
pub async fn init(pool: &SqlitePool) -> AppResult<()> {
    sqlx::query(CREATE_ALIMENT_TABLE)
        .execute(pool)
        .await
        .map_err(|e| {
            AppError::with_source(
                ErrorKind::Database,
                format!("Failed to create schema: {e}"),
                e,
            )
        })?;

    info!("Database schema ready");
    Ok(())
}
