//! Schema bootstrap for the tracker database.
//!
//! A single table, created at startup. There is no migration framework:
//! the statement is idempotent and the schema never evolves in place.

use crate::{DbError, Result as DbErrorResult};

use std::panic::Location;

use error_location::ErrorLocation;
use sqlx::SqlitePool;

const CREATE_PROJECT_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS Project (
        ID INTEGER PRIMARY KEY AUTOINCREMENT,
        ProjectName TEXT NOT NULL DEFAULT '',
        ProjectOwner TEXT NOT NULL DEFAULT ''
    )
"#;

/// Create the `Project` table if it does not exist yet.
pub async fn initialize_schema(pool: &SqlitePool) -> DbErrorResult<()> {
    sqlx::query(CREATE_PROJECT_TABLE)
        .execute(pool)
        .await
        .map_err(|e| DbError::Schema {
            message: e.to_string(),
            location: ErrorLocation::from(Location::caller()),
        })?;

    Ok(())
}
