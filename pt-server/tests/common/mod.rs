#![allow(dead_code)]

//! Test infrastructure for pt-server API tests

use pt_server::AppState;

use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

/// Create a test pool with in-memory SQLite
pub async fn create_test_pool() -> SqlitePool {
    let options = SqliteConnectOptions::new()
        .filename(":memory:")
        .create_if_missing(true);

    // Single connection: each in-memory connection is its own database
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await
        .expect("Failed to create test database");

    pt_db::initialize_schema(&pool)
        .await
        .expect("Failed to initialize schema");

    pool
}

/// Create AppState for testing
pub async fn create_test_app_state() -> AppState {
    AppState {
        pool: create_test_pool().await,
    }
}

/// Insert a project directly and return its assigned id
pub async fn create_test_project(pool: &SqlitePool, name: &str, owner: &str) -> i64 {
    let result = sqlx::query("INSERT INTO Project (ProjectName, ProjectOwner) VALUES (?, ?)")
        .bind(name)
        .bind(owner)
        .execute(pool)
        .await
        .expect("Failed to create test project");

    result.last_insert_rowid()
}
