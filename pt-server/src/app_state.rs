use sqlx::SqlitePool;

/// Shared state handed to every handler. Constructed once at startup and
/// cloned per request; the pool is internally reference-counted.
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
}
