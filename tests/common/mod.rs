use chrono::{Duration, Utc};
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;

/// Opens a single-connection in-memory SQLite pool with the schema applied.
/// A single connection keeps every query in the test on the same memory
/// database.
pub async fn setup_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("Failed to open in-memory database");

    project_api::db::init_schema(&pool)
        .await
        .expect("Failed to create schema");

    pool
}

/// ISO-formatted naive UTC datetime string N days from now.
#[allow(dead_code)]
pub fn iso_deadline(days_from_now: i64) -> String {
    (Utc::now() + Duration::days(days_from_now))
        .naive_utc()
        .format("%Y-%m-%dT%H:%M:%S")
        .to_string()
}
