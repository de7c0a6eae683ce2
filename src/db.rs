//!
//! # Database Access
//!
//! Pool construction and schema initialization for the SQLite store.
//! The schema is created on startup if it does not exist yet, so a fresh
//! container (or an in-memory test database) is usable without a separate
//! migration step.

use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;

const CREATE_PROJECTS: &str = "\
CREATE TABLE IF NOT EXISTS projects (
    id       INTEGER PRIMARY KEY AUTOINCREMENT,
    title    TEXT NOT NULL,
    deadline TEXT NOT NULL
)";

// Deleting a project detaches its tasks rather than deleting them.
const CREATE_TASKS: &str = "\
CREATE TABLE IF NOT EXISTS tasks (
    id          INTEGER PRIMARY KEY AUTOINCREMENT,
    title       TEXT NOT NULL,
    description TEXT,
    deadline    TEXT,
    completed   INTEGER NOT NULL DEFAULT 0,
    project_id  INTEGER REFERENCES projects(id) ON DELETE SET NULL
)";

/// Opens a connection pool against `database_url`.
pub async fn connect(database_url: &str) -> Result<SqlitePool, sqlx::Error> {
    SqlitePoolOptions::new().connect(database_url).await
}

/// Creates the `projects` and `tasks` tables if they are missing.
pub async fn init_schema(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query(CREATE_PROJECTS).execute(pool).await?;
    sqlx::query(CREATE_TASKS).execute(pool).await?;
    Ok(())
}
