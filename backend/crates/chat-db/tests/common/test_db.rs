use chat_db::MIGRATOR;

use std::time::Duration;

use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
use tempfile::TempDir;

/// Creates an in-memory SQLite pool with migrations run
pub async fn create_test_pool() -> SqlitePool {
    let options = SqliteConnectOptions::new()
        .filename(":memory:")
        .create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1) // In-memory needs single connection
        .connect_with(options)
        .await
        .expect("Failed to create test pool");

    MIGRATOR.run(&pool).await.expect("Failed to run migrations");

    pool
}

/// File-backed pool with several connections, for tests that need real
/// concurrent writers. Keep the TempDir alive for the duration of the test.
pub async fn create_file_pool() -> (SqlitePool, TempDir) {
    let dir = TempDir::new().expect("Failed to create temp dir");

    let options = SqliteConnectOptions::new()
        .filename(dir.path().join("test.db"))
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .busy_timeout(Duration::from_secs(10));

    let pool = SqlitePoolOptions::new()
        .max_connections(4)
        .connect_with(options)
        .await
        .expect("Failed to create file pool");

    MIGRATOR.run(&pool).await.expect("Failed to run migrations");

    (pool, dir)
}
