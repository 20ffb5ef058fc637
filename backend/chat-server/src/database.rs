use crate::error::Result as ServerErrorResult;

use chat_db::DbError;

use std::str::FromStr;
use std::time::Duration;

use log::info;
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous};

const MAX_CONNECTIONS: u32 = 10;
const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Open the SQLite pool (WAL, file created if missing) and apply migrations
pub async fn open_pool(database_url: &str) -> ServerErrorResult<SqlitePool> {
    let options = SqliteConnectOptions::from_str(database_url)
        .map_err(DbError::from)?
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .synchronous(SqliteSynchronous::Normal)
        .busy_timeout(BUSY_TIMEOUT);

    let pool = SqlitePoolOptions::new()
        .max_connections(MAX_CONNECTIONS)
        .connect_with(options)
        .await
        .map_err(DbError::from)?;
    info!("Database connection established");

    info!("Running database migrations...");
    chat_db::MIGRATOR.run(&pool).await.map_err(DbError::from)?;
    info!("Migrations complete");

    Ok(pool)
}
