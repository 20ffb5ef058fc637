use chat_core::ErrorLocation;

use std::panic::Location;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DbError {
    #[error("SQLx error: {source} {location}")]
    Sqlx {
        source: sqlx::Error,
        location: ErrorLocation,
    },

    #[error("Migration error: {source} {location}")]
    Migration {
        #[source]
        source: sqlx::migrate::MigrateError,
        location: ErrorLocation,
    },

    #[error("Email already registered: {email} {location}")]
    DuplicateEmail {
        email: String,
        location: ErrorLocation,
    },

    #[error("Corrupt row in {table}: {message} {location}")]
    CorruptRow {
        table: &'static str,
        message: String,
        location: ErrorLocation,
    },
}

impl DbError {
    #[track_caller]
    pub(crate) fn corrupt(table: &'static str, message: impl Into<String>) -> Self {
        Self::CorruptRow {
            table,
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<sqlx::Error> for DbError {
    #[track_caller]
    fn from(source: sqlx::Error) -> Self {
        Self::Sqlx {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<sqlx::migrate::MigrateError> for DbError {
    #[track_caller]
    fn from(source: sqlx::migrate::MigrateError) -> Self {
        Self::Migration {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, DbError>;
