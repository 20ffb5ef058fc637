pub mod conversation_repository;
pub mod identity_repository;

use crate::DbError;

use chrono::{DateTime, Utc};
use uuid::Uuid;

#[track_caller]
pub(crate) fn parse_uuid(table: &'static str, value: &str) -> Result<Uuid, DbError> {
    Uuid::parse_str(value).map_err(|e| DbError::corrupt(table, format!("bad id '{}': {}", value, e)))
}

#[track_caller]
pub(crate) fn parse_millis(table: &'static str, value: i64) -> Result<DateTime<Utc>, DbError> {
    DateTime::from_timestamp_millis(value)
        .ok_or_else(|| DbError::corrupt(table, format!("timestamp out of range: {}", value)))
}
