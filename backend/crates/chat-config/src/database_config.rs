use crate::DEFAULT_DATABASE_FILENAME;

use serde::Deserialize;

/// Conversation store location.
///
/// `url` is the connection string and wins when present. Otherwise the
/// SQLite file `path` is resolved relative to the config directory.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    pub url: Option<String>,
    pub path: String,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: None,
            path: String::from(DEFAULT_DATABASE_FILENAME),
        }
    }
}
