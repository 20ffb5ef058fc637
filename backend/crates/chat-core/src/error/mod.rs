use crate::ErrorLocation;

use std::panic::Location;
use std::result::Result as StdResult;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Validation error: {message} {location}")]
    Validation {
        message: String,
        field: Option<String>,
        location: ErrorLocation,
    },

    #[error("Answer serialization failed: {source} {location}")]
    AnswerSerialization {
        #[source]
        source: serde_json::Error,
        location: ErrorLocation,
    },

    #[error("UUID parse error: {source} {location}")]
    Uuid {
        #[source]
        source: uuid::Error,
        location: ErrorLocation,
    },
}

impl CoreError {
    /// Create a validation error for a specific request field
    #[track_caller]
    pub fn validation<S: Into<String>>(field: &str, message: S) -> Self {
        CoreError::Validation {
            message: message.into(),
            field: Some(field.to_string()),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<uuid::Error> for CoreError {
    #[track_caller]
    fn from(source: uuid::Error) -> Self {
        CoreError::Uuid {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = StdResult<T, CoreError>;
