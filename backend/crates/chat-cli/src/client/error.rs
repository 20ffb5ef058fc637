use error_location::ErrorLocation;
use std::panic::Location;
use thiserror::Error;

/// Failures talking to chat-server
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("HTTP request error: {message} {location}")]
    Http {
        message: String,
        location: ErrorLocation,
        #[source]
        source: reqwest::Error,
    },

    #[error("API error: {message} (status: {status}, code: {code}) {location}")]
    Api {
        status: u16,
        code: String,
        message: String,
        location: ErrorLocation,
    },

    #[error("JSON parse error: {message} {location}")]
    Json {
        message: String,
        location: ErrorLocation,
        #[source]
        source: serde_json::Error,
    },

    #[error("Not signed in: pass --token or set CHAT_TOKEN {location}")]
    NotSignedIn { location: ErrorLocation },
}

impl ClientError {
    /// Error envelope returned by the server
    #[track_caller]
    pub fn api_error(status: u16, code: impl Into<String>, message: impl Into<String>) -> Self {
        ClientError::Api {
            status,
            code: code.into(),
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn not_signed_in() -> Self {
        ClientError::NotSignedIn {
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<reqwest::Error> for ClientError {
    #[track_caller]
    fn from(source: reqwest::Error) -> Self {
        ClientError::Http {
            message: source.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source,
        }
    }
}

impl From<serde_json::Error> for ClientError {
    #[track_caller]
    fn from(source: serde_json::Error) -> Self {
        ClientError::Json {
            message: source.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, ClientError>;
