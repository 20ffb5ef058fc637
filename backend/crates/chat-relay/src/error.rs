use crate::FailureKind;

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

const MSG_BAD_REQUEST: &str = "Valid message is required";
const MSG_RATE_LIMITED: &str = "Rate limit exceeded. Please try again in a few minutes.";
const MSG_INVALID_RESPONSE: &str = "Invalid response from chatbot service";
const MSG_SERVICE_UNAVAILABLE: &str = "Chatbot service temporarily unavailable";
const MSG_TIMEOUT: &str = "Chatbot service is taking too long to respond. Please try again.";
const MSG_UNAVAILABLE: &str = "Chatbot service is currently unavailable. Please try again later.";
const MSG_NOT_FOUND: &str = "Chatbot service not found. Please contact support.";
const MSG_FAILURE: &str = "Something went wrong with the chatbot service";

#[derive(Error, Debug)]
pub enum RelayError {
    #[error("Invalid message: {message} {location}")]
    BadRequest {
        message: String,
        location: ErrorLocation,
    },

    #[error("Upstream rate limited the request {location}")]
    RateLimited { location: ErrorLocation },

    #[error("Upstream returned an invalid response: {detail} {location}")]
    InvalidResponse {
        detail: String,
        location: ErrorLocation,
    },

    #[error("Upstream rejected the request with status {status} {location}")]
    ServiceUnavailable { status: u16, location: ErrorLocation },

    #[error("Upstream timed out {location}")]
    Timeout { location: ErrorLocation },

    #[error("Upstream unreachable: {detail} {location}")]
    Unavailable {
        detail: String,
        location: ErrorLocation,
    },

    #[error("Upstream host not found: {detail} {location}")]
    NotFound {
        detail: String,
        location: ErrorLocation,
    },

    #[error("Relay failed: {detail} {location}")]
    Failure {
        detail: String,
        location: ErrorLocation,
    },

    #[error("HTTP client construction failed: {source} {location}")]
    Client {
        #[source]
        source: reqwest::Error,
        location: ErrorLocation,
    },
}

impl RelayError {
    #[track_caller]
    pub fn bad_request() -> Self {
        Self::BadRequest {
            message: MSG_BAD_REQUEST.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Final error for a relay call that ended in `kind`
    #[track_caller]
    pub fn from_failure(kind: FailureKind) -> Self {
        let location = ErrorLocation::from(Location::caller());
        match kind {
            FailureKind::RateLimited => Self::RateLimited { location },
            FailureKind::Rejected { status } => Self::ServiceUnavailable { status, location },
            FailureKind::InvalidResponse { detail } => Self::InvalidResponse { detail, location },
            FailureKind::Timeout => Self::Timeout { location },
            FailureKind::ConnectionFailed { detail } => Self::Unavailable { detail, location },
            FailureKind::NameResolution { detail } => Self::NotFound { detail, location },
            FailureKind::ServerError { status } => Self::Failure {
                detail: format!("upstream status {}", status),
                location,
            },
            FailureKind::Transport { detail } => Self::Failure { detail, location },
        }
    }

    /// HTTP status the relay endpoint answers with
    pub fn status_code(&self) -> u16 {
        match self {
            Self::BadRequest { .. } => 400,
            Self::RateLimited { .. } => 429,
            Self::InvalidResponse { .. } => 502,
            Self::ServiceUnavailable { .. } => 503,
            Self::Timeout { .. } => 504,
            Self::Unavailable { .. } => 503,
            Self::NotFound { .. } => 503,
            Self::Failure { .. } | Self::Client { .. } => 500,
        }
    }

    /// Machine-readable code for client responses
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::BadRequest { .. } => "VALIDATION_ERROR",
            Self::RateLimited { .. } => "UPSTREAM_RATE_LIMITED",
            Self::InvalidResponse { .. } => "UPSTREAM_INVALID_RESPONSE",
            Self::ServiceUnavailable { .. } => "UPSTREAM_REJECTED",
            Self::Timeout { .. } => "UPSTREAM_TIMEOUT",
            Self::Unavailable { .. } => "UPSTREAM_UNAVAILABLE",
            Self::NotFound { .. } => "UPSTREAM_NOT_FOUND",
            Self::Failure { .. } | Self::Client { .. } => "RELAY_FAILURE",
        }
    }

    /// Message safe to show to the end user. Never includes upstream detail.
    pub fn user_message(&self) -> &str {
        match self {
            Self::BadRequest { message, .. } => message,
            Self::RateLimited { .. } => MSG_RATE_LIMITED,
            Self::InvalidResponse { .. } => MSG_INVALID_RESPONSE,
            Self::ServiceUnavailable { .. } => MSG_SERVICE_UNAVAILABLE,
            Self::Timeout { .. } => MSG_TIMEOUT,
            Self::Unavailable { .. } => MSG_UNAVAILABLE,
            Self::NotFound { .. } => MSG_NOT_FOUND,
            Self::Failure { .. } | Self::Client { .. } => MSG_FAILURE,
        }
    }
}

pub type Result<T> = std::result::Result<T, RelayError>;
