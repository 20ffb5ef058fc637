//! Mapping of upstream statuses and transport errors onto [`AttemptOutcome`].

use crate::{AttemptOutcome, FailureKind};

use std::error::Error as StdError;

use reqwest::StatusCode;
use reqwest::header::{CONTENT_TYPE, HeaderMap};

const JSON_CONTENT_TYPE: &str = "application/json";

/// Classify a non-success status.
///
/// 429 and other 4xx answers are terminal, 5xx is transient.
pub fn classify_status(status: StatusCode) -> AttemptOutcome {
    if status == StatusCode::TOO_MANY_REQUESTS {
        AttemptOutcome::Terminal(FailureKind::RateLimited)
    } else if status.is_server_error() {
        AttemptOutcome::Transient(FailureKind::ServerError {
            status: status.as_u16(),
        })
    } else {
        AttemptOutcome::Terminal(FailureKind::Rejected {
            status: status.as_u16(),
        })
    }
}

pub fn is_json_content_type(headers: &HeaderMap) -> bool {
    headers
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(|value| value.to_ascii_lowercase().contains(JSON_CONTENT_TYPE))
        .unwrap_or(false)
}

/// Classify a transport failure from reqwest.
///
/// reqwest wraps the resolver and connector errors, so the source chain is
/// inspected for the resolver's wording.
pub fn classify_transport(error: &reqwest::Error) -> FailureKind {
    let detail = error_chain(error);

    if error.is_timeout() {
        return FailureKind::Timeout;
    }

    if is_name_resolution(&detail) {
        return FailureKind::NameResolution { detail };
    }

    if error.is_connect() || is_connection_drop(&detail) {
        return FailureKind::ConnectionFailed { detail };
    }

    FailureKind::Transport { detail }
}

fn is_name_resolution(detail: &str) -> bool {
    let lower = detail.to_lowercase();
    lower.contains("dns error")
        || lower.contains("failed to lookup address")
        || lower.contains("no such host")
        || lower.contains("name or service not known")
}

fn is_connection_drop(detail: &str) -> bool {
    let lower = detail.to_lowercase();
    lower.contains("connection reset") || lower.contains("connection refused")
}

/// Every message in the error's source chain, joined with ": "
pub(crate) fn error_chain(error: &(dyn StdError + 'static)) -> String {
    let mut parts = vec![error.to_string()];
    let mut source = error.source();
    while let Some(inner) = source {
        parts.push(inner.to_string());
        source = inner.source();
    }
    parts.join(": ")
}
