use crate::RelayPolicy;

use std::time::Duration;

use serde_json::Value;

/// Why an attempt (or the whole relay) failed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    /// Upstream answered 429
    RateLimited,
    /// Upstream answered a non-success status below 500 (other than 429)
    Rejected { status: u16 },
    /// Upstream answered 5xx
    ServerError { status: u16 },
    /// Success status but the content type was not JSON
    InvalidResponse { detail: String },
    /// The attempt did not finish within the attempt timeout
    Timeout,
    /// TCP connect failed, was refused or reset
    ConnectionFailed { detail: String },
    /// The upstream host name did not resolve
    NameResolution { detail: String },
    /// Any other transport failure
    Transport { detail: String },
}

impl FailureKind {
    /// Short label used for logs and metrics
    pub fn label(&self) -> &'static str {
        match self {
            Self::RateLimited => "rate_limited",
            Self::Rejected { .. } => "rejected",
            Self::ServerError { .. } => "server_error",
            Self::InvalidResponse { .. } => "invalid_response",
            Self::Timeout => "timeout",
            Self::ConnectionFailed { .. } => "connection_failed",
            Self::NameResolution { .. } => "name_resolution",
            Self::Transport { .. } => "transport",
        }
    }
}

/// Result of a single attempt against the upstream
#[derive(Debug, Clone, PartialEq)]
pub enum AttemptOutcome {
    Success(Value),
    /// Worth another attempt if the budget allows
    Transient(FailureKind),
    /// Surfaced immediately
    Terminal(FailureKind),
}

#[derive(Debug, Clone, PartialEq)]
pub enum RelayState {
    Attempting { attempt: u32 },
    Backoff { attempt: u32, delay: Duration },
    Succeeded(Value),
    Failed(FailureKind),
}

#[derive(Debug, Clone, PartialEq)]
pub enum RelayEvent {
    AttemptFinished(AttemptOutcome),
    BackoffElapsed,
}

impl RelayState {
    pub fn initial() -> Self {
        Self::Attempting { attempt: 1 }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Succeeded(_) | Self::Failed(_))
    }
}

/// Advance the relay state machine.
///
/// Pure: the driver performs the I/O the returned state asks for (run an
/// attempt, sleep) and feeds the result back in. Events that do not apply to
/// the current state leave it unchanged, as do terminal states.
pub fn transition(state: RelayState, event: RelayEvent, policy: &RelayPolicy) -> RelayState {
    match (state, event) {
        (RelayState::Attempting { .. }, RelayEvent::AttemptFinished(AttemptOutcome::Success(value))) => {
            RelayState::Succeeded(value)
        }
        (RelayState::Attempting { .. }, RelayEvent::AttemptFinished(AttemptOutcome::Terminal(kind))) => {
            RelayState::Failed(kind)
        }
        (RelayState::Attempting { attempt }, RelayEvent::AttemptFinished(AttemptOutcome::Transient(kind))) => {
            if policy.has_attempts_left(attempt) {
                RelayState::Backoff {
                    attempt,
                    delay: policy.backoff_delay(attempt),
                }
            } else {
                RelayState::Failed(kind)
            }
        }
        (RelayState::Backoff { attempt, .. }, RelayEvent::BackoffElapsed) => {
            RelayState::Attempting {
                attempt: attempt.saturating_add(1),
            }
        }
        (state, _) => state,
    }
}
