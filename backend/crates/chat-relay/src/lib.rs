//! Forwards a single chat message to the upstream chatbot service.
//!
//! Each call runs a small retry state machine ([`RelayState`]) driven by a
//! fixed [`RelayPolicy`]: a bounded number of attempts, each under its own
//! timeout, with linear backoff in between. Every failure ends up as one
//! [`RelayError`] variant carrying the HTTP status the caller should see.

pub mod classify;
pub mod error;
pub mod metrics;
pub mod policy;
pub mod relay;
pub mod state;


pub use error::{RelayError, Result};
pub use metrics::RelayMetrics;
pub use policy::RelayPolicy;
pub use relay::{ChatbotRelay, parse_message};
pub use state::{AttemptOutcome, FailureKind, RelayEvent, RelayState, transition};
