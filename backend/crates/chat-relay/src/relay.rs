use crate::classify::{classify_status, classify_transport, error_chain, is_json_content_type};
use crate::{
    AttemptOutcome, FailureKind, RelayError, RelayEvent, RelayMetrics, RelayPolicy, RelayState,
    Result as RelayErrorResult, transition,
};

use std::panic::Location;
use std::time::Instant;

use error_location::ErrorLocation;
use log::{debug, info, warn};
use serde_json::{Value, json};
use tokio::time::{sleep, timeout};
use url::Url;

/// Pull the `message` field out of a request body.
///
/// It must be a string with at least one non-whitespace character. The
/// message is forwarded exactly as given.
#[track_caller]
pub fn parse_message(value: Option<&Value>) -> RelayErrorResult<&str> {
    match value {
        Some(Value::String(message)) if !message.trim().is_empty() => Ok(message),
        _ => Err(RelayError::bad_request()),
    }
}

/// HTTP relay to the upstream chatbot
pub struct ChatbotRelay {
    client: reqwest::Client,
    endpoint: Url,
    policy: RelayPolicy,
    metrics: RelayMetrics,
}

impl ChatbotRelay {
    #[track_caller]
    pub fn new(endpoint: Url) -> RelayErrorResult<Self> {
        Self::with_policy(endpoint, RelayPolicy::default())
    }

    #[track_caller]
    pub fn with_policy(endpoint: Url, policy: RelayPolicy) -> RelayErrorResult<Self> {
        let client = reqwest::Client::builder()
            .build()
            .map_err(|source| RelayError::Client {
                source,
                location: ErrorLocation::from(Location::caller()),
            })?;

        Ok(Self {
            client,
            endpoint,
            policy,
            metrics: RelayMetrics::new(),
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    pub fn policy(&self) -> &RelayPolicy {
        &self.policy
    }

    /// Forward `message` and return the upstream JSON body unchanged.
    pub async fn relay(&self, message: &str) -> RelayErrorResult<Value> {
        if message.trim().is_empty() {
            self.metrics.rejected();
            return Err(RelayError::bad_request());
        }

        let started = Instant::now();
        let mut state = RelayState::initial();

        loop {
            state = match state {
                RelayState::Attempting { attempt } => {
                    let outcome = self.attempt(message, attempt).await;
                    transition(
                        RelayState::Attempting { attempt },
                        RelayEvent::AttemptFinished(outcome),
                        &self.policy,
                    )
                }
                RelayState::Backoff { attempt, delay } => {
                    info!(
                        "Chatbot attempt {} failed, retrying in {:?}",
                        attempt, delay
                    );
                    self.metrics.retry_scheduled();
                    sleep(delay).await;
                    transition(
                        RelayState::Backoff { attempt, delay },
                        RelayEvent::BackoffElapsed,
                        &self.policy,
                    )
                }
                RelayState::Succeeded(value) => {
                    self.metrics.succeeded(started.elapsed());
                    return Ok(value);
                }
                RelayState::Failed(kind) => {
                    warn!(
                        "Chatbot relay failed after {:?}: {:?}",
                        started.elapsed(),
                        kind
                    );
                    self.metrics.failed(&kind, started.elapsed());
                    return Err(RelayError::from_failure(kind));
                }
            };
        }
    }

    /// One bounded request. The timeout covers sending and reading the body.
    async fn attempt(&self, message: &str, attempt: u32) -> AttemptOutcome {
        debug!("Attempt {} to reach chatbot at {}", attempt, self.endpoint);
        self.metrics.attempt_started();

        match timeout(self.policy.attempt_timeout, self.send(message)).await {
            Ok(outcome) => {
                if let AttemptOutcome::Transient(ref kind) | AttemptOutcome::Terminal(ref kind) =
                    outcome
                {
                    warn!("Attempt {} failed: {}", attempt, kind.label());
                }
                outcome
            }
            Err(_) => {
                warn!(
                    "Attempt {} timed out after {:?}",
                    attempt, self.policy.attempt_timeout
                );
                AttemptOutcome::Transient(FailureKind::Timeout)
            }
        }
    }

    async fn send(&self, message: &str) -> AttemptOutcome {
        let response = match self
            .client
            .post(self.endpoint.clone())
            .json(&json!({ "message": message }))
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => return AttemptOutcome::Transient(classify_transport(&e)),
        };

        let status = response.status();
        if !status.is_success() {
            return classify_status(status);
        }

        let is_json = is_json_content_type(response.headers());

        let body = match response.bytes().await {
            Ok(body) => body,
            Err(e) => return AttemptOutcome::Transient(classify_transport(&e)),
        };

        if !is_json {
            debug!(
                "Non-JSON chatbot response: {}",
                String::from_utf8_lossy(&body)
            );
            return AttemptOutcome::Terminal(FailureKind::InvalidResponse {
                detail: "response content-type is not JSON".to_string(),
            });
        }

        // A JSON content type with an unreadable body counts as a failed attempt
        match serde_json::from_slice::<Value>(&body) {
            Ok(value) => AttemptOutcome::Success(value),
            Err(e) => AttemptOutcome::Transient(FailureKind::Transport {
                detail: format!("undecodable JSON body: {}", error_chain(&e)),
            }),
        }
    }
}
