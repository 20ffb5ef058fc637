use crate::FailureKind;

use std::time::Duration;

use metrics::{counter, histogram};

/// Metrics emitted by the relay. Recorded through the `metrics` facade;
/// nothing is exported unless the host process installs a recorder.
#[derive(Clone)]
pub struct RelayMetrics {
    prefix: &'static str,
}

impl RelayMetrics {
    pub fn new() -> Self {
        Self {
            prefix: "chat_relay",
        }
    }

    pub fn attempt_started(&self) {
        counter!(format!("{}.attempts", self.prefix)).increment(1);
    }

    pub fn retry_scheduled(&self) {
        counter!(format!("{}.retries", self.prefix)).increment(1);
    }

    pub fn succeeded(&self, elapsed: Duration) {
        counter!(format!("{}.outcomes.success", self.prefix)).increment(1);
        self.latency(elapsed);
    }

    pub fn failed(&self, kind: &FailureKind, elapsed: Duration) {
        counter!(format!("{}.outcomes.{}", self.prefix, kind.label())).increment(1);
        self.latency(elapsed);
    }

    /// Message rejected before any upstream call
    pub fn rejected(&self) {
        counter!(format!("{}.outcomes.bad_request", self.prefix)).increment(1);
    }

    fn latency(&self, elapsed: Duration) {
        histogram!(format!("{}.latency_ms", self.prefix)).record(elapsed.as_millis() as f64);
    }
}

impl Default for RelayMetrics {
    fn default() -> Self {
        Self::new()
    }
}
