use std::time::Duration;

// Fixed relay policy:
// - 2 attempts total (1 initial + 1 retry)
// - each attempt bounded by 10 seconds, request and body together
// - linear backoff: wait attempt * 1s before the next attempt
const DEFAULT_MAX_ATTEMPTS: u32 = 2;
const DEFAULT_ATTEMPT_TIMEOUT_SECS: u64 = 10;
const DEFAULT_BACKOFF_STEP_MS: u64 = 1000;

/// Retry and timeout settings for one relay call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelayPolicy {
    /// Total attempts, including the first
    pub max_attempts: u32,
    /// Upper bound for a single attempt
    pub attempt_timeout: Duration,
    /// Backoff after attempt `n` is `n * backoff_step`
    pub backoff_step: Duration,
}

impl Default for RelayPolicy {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            attempt_timeout: Duration::from_secs(DEFAULT_ATTEMPT_TIMEOUT_SECS),
            backoff_step: Duration::from_millis(DEFAULT_BACKOFF_STEP_MS),
        }
    }
}

impl RelayPolicy {
    /// Delay to wait after the given (1-based) attempt failed
    pub fn backoff_delay(&self, attempt: u32) -> Duration {
        self.backoff_step.saturating_mul(attempt)
    }

    pub fn has_attempts_left(&self, attempt: u32) -> bool {
        attempt < self.max_attempts
    }
}
