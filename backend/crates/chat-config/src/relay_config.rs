use crate::{ConfigError, ConfigErrorResult, DEFAULT_CHATBOT_ENDPOINT};

use serde::Deserialize;
use url::Url;

/// Upstream chatbot location.
///
/// Only the endpoint is deployable; attempt count, timeout and backoff are
/// fixed by the relay itself.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RelayConfig {
    pub endpoint: String,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            endpoint: String::from(DEFAULT_CHATBOT_ENDPOINT),
        }
    }
}

impl RelayConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        let url = Url::parse(&self.endpoint).map_err(|e| {
            ConfigError::relay(format!("relay.endpoint is not a valid URL: {}", e))
        })?;

        match url.scheme() {
            "http" | "https" => Ok(()),
            other => Err(ConfigError::relay(format!(
                "relay.endpoint must use http or https, got {}",
                other
            ))),
        }
    }
}
