use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_TOKEN_TTL_SECS, MAX_TOKEN_TTL_SECS,
    MIN_JWT_SECRET_LENGTH, MIN_TOKEN_TTL_SECS,
};

use serde::Deserialize;

#[derive(Clone, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    /// HS256 signing secret for session tokens. `None` = ephemeral secret.
    pub jwt_secret: Option<String>,
    /// Lifetime of issued session tokens
    pub token_ttl_secs: u64,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: None,
            token_ttl_secs: DEFAULT_TOKEN_TTL_SECS,
        }
    }
}

// Keep the secret out of debug output
impl std::fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthConfig")
            .field("jwt_secret", &self.jwt_secret.as_ref().map(|_| "<redacted>"))
            .field("token_ttl_secs", &self.token_ttl_secs)
            .finish()
    }
}

impl AuthConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if let Some(ref secret) = self.jwt_secret
            && secret.len() < MIN_JWT_SECRET_LENGTH
        {
            return Err(ConfigError::auth(format!(
                "auth.jwt_secret must be at least {} bytes",
                MIN_JWT_SECRET_LENGTH
            )));
        }

        if self.token_ttl_secs < MIN_TOKEN_TTL_SECS || self.token_ttl_secs > MAX_TOKEN_TTL_SECS {
            return Err(ConfigError::auth(format!(
                "auth.token_ttl_secs must be {}-{}, got {}",
                MIN_TOKEN_TTL_SECS, MAX_TOKEN_TTL_SECS, self.token_ttl_secs
            )));
        }

        Ok(())
    }
}
