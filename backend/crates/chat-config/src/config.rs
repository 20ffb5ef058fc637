use crate::{
    AuthConfig, CONFIG_DIR_ENV, CONFIG_DIR_NAME, CONFIG_FILE_NAME, ConfigError, ConfigErrorResult,
    DatabaseConfig, LoggingConfig, RelayConfig, ServerConfig,
};

use std::path::{Path, PathBuf};

use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub auth: AuthConfig,
    pub logging: LoggingConfig,
    pub relay: RelayConfig,
}

impl Config {
    /// Load config.
    ///
    /// Loading order:
    /// 1. Check for CHAT_CONFIG_DIR env var, else use ./.chat/
    /// 2. Auto-create config directory if it doesn't exist
    /// 3. Load config.toml if it exists, else use defaults
    /// 4. Apply CHAT_* environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_dir = Self::config_dir()?;

        if !config_dir.exists() {
            std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.clone(),
                source: e,
            })?;
        }

        let config_path = config_dir.join(CONFIG_FILE_NAME);

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    /// Load and parse TOML file with detailed error context.
    fn load_toml(path: &Path) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Get the config directory.
    /// Priority: CHAT_CONFIG_DIR env var > ./.chat/ (relative to cwd)
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(CONFIG_DIR_NAME))
    }

    /// Validate all configuration.
    /// Call after load() to catch all errors at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.server.validate()?;
        self.auth.validate()?;
        self.relay.validate()?;

        match self.database.url {
            Some(ref url) if !url.starts_with("sqlite:") => {
                return Err(ConfigError::database(format!(
                    "database.url must be a sqlite: connection string, got {}",
                    url
                )));
            }
            Some(_) => {}
            None => {
                let db_path = Path::new(&self.database.path);
                if db_path.is_absolute() || self.database.path.contains("..") {
                    return Err(ConfigError::database(
                        "database.path must be relative and cannot contain '..'",
                    ));
                }
            }
        }

        Ok(())
    }

    /// The store connection string.
    pub fn database_url(&self) -> ConfigErrorResult<String> {
        if let Some(ref url) = self.database.url {
            return Ok(url.clone());
        }

        let path = Self::config_dir()?.join(&self.database.path);
        Ok(format!("sqlite://{}", path.display()))
    }

    /// Absolute path of the log file, if file logging is configured.
    pub fn log_file_path(&self) -> ConfigErrorResult<Option<PathBuf>> {
        let Some(ref filename) = self.logging.file else {
            return Ok(None);
        };

        let log_dir = Self::config_dir()?.join(&self.logging.dir);
        std::fs::create_dir_all(&log_dir).map_err(|e| ConfigError::Io {
            path: log_dir.clone(),
            source: e,
        })?;

        Ok(Some(log_dir.join(filename)))
    }

    /// Get bind address as string.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Log configuration summary (NEVER logs secrets).
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!("  server: {}:{}", self.server.host, self.server.port);

        match self.database.url {
            Some(_) => info!("  database: <connection string>"),
            None => info!("  database: {}", self.database.path),
        }

        info!(
            "  auth: secret={}, token_ttl={}s",
            if self.auth.jwt_secret.is_some() {
                "configured"
            } else {
                "ephemeral"
            },
            self.auth.token_ttl_secs
        );

        info!(
            "  logging: {} (colored: {})",
            *self.logging.level, self.logging.colored
        );

        info!("  relay: {}", self.relay.endpoint);
    }

    fn apply_env_overrides(&mut self) {
        // Server
        Self::apply_env_string("CHAT_SERVER_HOST", &mut self.server.host);
        Self::apply_env_parse("CHAT_SERVER_PORT", &mut self.server.port);

        // Database
        Self::apply_env_option_string("CHAT_DATABASE_URL", &mut self.database.url);
        Self::apply_env_string("CHAT_DATABASE_PATH", &mut self.database.path);

        // Auth
        Self::apply_env_option_string("CHAT_AUTH_JWT_SECRET", &mut self.auth.jwt_secret);
        Self::apply_env_parse("CHAT_AUTH_TOKEN_TTL_SECS", &mut self.auth.token_ttl_secs);

        // Logging
        Self::apply_env_parse("CHAT_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("CHAT_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("CHAT_LOG_FILE", &mut self.logging.file);

        // Relay
        Self::apply_env_string("CHAT_RELAY_ENDPOINT", &mut self.relay.endpoint);
    }

    /// Helper: Apply environment variable override for String values
    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Helper: Apply environment variable override for bool values (accepts "true"/"1")
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    /// Helper: Apply environment variable override for parseable values
    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    /// Helper: Apply environment variable override for Option<String> values
    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }
}
