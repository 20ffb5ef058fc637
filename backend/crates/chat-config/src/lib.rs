mod auth_config;
mod config;
mod database_config;
mod error;
mod log_level;
mod logging_config;
mod relay_config;
mod server_config;

#[cfg(test)]
mod tests;

pub use auth_config::AuthConfig;
pub use config::Config;
pub use database_config::DatabaseConfig;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use relay_config::RelayConfig;
pub use server_config::ServerConfig;

const CONFIG_DIR_ENV: &str = "CHAT_CONFIG_DIR";
const CONFIG_DIR_NAME: &str = ".chat";
const CONFIG_FILE_NAME: &str = "config.toml";

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8000;
const MIN_PORT: u16 = 1024;

const DEFAULT_DATABASE_FILENAME: &str = "chat.db";

const MIN_JWT_SECRET_LENGTH: usize = 32;
const DEFAULT_TOKEN_TTL_SECS: u64 = 24 * 60 * 60;
const MIN_TOKEN_TTL_SECS: u64 = 60;
const MAX_TOKEN_TTL_SECS: u64 = 30 * 24 * 60 * 60;

const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";
const DEFAULT_LOG_COLORED: bool = true;

pub const DEFAULT_CHATBOT_ENDPOINT: &str = "https://r-chatbot.vercel.app/chatbot";
