use thiserror::Error;

#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Config error: {0}")]
    Config(#[from] chat_config::ConfigError),

    #[error("Database error: {0}")]
    Db(#[from] chat_db::DbError),

    #[error("Relay error: {0}")]
    Relay(#[from] chat_relay::RelayError),

    #[error("Invalid chatbot endpoint {endpoint}: {source}")]
    InvalidEndpoint {
        endpoint: String,
        #[source]
        source: url::ParseError,
    },

    #[error("Logger error: {message}")]
    Logger { message: String },

    #[error("Server I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ServerError>;
