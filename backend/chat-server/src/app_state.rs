use crate::ShutdownCoordinator;

use chat_auth::{JwtValidator, TokenIssuer};
use chat_relay::ChatbotRelay;

use std::sync::Arc;

use sqlx::SqlitePool;

/// Shared state handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub relay: Arc<ChatbotRelay>,
    pub jwt_validator: Arc<JwtValidator>,
    pub token_issuer: Arc<TokenIssuer>,
    pub shutdown: ShutdownCoordinator,
}

impl AppState {
    /// Sign tokens and verify them with the same HS256 secret
    pub fn new(
        pool: SqlitePool,
        relay: ChatbotRelay,
        jwt_secret: &[u8],
        token_ttl_secs: u64,
    ) -> Self {
        Self {
            pool,
            relay: Arc::new(relay),
            jwt_validator: Arc::new(JwtValidator::with_hs256(jwt_secret)),
            token_issuer: Arc::new(TokenIssuer::with_hs256(jwt_secret, token_ttl_secs)),
            shutdown: ShutdownCoordinator::new(),
        }
    }
}
