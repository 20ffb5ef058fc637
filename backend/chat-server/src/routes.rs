use crate::{
    AppState, append_exchange, clear_conversation, delete_account, get_profile, health,
    list_conversation, login, relay_message, signup, update_profile,
};

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::cors::{Any, CorsLayer};

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Chatbot relay (anonymous)
        .route("/chat", post(relay_message))
        // Conversation history of the signed-in identity
        .route(
            "/conversation",
            get(list_conversation)
                .post(append_exchange)
                .delete(clear_conversation),
        )
        // Profile of the signed-in identity
        .route(
            "/session",
            get(get_profile).post(update_profile).delete(delete_account),
        )
        // Accounts
        .route("/signup", post(signup))
        .route("/login", post(login))
        // Health check endpoints
        .route("/health", get(health::health_check))
        .route("/live", get(health::liveness_check))
        .route("/ready", get(health::readiness_check))
        .with_state(state)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}
