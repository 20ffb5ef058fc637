pub mod api;
pub mod app_state;
pub mod database;
pub mod error;
pub mod health;
pub mod logger;
pub mod routes;
pub mod services;
pub mod shutdown;

#[cfg(test)]
mod tests;

pub use api::{
    account::{
        account::{login, signup},
        login_request::LoginRequest,
        signup_request::SignupRequest,
    },
    chat::chat::relay_message,
    conversation::{
        append_exchange_request::AppendExchangeRequest,
        append_exchange_response::AppendExchangeResponse,
        conversation::{append_exchange, clear_conversation, list_conversation},
        conversation_response::ConversationResponse,
        exchange_dto::ExchangeDto,
    },
    error::ApiError,
    error::Result as ApiResult,
    extractors::{current_identity::CurrentIdentity, json::ApiJson},
    session::{
        profile_response::ProfileResponse,
        session::{delete_account, get_profile, update_profile},
        update_profile_request::UpdateProfileRequest,
    },
    success_response::SuccessResponse,
};
pub use app_state::AppState;
pub use services::{account_service::AccountService, conversation_service::ConversationService};
pub use shutdown::{ShutdownCoordinator, ShutdownGuard};

pub use crate::routes::build_router;
