pub mod account_service;
pub mod conversation_service;
