pub mod account;
pub mod chat;
pub mod conversation;
pub mod error;
pub mod extractors;
pub mod session;
pub mod success_response;
