pub mod append_exchange_request;
pub mod append_exchange_response;
pub mod conversation;
pub mod conversation_response;
pub mod exchange_dto;
