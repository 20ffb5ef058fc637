pub mod account;
pub mod login_request;
pub mod signup_request;
