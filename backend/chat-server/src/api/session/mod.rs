pub mod profile_response;
pub mod session;
pub mod update_profile_request;
