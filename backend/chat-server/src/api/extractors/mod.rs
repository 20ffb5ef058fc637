pub mod current_identity;
pub mod json;
