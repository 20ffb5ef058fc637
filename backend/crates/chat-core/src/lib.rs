pub mod error;
pub mod models;
pub mod validation;

#[cfg(test)]
mod tests;

pub use error::{CoreError, Result};
pub use error_location::ErrorLocation;
pub use models::answer::Answer;
pub use models::conversation_record::ConversationRecord;
pub use models::exchange::Exchange;
pub use models::identity::Identity;
pub use validation::{normalize_name, validate_email, validate_password, validate_question};
