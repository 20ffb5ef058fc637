pub mod error;
pub mod repositories;

#[cfg(test)]
mod tests;

pub use error::{DbError, Result};
pub use repositories::conversation_repository::ConversationRepository;
pub use repositories::identity_repository::IdentityRepository;

use sqlx::migrate::Migrator;

/// Schema migrations, embedded at compile time
pub static MIGRATOR: Migrator = sqlx::migrate!("./migrations");
