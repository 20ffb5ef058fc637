use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One question/answer pair in a conversation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Exchange {
    pub id: Uuid,
    pub question: String,
    pub answer: String,
    pub timestamp: DateTime<Utc>,
}

impl Exchange {
    /// Build a new exchange stamped with the current time.
    ///
    /// Callers pass already validated and normalized text; see
    /// [`crate::validate_question`] and [`crate::Answer::into_text`].
    pub fn new(question: String, answer: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            question,
            answer,
            timestamp: Utc::now(),
        }
    }
}
