use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Answer half of an exchange as it arrives at the API boundary.
///
/// Clients usually send the chatbot reply as text, but a reply is whatever
/// JSON the upstream produced, so structured values are accepted too and
/// normalized to their compact JSON text before they are stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Answer {
    Text(String),
    Structured(Value),
}

impl Answer {
    /// Normalize to the text form that is persisted.
    ///
    /// Text is trimmed. Structured values are serialized (`42` becomes `"42"`).
    /// `null` and values that normalize to an empty string are rejected.
    #[track_caller]
    pub fn into_text(self) -> CoreErrorResult<String> {
        let text = match self {
            Answer::Text(text) => text.trim().to_string(),
            Answer::Structured(Value::Null) => {
                return Err(CoreError::validation("answer", "Answer is required"));
            }
            Answer::Structured(value) => {
                serde_json::to_string(&value).map_err(|source| CoreError::AnswerSerialization {
                    source,
                    location: ErrorLocation::from(Location::caller()),
                })?
            }
        };

        if text.is_empty() {
            return Err(CoreError::validation("answer", "Answer cannot be empty"));
        }

        Ok(text)
    }
}

impl From<Value> for Answer {
    fn from(value: Value) -> Self {
        match value {
            Value::String(text) => Answer::Text(text),
            other => Answer::Structured(other),
        }
    }
}

impl From<&str> for Answer {
    fn from(text: &str) -> Self {
        Answer::Text(text.to_string())
    }
}
