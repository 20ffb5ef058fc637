use chat_core::Exchange;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ExchangeDto {
    pub id: String,
    pub question: String,
    pub answer: String,
    /// RFC 3339
    pub timestamp: String,
}

impl From<Exchange> for ExchangeDto {
    fn from(e: Exchange) -> Self {
        Self {
            id: e.id.to_string(),
            question: e.question,
            answer: e.answer,
            timestamp: e.timestamp.to_rfc3339(),
        }
    }
}
