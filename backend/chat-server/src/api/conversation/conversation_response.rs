use crate::ExchangeDto;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ConversationResponse {
    /// Absent until the first exchange is stored
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub exchanges: Vec<ExchangeDto>,
}
