use crate::ExchangeDto;

use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AppendExchangeResponse {
    pub success: bool,
    pub exchange: ExchangeDto,
    pub exchange_id: String,
}
