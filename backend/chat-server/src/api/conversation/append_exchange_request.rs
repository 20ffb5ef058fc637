use serde::Deserialize;
use serde_json::Value;

/// Both fields stay raw JSON so type errors surface as field validation
/// errors instead of a generic body rejection.
#[derive(Debug, Deserialize)]
pub struct AppendExchangeRequest {
    #[serde(default)]
    pub question: Option<Value>,
    #[serde(default)]
    pub answer: Option<Value>,
}
