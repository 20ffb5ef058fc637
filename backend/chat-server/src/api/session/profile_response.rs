use chat_core::Identity;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ProfileResponse {
    pub id: String,
    /// Empty string when no name is set
    pub name: String,
    pub email: String,
}

impl From<Identity> for ProfileResponse {
    fn from(identity: Identity) -> Self {
        Self {
            id: identity.id.to_string(),
            name: identity.name.unwrap_or_default(),
            email: identity.email,
        }
    }
}
