use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct UpdateProfileRequest {
    /// Blank or absent clears the name
    #[serde(default)]
    pub name: Option<String>,
}
