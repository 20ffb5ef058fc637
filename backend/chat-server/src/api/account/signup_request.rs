use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct SignupRequest {
    #[serde(default)]
    pub name: Option<String>,
    pub email: String,
    pub password: String,
}
