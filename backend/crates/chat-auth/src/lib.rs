pub mod bearer;
pub mod claims;
pub mod error;
pub mod jwt_validator;
pub mod password;
pub mod token_issuer;

pub use bearer::bearer_token;
pub use claims::Claims;
pub use error::{AuthError, Result};
pub use jwt_validator::JwtValidator;
pub use password::{hash_password, verify_password};
pub use token_issuer::{IssuedToken, TokenIssuer};


/// Length of a generated signing secret in bytes
pub const EPHEMERAL_SECRET_LENGTH: usize = 32;

/// Random signing secret for deployments that did not configure one.
///
/// Tokens signed with it stop validating when the process restarts.
pub fn generate_ephemeral_secret() -> Vec<u8> {
    rand::random::<[u8; EPHEMERAL_SECRET_LENGTH]>().to_vec()
}
