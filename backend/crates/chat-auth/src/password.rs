//! Argon2id password hashing for stored identities.

use crate::{AuthError, Result as AuthErrorResult};

use std::panic::Location;

use argon2::Argon2;
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use error_location::ErrorLocation;

const SALT_LENGTH: usize = 16;

/// Hash a password into a PHC string (algorithm, params and salt included)
#[track_caller]
pub fn hash_password(password: &str) -> AuthErrorResult<String> {
    let salt_bytes = rand::random::<[u8; SALT_LENGTH]>();
    let salt = SaltString::encode_b64(&salt_bytes).map_err(|e| AuthError::PasswordHash {
        message: e.to_string(),
        location: ErrorLocation::from(Location::caller()),
    })?;

    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| AuthError::PasswordHash {
            message: e.to_string(),
            location: ErrorLocation::from(Location::caller()),
        })?;

    Ok(hash.to_string())
}

/// Check a password against a stored PHC string.
///
/// A mismatch is `InvalidCredentials`; a malformed stored hash is a
/// `PasswordHash` error.
#[track_caller]
pub fn verify_password(password: &str, stored_hash: &str) -> AuthErrorResult<()> {
    let parsed = PasswordHash::new(stored_hash).map_err(|e| AuthError::PasswordHash {
        message: e.to_string(),
        location: ErrorLocation::from(Location::caller()),
    })?;

    Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .map_err(|_| AuthError::InvalidCredentials {
            location: ErrorLocation::from(Location::caller()),
        })
}
