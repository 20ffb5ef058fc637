use crate::{AuthError, Claims, Result as AuthErrorResult};

use std::panic::Location;

use chrono::Utc;
use error_location::ErrorLocation;
use jsonwebtoken::{Algorithm, EncodingKey, Header, encode};
use serde::Serialize;
use uuid::Uuid;

/// A freshly signed session token
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IssuedToken {
    pub token: String,
    /// Expiration timestamp (Unix)
    pub expires_at: i64,
}

/// Signs HS256 session tokens
pub struct TokenIssuer {
    encoding_key: EncodingKey,
    ttl_secs: i64,
}

impl TokenIssuer {
    pub fn with_hs256(secret: &[u8], ttl_secs: u64) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            ttl_secs: i64::try_from(ttl_secs).unwrap_or(i64::MAX),
        }
    }

    #[track_caller]
    pub fn issue(&self, identity_id: Uuid, email: &str) -> AuthErrorResult<IssuedToken> {
        let iat = Utc::now().timestamp();
        let claims = Claims {
            sub: identity_id.to_string(),
            email: email.to_string(),
            exp: iat.saturating_add(self.ttl_secs),
            iat,
        };

        let token = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|source| AuthError::JwtEncode {
                source,
                location: ErrorLocation::from(Location::caller()),
            })?;

        Ok(IssuedToken {
            token,
            expires_at: claims.exp,
        })
    }
}
