use crate::{ApiError, ApiResult, AppState};

use chat_auth::{IssuedToken, TokenIssuer, hash_password, verify_password};
use chat_core::{Identity, normalize_name, validate_email, validate_password};
use chat_db::IdentityRepository;

use std::sync::Arc;

use tokio::task;
use uuid::Uuid;

/// Account lifecycle: signup, login, rename, delete
pub struct AccountService {
    identities: IdentityRepository,
    token_issuer: Arc<TokenIssuer>,
}

impl AccountService {
    pub fn from_state(state: &AppState) -> Self {
        Self {
            identities: IdentityRepository::new(state.pool.clone()),
            token_issuer: Arc::clone(&state.token_issuer),
        }
    }

    pub async fn signup(
        &self,
        name: Option<&str>,
        email: &str,
        password: &str,
    ) -> ApiResult<Identity> {
        let email = validate_email(email)?;
        validate_password(password)?;
        let name = normalize_name(name)?;

        let password_hash = hash_off_thread(password).await?;
        let identity = Identity::new(email, name, password_hash);
        self.identities.create(&identity).await?;

        Ok(identity)
    }

    /// Check credentials and issue a session token.
    ///
    /// Unknown email and wrong password produce the same 401.
    pub async fn login(&self, email: &str, password: &str) -> ApiResult<IssuedToken> {
        let email = validate_email(email)?;
        validate_password(password)?;

        let identity = self
            .identities
            .find_by_email(&email)
            .await?
            .ok_or_else(|| ApiError::unauthorized("Invalid email or password"))?;

        verify_off_thread(password, &identity.password_hash).await?;

        Ok(self.token_issuer.issue(identity.id, &identity.email)?)
    }

    /// Set the display name; blank clears it
    pub async fn rename(&self, identity_id: Uuid, name: Option<&str>) -> ApiResult<()> {
        let name = normalize_name(name)?;

        if !self
            .identities
            .update_name(identity_id, name.as_deref())
            .await?
        {
            return Err(ApiError::not_found("User not found"));
        }

        Ok(())
    }

    pub async fn delete(&self, identity_id: Uuid) -> ApiResult<()> {
        if !self.identities.delete(identity_id).await? {
            return Err(ApiError::not_found("User not found"));
        }

        Ok(())
    }
}

/// Argon2 hashing on the blocking pool
pub(crate) async fn hash_off_thread(password: &str) -> ApiResult<String> {
    let password = password.to_string();
    let hashed = task::spawn_blocking(move || hash_password(&password))
        .await
        .map_err(|e| ApiError::internal(format!("Password hashing task failed: {}", e)))?;

    Ok(hashed?)
}

/// Argon2 verification on the blocking pool
pub(crate) async fn verify_off_thread(password: &str, stored_hash: &str) -> ApiResult<()> {
    let password = password.to_string();
    let stored_hash = stored_hash.to_string();
    let verified = task::spawn_blocking(move || verify_password(&password, &stored_hash))
        .await
        .map_err(|e| ApiError::internal(format!("Password check task failed: {}", e)))?;

    Ok(verified?)
}
