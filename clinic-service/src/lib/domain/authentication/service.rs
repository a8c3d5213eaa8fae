use std::sync::Arc;

use async_trait::async_trait;
use auth::Token;
use auth::TokenCodec;

use crate::domain::authentication::errors::AuthError;
use crate::domain::authentication::models::Credentials;
use crate::domain::authentication::ports::AuthenticatorPort;
use crate::domain::authentication::ports::CredentialStore;

/// Authentication coordinator: one credential check, then token issuance.
pub struct Authenticator<CS>
where
    CS: CredentialStore,
{
    credential_store: Arc<CS>,
    token_codec: Arc<TokenCodec>,
}

impl<CS> Authenticator<CS>
where
    CS: CredentialStore,
{
    /// # Arguments
    /// * `credential_store` - Where logins and password hashes live
    /// * `token_codec` - Signs tokens for verified principals
    pub fn new(credential_store: Arc<CS>, token_codec: Arc<TokenCodec>) -> Self {
        Self {
            credential_store,
            token_codec,
        }
    }
}

#[async_trait]
impl<CS> AuthenticatorPort for Authenticator<CS>
where
    CS: CredentialStore,
{
    async fn authenticate(&self, credentials: Credentials) -> Result<Token, AuthError> {
        let principal = match self.credential_store.verify(&credentials).await {
            Ok(principal) => principal,
            Err(AuthError::InvalidCredentials) => {
                tracing::warn!(login = %credentials.login, "Authentication rejected");
                return Err(AuthError::InvalidCredentials);
            }
            Err(e) => {
                tracing::error!(login = %credentials.login, error = %e, "Credential check failed");
                return Err(e);
            }
        };

        let token = self.token_codec.issue(&principal)?;

        tracing::info!(
            login = %principal.login,
            subject = %principal.subject,
            expires_at = %token.expires_at,
            "Session token issued"
        );

        Ok(token)
    }
}
