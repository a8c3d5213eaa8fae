use async_trait::async_trait;
use auth::Principal;
use auth::Token;

use crate::domain::authentication::errors::AuthError;
use crate::domain::authentication::models::Credentials;

/// Port for the login flow.
#[async_trait]
pub trait AuthenticatorPort: Send + Sync + 'static {
    /// Verify credentials and issue a session token.
    ///
    /// # Errors
    /// * `InvalidCredentials` - Login unknown or inactive, or secret wrong
    /// * `Token` - Token signing failed
    /// * `DatabaseError` - Credential lookup failed
    async fn authenticate(&self, credentials: Credentials) -> Result<Token, AuthError>;
}

/// User records keyed by login.
#[async_trait]
pub trait CredentialStore: Send + Sync + 'static {
    /// Check a login/secret pair against stored, active users.
    ///
    /// # Returns
    /// Principal of the matching user
    ///
    /// # Errors
    /// * `InvalidCredentials` - No active user with this login, or secret mismatch
    /// * `Password` - Stored hash is unreadable
    /// * `DatabaseError` - Database operation failed
    async fn verify(&self, credentials: &Credentials) -> Result<Principal, AuthError>;
}
