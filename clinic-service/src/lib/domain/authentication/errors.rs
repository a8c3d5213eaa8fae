use auth::PasswordError;
use auth::TokenError;
use thiserror::Error;

/// Authentication operation errors.
#[derive(Debug, Clone, Error)]
pub enum AuthError {
    /// Unknown login, inactive user or wrong secret; deliberately indistinguishable
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Password error: {0}")]
    Password(#[from] PasswordError),

    #[error("Token error: {0}")]
    Token(#[from] TokenError),

    #[error("Database error: {0}")]
    DatabaseError(String),
}
