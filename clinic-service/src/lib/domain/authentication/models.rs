use std::fmt;

use crate::domain::errors::BlankFieldError;

/// Login name a user authenticates with
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Login(String);

impl Login {
    pub fn new(login: String) -> Result<Self, BlankFieldError> {
        BlankFieldError::check(login).map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Login {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Plaintext password; redacted from `Debug` output.
///
/// Not trimmed: surrounding whitespace is part of the secret.
#[derive(Clone, PartialEq, Eq)]
pub struct Secret(String);

impl Secret {
    pub fn new(secret: String) -> Result<Self, BlankFieldError> {
        if secret.trim().is_empty() {
            Err(BlankFieldError)
        } else {
            Ok(Self(secret))
        }
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Secret(***)")
    }
}

/// Login/secret pair presented for a single authentication attempt
#[derive(Debug, Clone)]
pub struct Credentials {
    pub login: Login,
    pub secret: Secret,
}

impl Credentials {
    pub fn new(login: Login, secret: Secret) -> Self {
        Self { login, secret }
    }
}
