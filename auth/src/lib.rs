//! Authentication utilities library
//!
//! Reusable building blocks for services that log users in:
//! - Password hashing (Argon2id)
//! - JWT encoding and decoding
//! - Session token issuance and verification for a `Principal`
//!
//! Services define their own credential lookup and plug these in.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new().unwrap();
//! let hash = hasher.hash("my_password").unwrap();
//! assert!(hasher.verify("my_password", &hash).unwrap());
//! ```
//!
//! ## Session Tokens
//! ```
//! use auth::{Principal, TokenCodec};
//! use chrono::Duration;
//!
//! let codec = TokenCodec::new(b"secret_key_at_least_32_bytes_long!", Duration::hours(2));
//! let principal = Principal::new("42", "ana.ruiz");
//!
//! let token = codec.issue(&principal).unwrap();
//! let verified = codec.verify(&token.access_token).unwrap();
//! assert_eq!(verified, principal);
//! ```

pub mod jwt;
pub mod password;
pub mod token;

// Re-export commonly used items
pub use jwt::Claims;
pub use jwt::JwtHandler;
pub use jwt::TokenError;
pub use password::PasswordError;
pub use password::PasswordHasher;
pub use token::Principal;
pub use token::Token;
pub use token::TokenCodec;
