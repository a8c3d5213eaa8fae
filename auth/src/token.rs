use chrono::DateTime;
use chrono::Duration;
use chrono::TimeZone;
use chrono::Utc;

use crate::jwt::Claims;
use crate::jwt::JwtHandler;
use crate::jwt::TokenError;

/// Authenticated identity carried inside a session token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Principal {
    /// Stable identifier of the user (becomes the `sub` claim)
    pub subject: String,
    /// Login the user authenticated with
    pub login: String,
}

impl Principal {
    pub fn new(subject: impl ToString, login: impl ToString) -> Self {
        Self {
            subject: subject.to_string(),
            login: login.to_string(),
        }
    }
}

/// Signed session token handed back to a caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub access_token: String,
    pub issued_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

/// Issues and verifies time-bounded session tokens for principals.
///
/// The signing secret is fixed for the lifetime of the codec.
pub struct TokenCodec {
    jwt_handler: JwtHandler,
    ttl: Duration,
}

impl TokenCodec {
    /// Create a codec signing with `secret`; tokens live for `ttl`.
    pub fn new(secret: &[u8], ttl: Duration) -> Self {
        Self {
            jwt_handler: JwtHandler::new(secret),
            ttl,
        }
    }

    /// Stamp issued tokens with `iss` and reject tokens from any other issuer.
    pub fn with_issuer(mut self, issuer: impl ToString) -> Self {
        self.jwt_handler = self.jwt_handler.with_issuer(issuer);
        self
    }

    /// Issue a token for `principal`, valid from now.
    ///
    /// # Errors
    /// * `EncodingFailed` - Token signing failed
    pub fn issue(&self, principal: &Principal) -> Result<Token, TokenError> {
        self.issue_at(principal, Utc::now())
    }

    /// Issue a token for `principal` as if the clock read `issued_at`.
    ///
    /// # Errors
    /// * `EncodingFailed` - Token signing failed or the expiry is out of range
    pub fn issue_at(
        &self,
        principal: &Principal,
        issued_at: DateTime<Utc>,
    ) -> Result<Token, TokenError> {
        let mut claims = Claims::for_principal(principal, issued_at, self.ttl)?;
        if let Some(issuer) = self.jwt_handler.issuer() {
            claims = claims.with_issuer(issuer);
        }

        let access_token = self.jwt_handler.encode(&claims)?;

        Ok(Token {
            access_token,
            issued_at: timestamp_to_datetime(claims.iat)?,
            expires_at: timestamp_to_datetime(claims.exp)?,
        })
    }

    /// Verify a token and recover the principal it was issued for.
    ///
    /// # Errors
    /// * `BadSignature` - Signed with a different secret or tampered with
    /// * `Malformed` - Not a parseable token for this issuer
    /// * `Expired` - Current time is at or past the embedded expiry
    pub fn verify(&self, token: &str) -> Result<Principal, TokenError> {
        self.verify_at(token, Utc::now())
    }

    /// Verify a token against an explicit clock reading.
    pub fn verify_at(&self, token: &str, now: DateTime<Utc>) -> Result<Principal, TokenError> {
        let claims: Claims = self.jwt_handler.decode(token)?;

        if claims.is_expired(now.timestamp()) {
            return Err(TokenError::Expired);
        }

        Ok(claims.principal())
    }
}

fn timestamp_to_datetime(seconds: i64) -> Result<DateTime<Utc>, TokenError> {
    Utc.timestamp_opt(seconds, 0)
        .single()
        .ok_or_else(|| TokenError::EncodingFailed(format!("timestamp out of range: {}", seconds)))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &[u8] = b"test_secret_key_at_least_32_bytes!";

    fn codec() -> TokenCodec {
        TokenCodec::new(SECRET, Duration::hours(2)).with_issuer("clinic-api")
    }

    fn principal() -> Principal {
        Principal::new("9b2e4c1a-1111-4e0b-8f6e-2a9d3c7b5e01", "ana.ruiz")
    }

    #[test]
    fn test_issue_and_verify() {
        let codec = codec();

        let token = codec.issue(&principal()).expect("Failed to issue token");
        assert!(!token.access_token.is_empty());
        assert!(token.expires_at > token.issued_at);
        assert_eq!(token.expires_at - token.issued_at, Duration::hours(2));

        let verified = codec
            .verify(&token.access_token)
            .expect("Failed to verify token");
        assert_eq!(verified, principal());
    }

    #[test]
    fn test_verify_expired_token() {
        let codec = codec();
        let issued_at = Utc::now() - Duration::hours(3);

        let token = codec
            .issue_at(&principal(), issued_at)
            .expect("Failed to issue token");

        assert_eq!(codec.verify(&token.access_token), Err(TokenError::Expired));
    }

    #[test]
    fn test_verify_at_exact_expiry_is_expired() {
        let codec = codec();
        let issued_at = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();
        let token = codec
            .issue_at(&principal(), issued_at)
            .expect("Failed to issue token");

        let just_before = token.expires_at - Duration::seconds(1);
        assert_eq!(
            codec.verify_at(&token.access_token, just_before),
            Ok(principal())
        );
        assert_eq!(
            codec.verify_at(&token.access_token, token.expires_at),
            Err(TokenError::Expired)
        );
    }

    #[test]
    fn test_verify_with_other_secret() {
        let token = codec().issue(&principal()).expect("Failed to issue token");
        let other = TokenCodec::new(b"another_secret_key_at_least_32_bytes", Duration::hours(2))
            .with_issuer("clinic-api");

        assert_eq!(
            other.verify(&token.access_token),
            Err(TokenError::BadSignature)
        );
    }

    #[test]
    fn test_verify_tampered_payload() {
        let codec = codec();
        let token = codec.issue(&principal()).expect("Failed to issue token");
        let forged = codec
            .issue(&Principal::new("someone-else", "mallory"))
            .expect("Failed to issue token");

        // Keep the signature, swap in another payload
        let original: Vec<&str> = token.access_token.split('.').collect();
        let swapped: Vec<&str> = forged.access_token.split('.').collect();
        let tampered = format!("{}.{}.{}", original[0], swapped[1], original[2]);

        assert_eq!(codec.verify(&tampered), Err(TokenError::BadSignature));
    }

    #[test]
    fn test_verify_malformed_token() {
        let result = codec().verify("not-a-token");
        assert!(matches!(result, Err(TokenError::Malformed(_))));
    }

    #[test]
    fn test_verify_empty_token() {
        let result = codec().verify("");
        assert!(matches!(result, Err(TokenError::Malformed(_))));
    }

    #[test]
    fn test_issue_with_oversized_ttl_fails_cleanly() {
        let codec = TokenCodec::new(SECRET, Duration::hours(2_400_000_000));

        let result = codec.issue(&principal());

        assert!(matches!(result, Err(TokenError::EncodingFailed(_))));
    }
}
