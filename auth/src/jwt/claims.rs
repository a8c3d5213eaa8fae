use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

use crate::jwt::TokenError;
use crate::token::Principal;

/// Claims carried by a session token.
///
/// `sub` holds the principal's subject identifier, `login` the login it
/// authenticated with. Timestamps are Unix seconds.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    pub sub: String,
    pub login: String,
    pub iat: i64,
    pub exp: i64,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub iss: Option<String>,
}

impl Claims {
    /// Build claims for a principal, valid for `ttl` from `issued_at`.
    ///
    /// # Errors
    /// * `EncodingFailed` - Expiry falls outside the representable date range
    pub fn for_principal(
        principal: &Principal,
        issued_at: DateTime<Utc>,
        ttl: Duration,
    ) -> Result<Self, TokenError> {
        let expiration = issued_at.checked_add_signed(ttl).ok_or_else(|| {
            TokenError::EncodingFailed(format!("token lifetime out of range: {}", ttl))
        })?;

        Ok(Self {
            sub: principal.subject.clone(),
            login: principal.login.clone(),
            iat: issued_at.timestamp(),
            exp: expiration.timestamp(),
            iss: None,
        })
    }

    pub fn with_issuer(mut self, iss: impl ToString) -> Self {
        self.iss = Some(iss.to_string());
        self
    }

    /// A token is expired from its `exp` second onwards.
    pub fn is_expired(&self, current_timestamp: i64) -> bool {
        current_timestamp >= self.exp
    }

    pub fn principal(&self) -> Principal {
        Principal::new(self.sub.clone(), self.login.clone())
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn principal() -> Principal {
        Principal::new("3f0c6a52-7f8e-4d3b-9a51-0c7b1e2d4a10", "ana.ruiz")
    }

    #[test]
    fn test_for_principal() {
        let issued_at = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();
        let claims = Claims::for_principal(&principal(), issued_at, Duration::hours(2)).unwrap();

        assert_eq!(claims.sub, "3f0c6a52-7f8e-4d3b-9a51-0c7b1e2d4a10");
        assert_eq!(claims.login, "ana.ruiz");
        assert_eq!(claims.iat, issued_at.timestamp());
        assert_eq!(claims.exp - claims.iat, 2 * 60 * 60);
        assert!(claims.iss.is_none());
    }

    #[test]
    fn test_with_issuer() {
        let claims = Claims::for_principal(&principal(), Utc::now(), Duration::hours(1))
            .unwrap()
            .with_issuer("clinic-api");
        assert_eq!(claims.iss, Some("clinic-api".to_string()));
    }

    #[test]
    fn test_is_expired() {
        let mut claims = Claims::for_principal(&principal(), Utc::now(), Duration::hours(1)).unwrap();
        claims.exp = 1000;

        assert!(!claims.is_expired(999));
        assert!(claims.is_expired(1000)); // Expired at exactly exp
        assert!(claims.is_expired(1001));
    }

    #[test]
    fn test_principal_round_trip() {
        let claims = Claims::for_principal(&principal(), Utc::now(), Duration::hours(1)).unwrap();
        assert_eq!(claims.principal(), principal());
    }

    #[test]
    fn test_overflowing_lifetime_is_an_error() {
        let ttl = Duration::hours(2_400_000_000);

        let result = Claims::for_principal(&principal(), Utc::now(), ttl);

        assert!(matches!(result, Err(TokenError::EncodingFailed(_))));
    }
}
