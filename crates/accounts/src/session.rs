//! HS256-signed session tokens.
//!
//! A session token is a JWT whose subject is the account email. Every token
//! carries a random `jti`, so two logins in the same second still produce
//! distinct tokens.

use chrono::{DateTime, Duration, TimeZone, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::account::{Account, AccountError};

/// Claims embedded in every session token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionClaims {
    /// Account email.
    pub sub: String,
    /// Display name at login time.
    pub name: String,
    /// Issued-at (UTC Unix timestamp).
    pub iat: i64,
    /// Expiration (UTC Unix timestamp).
    pub exp: i64,
    pub jti: String,
}

impl SessionClaims {
    pub fn expires_at(&self) -> DateTime<Utc> {
        Utc.timestamp_opt(self.exp, 0).single().unwrap_or(DateTime::<Utc>::MIN_UTC)
    }
}

/// A freshly issued session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub token: String,
    pub account: Account,
    pub expires_at: DateTime<Utc>,
}

/// Signs and validates session tokens with a shared secret.
#[derive(Clone)]
pub struct SessionIssuer {
    encoding: EncodingKey,
    decoding: DecodingKey,
    ttl: Duration,
}

impl core::fmt::Debug for SessionIssuer {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("SessionIssuer").field("ttl", &self.ttl).finish_non_exhaustive()
    }
}

impl SessionIssuer {
    pub fn new(secret: &[u8], ttl: Duration) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
            ttl,
        }
    }

    pub fn issue(&self, account: &Account) -> Result<Session, AccountError> {
        self.issue_at(account, Utc::now())
    }

    /// Issue a token as if the current time were `now`.
    pub fn issue_at(&self, account: &Account, now: DateTime<Utc>) -> Result<Session, AccountError> {
        let expires_at = now
            .checked_add_signed(self.ttl)
            .ok_or_else(|| AccountError::Internal("session expiry is out of range".to_string()))?;
        let claims = SessionClaims {
            sub: account.email.clone(),
            name: account.name.clone(),
            iat: now.timestamp(),
            exp: expires_at.timestamp(),
            jti: Uuid::new_v4().to_string(),
        };

        let token = encode(&Header::default(), &claims, &self.encoding)
            .map_err(|e| AccountError::Internal(format!("token signing failed: {e}")))?;

        Ok(Session {
            token,
            account: account.clone(),
            expires_at,
        })
    }

    /// Verify signature and expiry, returning the embedded claims.
    pub fn validate(&self, token: &str) -> Result<SessionClaims, AccountError> {
        let data = decode::<SessionClaims>(token, &self.decoding, &Validation::default())
            .map_err(|e| AccountError::InvalidSession(e.to_string()))?;
        let claims = data.claims;
        if claims.exp <= claims.iat {
            return Err(AccountError::InvalidSession(
                "invalid token time window (exp <= iat)".to_string(),
            ));
        }
        Ok(claims)
    }
}
