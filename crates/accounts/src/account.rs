use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A registered operator account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    pub name: String,
    /// Normalised (trimmed, lowercase) email; unique within the directory.
    pub email: String,
    /// Argon2id PHC string. Never serialized.
    #[serde(skip_serializing, default)]
    pub password_hash: String,
    pub registered_at: DateTime<Utc>,
}

/// Registration request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct NewAccount {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

impl NewAccount {
    pub fn new(name: impl Into<String>, email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            email: Some(email.into()),
            password: Some(password.into()),
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AccountError {
    #[error("validation failed: {0}")]
    Validation(String),

    #[error("email already registered")]
    DuplicateEmail,

    #[error("invalid credentials")]
    InvalidCredentials,

    #[error("session rejected: {0}")]
    InvalidSession(String),

    /// Password hashing or token signing failed (never caused by the caller).
    #[error("internal error: {0}")]
    Internal(String),
}

impl AccountError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}

/// Trim and lowercase an email so lookups are case-insensitive.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

pub(crate) fn required<'a>(field: &str, value: Option<&'a str>) -> Result<&'a str, AccountError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(AccountError::validation(format!("{field} is required"))),
    }
}
