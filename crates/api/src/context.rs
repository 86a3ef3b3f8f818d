use chrono::{DateTime, Utc};

use gastro_accounts::Account;

/// Session context for a request (the account a bearer token was issued for).
///
/// Only present on routes behind [`crate::middleware::session_middleware`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionContext {
    account: Account,
    expires_at: DateTime<Utc>,
}

impl SessionContext {
    pub fn new(account: Account, expires_at: DateTime<Utc>) -> Self {
        Self { account, expires_at }
    }

    pub fn account(&self) -> &Account {
        &self.account
    }

    pub fn expires_at(&self) -> DateTime<Utc> {
        self.expires_at
    }
}
