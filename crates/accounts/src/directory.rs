use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use chrono::Utc;

use crate::account::{Account, AccountError, NewAccount, normalize_email, required};
use crate::password::{hash_password, verify_password};
use crate::session::{Session, SessionClaims, SessionIssuer};

/// Stores account identities and checks credentials.
pub trait AccountDirectory: Send + Sync {
    fn register(&self, new: NewAccount) -> Result<Account, AccountError>;

    /// Unknown emails and wrong passwords are indistinguishable to the caller.
    fn authenticate(&self, email: &str, password: &str) -> Result<Account, AccountError>;

    fn find(&self, email: &str) -> Option<Account>;
}

impl<D: AccountDirectory + ?Sized> AccountDirectory for Arc<D> {
    fn register(&self, new: NewAccount) -> Result<Account, AccountError> {
        (**self).register(new)
    }

    fn authenticate(&self, email: &str, password: &str) -> Result<Account, AccountError> {
        (**self).authenticate(email, password)
    }

    fn find(&self, email: &str) -> Option<Account> {
        (**self).find(email)
    }
}

/// In-memory account directory for tests/dev (no durability).
#[derive(Debug, Default)]
pub struct InMemoryAccountDirectory {
    accounts: RwLock<HashMap<String, Account>>,
}

impl InMemoryAccountDirectory {
    pub fn new() -> Self {
        Self::default()
    }
}

impl AccountDirectory for InMemoryAccountDirectory {
    fn register(&self, new: NewAccount) -> Result<Account, AccountError> {
        let name = required("nome", new.name.as_deref())?.trim().to_string();
        let email = normalize_email(required("email", new.email.as_deref())?);
        let password = required("senha", new.password.as_deref())?;

        if self.find(&email).is_some() {
            return Err(AccountError::DuplicateEmail);
        }

        // Hash outside the write lock; the uniqueness check is repeated below.
        let password_hash = hash_password(password)?;
        let account = Account {
            name,
            email: email.clone(),
            password_hash,
            registered_at: Utc::now(),
        };

        let mut accounts = self.accounts.write().unwrap_or_else(|e| e.into_inner());
        if accounts.contains_key(&email) {
            return Err(AccountError::DuplicateEmail);
        }
        accounts.insert(email, account.clone());
        tracing::info!(email = %account.email, "account registered");
        Ok(account)
    }

    fn authenticate(&self, email: &str, password: &str) -> Result<Account, AccountError> {
        let email = normalize_email(required("email", Some(email))?);
        required("senha", Some(password))?;

        let Some(account) = self.find(&email) else {
            tracing::info!(email = %email, "login rejected: unknown email");
            return Err(AccountError::InvalidCredentials);
        };

        if !verify_password(password, &account.password_hash)? {
            tracing::info!(email = %email, "login rejected: wrong password");
            return Err(AccountError::InvalidCredentials);
        }
        Ok(account)
    }

    fn find(&self, email: &str) -> Option<Account> {
        let accounts = self.accounts.read().ok()?;
        accounts.get(&normalize_email(email)).cloned()
    }
}

/// Registration, login and session lookup on top of a directory.
#[derive(Debug, Clone)]
pub struct AccountService<D> {
    directory: D,
    sessions: SessionIssuer,
}

impl<D: AccountDirectory> AccountService<D> {
    pub fn new(directory: D, sessions: SessionIssuer) -> Self {
        Self { directory, sessions }
    }

    pub fn register(&self, new: NewAccount) -> Result<Account, AccountError> {
        self.directory.register(new)
    }

    pub fn login(&self, email: &str, password: &str) -> Result<Session, AccountError> {
        let account = self.directory.authenticate(email, password)?;
        self.sessions.issue(&account)
    }

    /// Resolve a bearer token to the account it was issued for.
    pub fn resolve(&self, token: &str) -> Result<(Account, SessionClaims), AccountError> {
        let claims = self.sessions.validate(token)?;
        let account = self
            .directory
            .find(&claims.sub)
            .ok_or_else(|| AccountError::InvalidSession("account no longer exists".to_string()))?;
        Ok((account, claims))
    }
}
