//! `gastro-accounts`: account directory and session tokens.
//!
//! This crate is decoupled from HTTP and from the costing engine; the API
//! layer is its only consumer.

pub mod account;
pub mod directory;
pub mod password;
pub mod session;

pub use account::{Account, AccountError, NewAccount};
pub use directory::{AccountDirectory, AccountService, InMemoryAccountDirectory};
pub use session::{Session, SessionClaims, SessionIssuer};
