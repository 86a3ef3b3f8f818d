//! Infrastructure adapters (storage).
//!
//! Domain crates never depend on this crate; the transport layer wires the
//! stores together and hands plain snapshots to the calculators.

pub mod repository;

pub use repository::{InMemoryRepository, Repository};
