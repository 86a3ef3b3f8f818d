//! Record trait: repository-owned entities with an assigned identity.

use chrono::{DateTime, Utc};

/// A value owned by a repository.
///
/// The repository assigns the identifier and creation timestamp; callers only
/// provide a validated draft. Records are immutable snapshots once assembled.
pub trait Record: Clone + Send + Sync + 'static {
    /// Strongly-typed record identifier.
    type Id: Copy + Eq + Ord + core::hash::Hash + core::fmt::Debug + From<u64> + Into<u64> + Send + Sync;

    /// Caller-supplied fields used to build a new record.
    type Draft: Send;

    /// Build the record from its assigned id and creation time.
    fn assemble(id: Self::Id, draft: Self::Draft, created_at: DateTime<Utc>) -> Self;

    /// Returns the record identifier.
    fn id(&self) -> Self::Id;
}
