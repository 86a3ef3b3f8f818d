//! Record storage abstractions.

pub mod in_memory;

pub use in_memory::InMemoryRepository;

use std::sync::Arc;

use gastro_core::Record;

/// Key/value store keyed by an auto-incrementing identifier.
pub trait Repository<R: Record>: Send + Sync {
    /// Store a validated draft, assigning the next id and the creation time.
    fn create(&self, draft: R::Draft) -> R;

    fn get(&self, id: R::Id) -> Option<R>;

    /// Snapshot of every record, in ascending id order.
    fn list(&self) -> Vec<R>;

    fn count(&self) -> usize {
        self.list().len()
    }
}

impl<R, S> Repository<R> for Arc<S>
where
    R: Record,
    S: Repository<R> + ?Sized,
{
    fn create(&self, draft: R::Draft) -> R {
        (**self).create(draft)
    }

    fn get(&self, id: R::Id) -> Option<R> {
        (**self).get(id)
    }

    fn list(&self) -> Vec<R> {
        (**self).list()
    }

    fn count(&self) -> usize {
        (**self).count()
    }
}
