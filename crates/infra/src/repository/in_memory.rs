use std::collections::BTreeMap;
use std::sync::RwLock;

use chrono::Utc;

use gastro_core::Record;

use super::Repository;

#[derive(Debug)]
struct Inner<R> {
    next_id: u64,
    records: BTreeMap<u64, R>,
}

/// In-memory repository for tests/dev (no durability).
///
/// Ids start at 1 and are never reused.
#[derive(Debug)]
pub struct InMemoryRepository<R> {
    inner: RwLock<Inner<R>>,
}

impl<R> InMemoryRepository<R> {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Inner {
                next_id: 1,
                records: BTreeMap::new(),
            }),
        }
    }
}

impl<R> Default for InMemoryRepository<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Record> Repository<R> for InMemoryRepository<R> {
    fn create(&self, draft: R::Draft) -> R {
        // A poisoned lock only means another writer panicked mid-insert; the
        // map itself is still consistent, so keep serving.
        let mut inner = self.inner.write().unwrap_or_else(|e| e.into_inner());
        let id = inner.next_id;
        inner.next_id += 1;

        let record = R::assemble(R::Id::from(id), draft, Utc::now());
        inner.records.insert(id, record.clone());
        tracing::debug!(record_id = id, "record created");
        record
    }

    fn get(&self, id: R::Id) -> Option<R> {
        let key: u64 = id.into();
        let inner = self.inner.read().ok()?;
        inner.records.get(&key).cloned()
    }

    fn list(&self) -> Vec<R> {
        match self.inner.read() {
            Ok(inner) => inner.records.values().cloned().collect(),
            Err(_) => vec![],
        }
    }

    fn count(&self) -> usize {
        self.inner.read().map(|inner| inner.records.len()).unwrap_or(0)
    }
}
