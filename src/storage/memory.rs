//! In-memory collection
//!
//! Vec-backed fake for tests and benchmarks. Clone-friendly via Arc so a test
//! can keep a handle and inspect what a store persisted.

use std::sync::Arc;

use parking_lot::RwLock;

use crate::error::Result;

use super::Collection;

/// In-memory collection of `T`
#[derive(Debug)]
pub struct MemoryCollection<T> {
    records: Arc<RwLock<Vec<T>>>,
}

impl<T> Clone for MemoryCollection<T> {
    fn clone(&self) -> Self {
        Self {
            records: Arc::clone(&self.records),
        }
    }
}

impl<T> Default for MemoryCollection<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> MemoryCollection<T> {
    /// Create an empty collection
    pub fn new() -> Self {
        Self::with_records(Vec::new())
    }

    /// Create a collection seeded with `records`
    pub fn with_records(records: Vec<T>) -> Self {
        Self {
            records: Arc::new(RwLock::new(records)),
        }
    }

    /// Number of stored records
    pub fn len(&self) -> usize {
        self.records.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.read().is_empty()
    }
}

impl<T: Clone> MemoryCollection<T> {
    /// Copy of the stored records
    pub fn snapshot(&self) -> Vec<T> {
        self.records.read().clone()
    }
}

impl<T: Clone> Collection<T> for MemoryCollection<T> {
    fn load_all(&self) -> Result<Vec<T>> {
        Ok(self.snapshot())
    }

    fn save_all(&self, records: &[T]) -> Result<()> {
        *self.records.write() = records.to_vec();
        Ok(())
    }
}
