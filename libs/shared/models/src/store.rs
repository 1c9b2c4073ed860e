use tracing::{debug, warn};

use crate::error::{RecordKind, StoreError};

/// Capacity of every collection unless configured otherwise.
pub const DEFAULT_CAPACITY: usize = 15;

/// A value that can live in a [`RecordStore`].
///
/// Ids are caller-assigned and never checked for uniqueness.
pub trait Record: Clone {
    const KIND: RecordKind;

    fn id(&self) -> i32;
}

/// Ordered, capacity-bounded collection of one record kind.
///
/// Insertion order is the iteration order. Removal shifts later records one
/// position earlier so the remainder keeps its relative order.
#[derive(Debug, Clone)]
pub struct RecordStore<T: Record> {
    records: Vec<T>,
    capacity: usize,
}

impl<T: Record> RecordStore<T> {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// `capacity` is a logical limit only; storage grows as records arrive.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            records: Vec::new(),
            capacity,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.records.len() >= self.capacity
    }

    /// Append a record. Fails without touching the collection when full.
    pub fn add(&mut self, record: T) -> Result<(), StoreError> {
        if self.is_full() {
            warn!("{} store full ({}), rejecting id {}", T::KIND, self.capacity, record.id());
            return Err(StoreError::CapacityExceeded {
                kind: T::KIND,
                capacity: self.capacity,
            });
        }

        debug!("Adding {} with id {}", T::KIND, record.id());
        self.records.push(record);
        Ok(())
    }

    /// First record (in current order) whose id matches.
    pub fn find_by_id(&self, id: i32) -> Option<&T> {
        self.records.iter().find(|r| r.id() == id)
    }

    /// Remove the first record whose id matches and return it.
    pub fn remove_by_id(&mut self, id: i32) -> Result<T, StoreError> {
        let Some(index) = self.records.iter().position(|r| r.id() == id) else {
            warn!("{} with id {} not found", T::KIND, id);
            return Err(StoreError::NotFound { kind: T::KIND, id });
        };

        debug!("Removing {} with id {} at position {}", T::KIND, id, index);
        Ok(self.records.remove(index))
    }

    /// Snapshot of the current contents in current order.
    pub fn list_all(&self) -> Vec<T> {
        self.records.clone()
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.records.iter()
    }
}

impl<T: Record> Default for RecordStore<T> {
    fn default() -> Self {
        Self::new()
    }
}
