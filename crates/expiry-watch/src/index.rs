//! Ordered expiration index

use std::collections::{BTreeMap, HashSet};

/// Outcome of removing an id from the index
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoveOutcome {
    /// The id was present and has been removed
    Removed,
    /// No entry exists for the timestamp
    KeyMissing,
    /// The timestamp exists but does not hold the id
    IdMissing,
}

/// Ordered map of expiration timestamp -> ids expiring at that second
///
/// A timestamp is present only while its id set is non-empty, so
/// [`TimeIndex::minimum`] always yields something to expire.
#[derive(Debug, Default)]
pub struct TimeIndex {
    /// Buckets of ids keyed by expiration second
    buckets: BTreeMap<i64, HashSet<String>>,
    /// Total ids across all buckets
    ids: usize,
}

impl TimeIndex {
    /// Create an empty index
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace or create the set stored at `key`
    ///
    /// An empty set removes the key.
    pub fn insert(&mut self, key: i64, set: HashSet<String>) {
        if set.is_empty() {
            self.delete_key(key);
            return;
        }
        let added = set.len();
        if let Some(previous) = self.buckets.insert(key, set) {
            self.ids -= previous.len();
        }
        self.ids += added;
    }

    /// Get the id set stored at `key`
    pub fn get(&self, key: i64) -> Option<&HashSet<String>> {
        self.buckets.get(&key)
    }

    /// Remove `key` and its whole set
    pub fn delete_key(&mut self, key: i64) -> Option<HashSet<String>> {
        let removed = self.buckets.remove(&key)?;
        self.ids -= removed.len();
        Some(removed)
    }

    /// Smallest timestamp and its ids
    pub fn minimum(&self) -> Option<(i64, &HashSet<String>)> {
        self.buckets.first_key_value().map(|(key, ids)| (*key, ids))
    }

    /// Add one id at `key`, returns false if it was already there
    pub fn insert_id(&mut self, key: i64, id: String) -> bool {
        let added = self.buckets.entry(key).or_default().insert(id);
        if added {
            self.ids += 1;
        }
        added
    }

    /// Remove one id at `key`, dropping the key once its set empties
    pub fn remove_id(&mut self, key: i64, id: &str) -> RemoveOutcome {
        let Some(ids) = self.buckets.get_mut(&key) else {
            return RemoveOutcome::KeyMissing;
        };
        if !ids.remove(id) {
            return RemoveOutcome::IdMissing;
        }
        if ids.is_empty() {
            self.buckets.remove(&key);
        }
        self.ids -= 1;
        RemoveOutcome::Removed
    }

    /// Check if `id` is scheduled at `key`
    pub fn contains(&self, key: i64, id: &str) -> bool {
        self.buckets.get(&key).is_some_and(|ids| ids.contains(id))
    }

    /// Number of distinct timestamps
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    /// Number of tracked ids
    pub fn id_count(&self) -> usize {
        self.ids
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Clear all scheduled ids
    pub fn clear(&mut self) {
        self.buckets.clear();
        self.ids = 0;
    }
}
