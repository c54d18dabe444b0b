//! Append-only per-word feedback cache.
//!
//! Each word's feedback lives under `feedback_<word>` as a JSON array. Every
//! operation reads the whole array, changes it, and writes it back in full.

use tracing::{info, warn};
use wordglobe_core::FeedbackRecord;

use crate::{KeyValueStore, StoreError};

/// Storage key for a word's feedback sequence.
pub fn cache_key(word: &str) -> String {
    format!("feedback_{word}")
}

/// Feedback cache over any [`KeyValueStore`].
#[derive(Debug)]
pub struct FeedbackCache<S> {
    store: S,
}

impl<S: KeyValueStore> FeedbackCache<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Stored records for `word`, oldest first.
    ///
    /// A missing key or a value that does not decode as a record array both
    /// yield an empty sequence. Only backend I/O failures are errors.
    pub fn read_all(&self, word: &str) -> Result<Vec<FeedbackRecord>, StoreError> {
        let key = cache_key(word);
        let Some(text) = self.store.get(&key)? else {
            return Ok(Vec::new());
        };
        match serde_json::from_str(&text) {
            Ok(records) => Ok(records),
            Err(e) => {
                warn!(key = %key, error = %e, "ignoring malformed cache entry");
                Ok(Vec::new())
            }
        }
    }

    /// Append `record` to `word`'s sequence.
    pub fn append(&self, word: &str, record: FeedbackRecord) -> Result<(), StoreError> {
        if !record.has_valid_rating() {
            return Err(StoreError::InvalidRating(record.rating));
        }
        let mut records = self.read_all(word)?;
        records.push(record);
        self.write(word, &records)?;
        info!(word = %word, count = records.len(), "cached feedback locally");
        Ok(())
    }

    /// Remove the record at `index`. Out-of-range indices are ignored.
    ///
    /// Returns the removed record, if any.
    pub fn delete_at(&self, word: &str, index: usize) -> Result<Option<FeedbackRecord>, StoreError> {
        let mut records = self.read_all(word)?;
        if index >= records.len() {
            return Ok(None);
        }
        let removed = records.remove(index);
        self.write(word, &records)?;
        info!(word = %word, index, remaining = records.len(), "deleted local feedback");
        Ok(Some(removed))
    }

    fn write(&self, word: &str, records: &[FeedbackRecord]) -> Result<(), StoreError> {
        let json = serde_json::to_string(records)?;
        self.store.set(&cache_key(word), &json)
    }
}
