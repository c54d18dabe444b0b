//! Local storage layer: a key/value backend and the per-word feedback cache on top.

mod error;
pub use error::StoreError;

mod backend;
pub use backend::{DirStore, KeyValueStore, MemoryStore};

mod cache;
pub use cache::{FeedbackCache, cache_key};
