//! Bounded, newest-first history of assessment results.
//!
//! The whole history lives as one JSON array under a single key, with no schema version
//! field. Changing the shape of [`AssessmentResult`] changes what older records decode to.

mod backend;

pub use backend::{BackendError, FileBackend, KeyValueBackend, MemoryBackend};

use std::sync::Mutex;

use tracing::{debug, warn};

use super::result::AssessmentResult;

/// Key the history array is stored under.
pub const HISTORY_KEY: &str = "mindscope-assessment-history";

/// Number of results kept before the oldest is evicted.
pub const HISTORY_CAPACITY: usize = 10;

/// Storage abstraction so the service can be exercised without touching disk.
pub trait ResultStore: Send + Sync {
    /// Adds `result` as the newest entry, evicting the oldest past capacity.
    fn append(&self, result: AssessmentResult) -> Result<(), HistoryError>;
    fn latest(&self) -> Result<Option<AssessmentResult>, HistoryError>;
    /// All kept results, newest first.
    fn history(&self) -> Result<Vec<AssessmentResult>, HistoryError>;
    fn clear(&self) -> Result<(), HistoryError>;
}

/// Error enumeration for history persistence failures.
#[derive(Debug, thiserror::Error)]
pub enum HistoryError {
    #[error(transparent)]
    Backend(#[from] BackendError),
    #[error("failed to encode assessment history: {0}")]
    Encode(#[source] serde_json::Error),
    #[error("assessment history lock poisoned")]
    Poisoned,
}

/// [`ResultStore`] over any key-value backend.
pub struct HistoryStore<B> {
    backend: B,
    key: String,
    capacity: usize,
    write_lock: Mutex<()>,
}

impl<B> HistoryStore<B>
where
    B: KeyValueBackend,
{
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            key: HISTORY_KEY.to_string(),
            capacity: HISTORY_CAPACITY,
            write_lock: Mutex::new(()),
        }
    }

    /// Overrides the retention limit; at least one result is always kept.
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity.max(1);
        self
    }

    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = key.into();
        self
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    fn load(&self) -> Result<Vec<AssessmentResult>, HistoryError> {
        let Some(raw) = self.backend.get(&self.key)? else {
            return Ok(Vec::new());
        };

        match serde_json::from_str::<Vec<AssessmentResult>>(&raw) {
            Ok(history) => Ok(history),
            Err(err) => {
                warn!(key = %self.key, error = %err, "discarding unreadable assessment history");
                Ok(Vec::new())
            }
        }
    }
}

impl<B> ResultStore for HistoryStore<B>
where
    B: KeyValueBackend,
{
    fn append(&self, result: AssessmentResult) -> Result<(), HistoryError> {
        let _guard = self.write_lock.lock().map_err(|_| HistoryError::Poisoned)?;

        let mut history = self.load()?;
        history.insert(0, result);
        if history.len() > self.capacity {
            debug!(
                evicted = history.len() - self.capacity,
                "trimming assessment history"
            );
            history.truncate(self.capacity);
        }

        let encoded = serde_json::to_string(&history).map_err(HistoryError::Encode)?;
        self.backend.set(&self.key, &encoded)?;
        Ok(())
    }

    fn latest(&self) -> Result<Option<AssessmentResult>, HistoryError> {
        Ok(self.load()?.into_iter().next())
    }

    fn history(&self) -> Result<Vec<AssessmentResult>, HistoryError> {
        self.load()
    }

    fn clear(&self) -> Result<(), HistoryError> {
        let _guard = self.write_lock.lock().map_err(|_| HistoryError::Poisoned)?;
        self.backend.remove(&self.key)?;
        Ok(())
    }
}
