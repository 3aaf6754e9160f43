use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Minimal string key-value storage, the local equivalent of a browser's storage area.
pub trait KeyValueBackend: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, BackendError>;
    fn set(&self, key: &str, value: &str) -> Result<(), BackendError>;
    fn remove(&self, key: &str) -> Result<(), BackendError>;
}

/// Failure raised by a storage backend.
#[derive(Debug, thiserror::Error)]
pub enum BackendError {
    #[error("storage i/o failed for '{key}': {source}")]
    Io {
        key: String,
        #[source]
        source: io::Error,
    },
    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

/// Stores each key as `<key>.json` inside a data directory.
#[derive(Debug, Clone)]
pub struct FileBackend {
    root: PathBuf,
}

impl FileBackend {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.root.join(format!("{key}.json"))
    }

    /// Per-process staging file so concurrent writers never share one.
    fn staging_path_for(&self, key: &str) -> PathBuf {
        self.root
            .join(format!("{key}.json.{}.tmp", std::process::id()))
    }

    fn io_error(key: &str, source: io::Error) -> BackendError {
        BackendError::Io {
            key: key.to_string(),
            source,
        }
    }
}

impl KeyValueBackend for FileBackend {
    fn get(&self, key: &str) -> Result<Option<String>, BackendError> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(raw) => Ok(Some(raw)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(Self::io_error(key, err)),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), BackendError> {
        fs::create_dir_all(&self.root).map_err(|err| Self::io_error(key, err))?;

        // Readers only ever see the old file or the complete new one.
        let target = self.path_for(key);
        let staging = self.staging_path_for(key);
        let written = fs::write(&staging, value).and_then(|()| fs::rename(&staging, &target));
        if let Err(err) = written {
            // Best effort; the write error is the one worth reporting.
            let _ = fs::remove_file(&staging);
            return Err(Self::io_error(key, err));
        }
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), BackendError> {
        match fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(Self::io_error(key, err)),
        }
    }
}

/// Process-local backend for tests and dry runs.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryBackend {
    fn poisoned() -> BackendError {
        BackendError::Unavailable("memory backend lock poisoned".to_string())
    }
}

impl KeyValueBackend for MemoryBackend {
    fn get(&self, key: &str) -> Result<Option<String>, BackendError> {
        let guard = self.entries.lock().map_err(|_| Self::poisoned())?;
        Ok(guard.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), BackendError> {
        let mut guard = self.entries.lock().map_err(|_| Self::poisoned())?;
        guard.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), BackendError> {
        let mut guard = self.entries.lock().map_err(|_| Self::poisoned())?;
        guard.remove(key);
        Ok(())
    }
}
