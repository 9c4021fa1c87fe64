//! Local durable storage for the favorites payload.
//!
//! One key holding one serialized document: read once at startup, overwritten
//! on every toggle. Persistence is best-effort — callers recover from
//! failures instead of propagating them to the user.

use crate::error::StorageError;

use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;
use std::sync::{Arc, Mutex, PoisonError};

/// Backend holding the single serialized favorites payload.
pub trait FavoritesBackend {
    /// Read the stored payload; `None` if nothing has been written yet.
    fn read(&self) -> Result<Option<String>, StorageError>;

    /// Overwrite the stored payload.
    fn write(&self, payload: &str) -> Result<(), StorageError>;
}

// ─── FileBackend ─────────────────────────────────────────────────────────────

/// File-backed storage: one JSON document per store.
#[derive(Debug, Clone)]
pub struct FileBackend {
    path: PathBuf,
}

impl FileBackend {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

impl FavoritesBackend for FileBackend {
    fn read(&self) -> Result<Option<String>, StorageError> {
        match fs::read_to_string(&self.path) {
            Ok(payload) => Ok(Some(payload)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn write(&self, payload: &str) -> Result<(), StorageError> {
        fs::write(&self.path, payload)?;
        Ok(())
    }
}

// ─── MemoryBackend ───────────────────────────────────────────────────────────

/// In-memory storage slot.
///
/// Clones share the slot, which lets tests simulate a restart: build a second
/// store over a clone of the same backend and check what it restores.
#[derive(Debug, Clone, Default)]
pub struct MemoryBackend {
    slot: Arc<Mutex<Option<String>>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }
}

impl FavoritesBackend for MemoryBackend {
    fn read(&self) -> Result<Option<String>, StorageError> {
        let slot = self.slot.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(slot.clone())
    }

    fn write(&self, payload: &str) -> Result<(), StorageError> {
        let mut slot = self.slot.lock().unwrap_or_else(PoisonError::into_inner);
        *slot = Some(payload.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_backend_roundtrip() {
        let backend = MemoryBackend::new();
        assert_eq!(backend.read().unwrap(), None);
        backend.write("[\"bitcoin\"]").unwrap();
        assert_eq!(backend.read().unwrap().as_deref(), Some("[\"bitcoin\"]"));
    }

    #[test]
    fn test_memory_backend_clones_share_the_slot() {
        let backend = MemoryBackend::new();
        let other = backend.clone();
        backend.write("[]").unwrap();
        assert_eq!(other.read().unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn test_file_backend_missing_file_reads_none() {
        let backend = FileBackend::new("/nonexistent/favorites.json");
        assert!(matches!(backend.read(), Ok(None)));
    }
}
