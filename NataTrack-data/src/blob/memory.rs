use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use super::{BlobError, BlobStore};

/// In-memory blob store used in tests and anywhere persistence is not wanted
#[derive(Debug, Clone, Default)]
pub struct MemoryBlobStore {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryBlobStore {
    /// Create a new empty in-memory store
    pub fn new() -> Self {
        Self::default()
    }
}

impl BlobStore for MemoryBlobStore {
    fn get(&self, key: &str) -> Result<Option<String>, BlobError> {
        let entries = self
            .entries
            .lock()
            .map_err(|e| BlobError::Lock(e.to_string()))?;
        Ok(entries.get(key).cloned())
    }

    fn put(&self, key: &str, value: &str) -> Result<(), BlobError> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|e| BlobError::Lock(e.to_string()))?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), BlobError> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|e| BlobError::Lock(e.to_string()))?;
        entries.remove(key);
        Ok(())
    }
}
