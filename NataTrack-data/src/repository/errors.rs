use std::sync::PoisonError;

use thiserror::Error;

use crate::blob::BlobError;

/// Error type for repository operations
#[derive(Error, Debug)]
pub enum StorageError {
    /// Blob store error
    #[error("Blob store error: {0}")]
    Blob(#[from] BlobError),

    /// Serialization error while persisting a record
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Lock error
    #[error("Lock error: {0}")]
    Lock(String),
}

impl<T> From<PoisonError<T>> for StorageError {
    fn from(error: PoisonError<T>) -> Self {
        StorageError::Lock(error.to_string())
    }
}
