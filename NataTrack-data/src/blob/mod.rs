// Blob storage module structure
mod file;
mod memory;

pub use file::FileBlobStore;
pub use memory::MemoryBlobStore;

use thiserror::Error;

/// Error type for blob store operations
#[derive(Error, Debug)]
pub enum BlobError {
    /// I/O error from the underlying medium
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Lock error
    #[error("Lock error: {0}")]
    Lock(String),

    /// Invalid key error
    #[error("Invalid blob key: {0}")]
    InvalidKey(String),
}

/// String-keyed blob storage boundary.
///
/// The application persists two records through this trait: the serialized
/// reading collection and the serialized user profile. A missing key means
/// "no data yet", not an error.
#[cfg_attr(test, mockall::automock)]
pub trait BlobStore {
    /// Read the value stored under `key`, or `None` if the key is absent
    fn get(&self, key: &str) -> Result<Option<String>, BlobError>;

    /// Write `value` under `key`, replacing any previous value
    fn put(&self, key: &str, value: &str) -> Result<(), BlobError>;

    /// Delete the value stored under `key`; deleting an absent key is a no-op
    fn remove(&self, key: &str) -> Result<(), BlobError>;
}
