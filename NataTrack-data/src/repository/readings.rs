use std::sync::Mutex;

use tracing::{debug, warn};

use crate::blob::BlobStore;
use crate::models::ReadingRecord;

use super::errors::StorageError;
use super::READINGS_KEY;

/// Repository trait for the ordered reading collection.
///
/// The collection is kept newest-first in insertion order; persistence is an
/// explicit side effect of `append` and `remove`.
pub trait ReadingRepositoryTrait {
    /// Insert a reading at the front of the collection and persist it
    fn append(&self, record: ReadingRecord) -> Result<(), StorageError>;

    /// Remove the reading with the given id and persist the collection.
    /// Removing an unknown id is a no-op.
    fn remove(&self, id: &str) -> Result<(), StorageError>;

    /// All readings, newest-first
    fn all(&self) -> Result<Vec<ReadingRecord>, StorageError>;
}

/// Reading repository backed by the blob store.
///
/// The full collection is loaded once at construction and rewritten as a
/// unit after every mutation. A corrupt or missing blob loads as the empty
/// collection rather than an error.
#[derive(Debug)]
pub struct BlobReadingRepository<B: BlobStore> {
    store: B,
    readings: Mutex<Vec<ReadingRecord>>,
}

impl<B: BlobStore> BlobReadingRepository<B> {
    /// Load the persisted collection from `store`
    pub fn load(store: B) -> Result<Self, StorageError> {
        let readings = match store.get(READINGS_KEY)? {
            Some(blob) => match serde_json::from_str::<Vec<ReadingRecord>>(&blob) {
                Ok(readings) => readings,
                Err(e) => {
                    // Corrupt state resets to empty; the user flow continues
                    warn!("Discarding unreadable reading collection: {}", e);
                    Vec::new()
                }
            },
            None => {
                debug!("No persisted readings found, starting empty");
                Vec::new()
            }
        };

        Ok(Self {
            store,
            readings: Mutex::new(readings),
        })
    }

    fn persist(&self, readings: &[ReadingRecord]) -> Result<(), StorageError> {
        let blob = serde_json::to_string(readings)?;
        self.store.put(READINGS_KEY, &blob)?;
        Ok(())
    }
}

impl<B: BlobStore> ReadingRepositoryTrait for BlobReadingRepository<B> {
    fn append(&self, record: ReadingRecord) -> Result<(), StorageError> {
        let mut readings = self.readings.lock()?;
        debug!("Appending reading {}", record.id);
        readings.insert(0, record);
        self.persist(&readings)
    }

    fn remove(&self, id: &str) -> Result<(), StorageError> {
        let mut readings = self.readings.lock()?;
        let before = readings.len();
        readings.retain(|r| r.id != id);

        if readings.len() == before {
            debug!("No reading with id {}, nothing removed", id);
            return Ok(());
        }

        self.persist(&readings)
    }

    fn all(&self) -> Result<Vec<ReadingRecord>, StorageError> {
        let readings = self.readings.lock()?;
        Ok(readings.clone())
    }
}

/// Mock reading repository for testing
#[cfg(any(test, feature = "mock"))]
pub mod tests {
    use super::*;

    /// In-memory implementation of the repository trait with no persistence,
    /// for exercising domain services in isolation
    #[derive(Debug, Default)]
    pub struct MockReadingRepository {
        readings: Mutex<Vec<ReadingRecord>>,
    }

    impl MockReadingRepository {
        /// Create a new empty mock repository
        pub fn new() -> Self {
            Self::default()
        }

        /// Create a mock repository with predefined readings
        pub fn with_readings(readings: Vec<ReadingRecord>) -> Self {
            Self {
                readings: Mutex::new(readings),
            }
        }
    }

    impl ReadingRepositoryTrait for MockReadingRepository {
        fn append(&self, record: ReadingRecord) -> Result<(), StorageError> {
            let mut readings = self.readings.lock()?;
            readings.insert(0, record);
            Ok(())
        }

        fn remove(&self, id: &str) -> Result<(), StorageError> {
            let mut readings = self.readings.lock()?;
            readings.retain(|r| r.id != id);
            Ok(())
        }

        fn all(&self) -> Result<Vec<ReadingRecord>, StorageError> {
            let readings = self.readings.lock()?;
            Ok(readings.clone())
        }
    }
}

#[cfg(test)]
mod repository_tests {
    use chrono::{NaiveDate, NaiveTime};

    use super::*;
    use crate::blob::{BlobError, MemoryBlobStore, MockBlobStore};

    fn record(id: &str, systolic: u16) -> ReadingRecord {
        ReadingRecord {
            id: id.to_string(),
            systolic,
            diastolic: 80,
            pulse: 72,
            date: NaiveDate::from_ymd_opt(2025, 3, 10).unwrap(),
            time: NaiveTime::from_hms_opt(8, 30, 0).unwrap(),
            notes: None,
            symptoms: vec![],
            position: "sitting".to_string(),
            category: "normal".to_string(),
            gestational_week: 22,
        }
    }

    #[test]
    fn test_append_keeps_newest_first() {
        let repo = BlobReadingRepository::load(MemoryBlobStore::new()).unwrap();

        repo.append(record("a", 118)).unwrap();
        repo.append(record("b", 121)).unwrap();
        repo.append(record("c", 125)).unwrap();

        let ids: Vec<String> = repo.all().unwrap().into_iter().map(|r| r.id).collect();
        assert_eq!(ids, vec!["c", "b", "a"]);
    }

    #[test]
    fn test_remove_deletes_exactly_one_and_preserves_order() {
        let repo = BlobReadingRepository::load(MemoryBlobStore::new()).unwrap();
        for id in ["a", "b", "c", "d"] {
            repo.append(record(id, 120)).unwrap();
        }

        repo.remove("c").unwrap();

        let ids: Vec<String> = repo.all().unwrap().into_iter().map(|r| r.id).collect();
        assert_eq!(ids, vec!["d", "b", "a"]);
    }

    #[test]
    fn test_remove_unknown_id_is_noop() {
        let store = MemoryBlobStore::new();
        let repo = BlobReadingRepository::load(store.clone()).unwrap();
        repo.append(record("a", 120)).unwrap();
        let persisted = store.get(READINGS_KEY).unwrap();

        repo.remove("missing").unwrap();

        assert_eq!(repo.all().unwrap().len(), 1);
        // A no-op removal must not rewrite the blob
        assert_eq!(store.get(READINGS_KEY).unwrap(), persisted);
    }

    #[test]
    fn test_corrupt_blob_loads_as_empty() {
        let store = MemoryBlobStore::new();
        store.put(READINGS_KEY, "not json at all {{{").unwrap();

        let repo = BlobReadingRepository::load(store).unwrap();

        assert!(repo.all().unwrap().is_empty());
    }

    #[test]
    fn test_append_persists_collection_as_a_unit() {
        let store = MemoryBlobStore::new();
        let repo = BlobReadingRepository::load(store.clone()).unwrap();

        repo.append(record("a", 118)).unwrap();
        repo.append(record("b", 132)).unwrap();

        let reloaded = BlobReadingRepository::load(store).unwrap();
        assert_eq!(reloaded.all().unwrap(), repo.all().unwrap());
    }

    #[test]
    fn test_append_surfaces_blob_write_failure() {
        let mut store = MockBlobStore::new();
        store.expect_get().returning(|_| Ok(None));
        store
            .expect_put()
            .returning(|_, _| Err(BlobError::Lock("store unavailable".to_string())));

        let repo = BlobReadingRepository::load(store).unwrap();
        let result = repo.append(record("a", 120));

        assert!(matches!(result, Err(StorageError::Blob(_))));
    }
}
