use tracing::{debug, warn};

use crate::blob::BlobStore;
use crate::models::ProfileRecord;

use super::errors::StorageError;
use super::{ONBOARDING_KEY, PROFILE_KEY};

/// Repository trait for the single user profile record
pub trait ProfileRepositoryTrait {
    /// The stored profile, or `None` when onboarding has not been completed
    fn load(&self) -> Result<Option<ProfileRecord>, StorageError>;

    /// Overwrite the stored profile wholesale and mark onboarding complete
    fn save(&self, record: &ProfileRecord) -> Result<(), StorageError>;

    /// Whether onboarding has been completed on this device
    fn onboarding_complete(&self) -> Result<bool, StorageError>;
}

/// Profile repository backed by the blob store
#[derive(Debug)]
pub struct BlobProfileRepository<B: BlobStore> {
    store: B,
}

impl<B: BlobStore> BlobProfileRepository<B> {
    /// Create a repository over `store`
    pub fn new(store: B) -> Self {
        Self { store }
    }
}

impl<B: BlobStore> ProfileRepositoryTrait for BlobProfileRepository<B> {
    fn load(&self) -> Result<Option<ProfileRecord>, StorageError> {
        match self.store.get(PROFILE_KEY)? {
            Some(blob) => match serde_json::from_str::<ProfileRecord>(&blob) {
                Ok(record) => Ok(Some(record)),
                Err(e) => {
                    // Same policy as readings: corrupt state is empty state
                    warn!("Discarding unreadable profile record: {}", e);
                    Ok(None)
                }
            },
            None => {
                debug!("No persisted profile found");
                Ok(None)
            }
        }
    }

    fn save(&self, record: &ProfileRecord) -> Result<(), StorageError> {
        let blob = serde_json::to_string(record)?;
        self.store.put(PROFILE_KEY, &blob)?;
        self.store.put(ONBOARDING_KEY, "true")?;
        debug!("Saved profile for {}", record.name);
        Ok(())
    }

    fn onboarding_complete(&self) -> Result<bool, StorageError> {
        Ok(self.store.get(ONBOARDING_KEY)?.as_deref() == Some("true"))
    }
}

/// Mock profile repository for testing
#[cfg(any(test, feature = "mock"))]
pub mod tests {
    use std::sync::Mutex;

    use super::*;

    /// In-memory implementation of the profile repository trait with no
    /// persistence, for exercising domain services in isolation
    #[derive(Debug, Default)]
    pub struct MockProfileRepository {
        record: Mutex<Option<ProfileRecord>>,
    }

    impl MockProfileRepository {
        /// Create a mock repository with no stored profile
        pub fn new() -> Self {
            Self::default()
        }

        /// Create a mock repository with a predefined profile
        pub fn with_profile(record: ProfileRecord) -> Self {
            Self {
                record: Mutex::new(Some(record)),
            }
        }
    }

    impl ProfileRepositoryTrait for MockProfileRepository {
        fn load(&self) -> Result<Option<ProfileRecord>, StorageError> {
            let record = self.record.lock()?;
            Ok(record.clone())
        }

        fn save(&self, record: &ProfileRecord) -> Result<(), StorageError> {
            let mut stored = self.record.lock()?;
            *stored = Some(record.clone());
            Ok(())
        }

        fn onboarding_complete(&self) -> Result<bool, StorageError> {
            let record = self.record.lock()?;
            Ok(record.is_some())
        }
    }
}

#[cfg(test)]
mod repository_tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::blob::MemoryBlobStore;

    fn profile(name: &str) -> ProfileRecord {
        ProfileRecord {
            name: name.to_string(),
            due_date: NaiveDate::from_ymd_opt(2025, 9, 1).unwrap(),
            current_week: Some(18),
            first_pregnancy: true,
            pre_existing_conditions: None,
            current_medications: None,
            doctor_name: Some("Dr. Osei".to_string()),
            reminder_frequency: "daily".to_string(),
        }
    }

    #[test]
    fn test_load_before_onboarding_returns_none() {
        let repo = BlobProfileRepository::new(MemoryBlobStore::new());

        assert!(repo.load().unwrap().is_none());
        assert!(!repo.onboarding_complete().unwrap());
    }

    #[test]
    fn test_save_then_load_round_trip() {
        let repo = BlobProfileRepository::new(MemoryBlobStore::new());

        repo.save(&profile("Ana")).unwrap();

        let loaded = repo.load().unwrap().unwrap();
        assert_eq!(loaded, profile("Ana"));
        assert!(repo.onboarding_complete().unwrap());
    }

    #[test]
    fn test_save_overwrites_wholesale() {
        let repo = BlobProfileRepository::new(MemoryBlobStore::new());

        repo.save(&profile("Ana")).unwrap();
        repo.save(&profile("Bea")).unwrap();

        assert_eq!(repo.load().unwrap().unwrap().name, "Bea");
    }

    #[test]
    fn test_corrupt_profile_loads_as_none() {
        let store = MemoryBlobStore::new();
        store.put(PROFILE_KEY, "{\"name\": 42").unwrap();
        let repo = BlobProfileRepository::new(store);

        assert!(repo.load().unwrap().is_none());
    }
}
