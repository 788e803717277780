// Repository module structure
pub mod errors;
mod profile;
mod readings;

// Re-export commonly used types
pub use errors::StorageError;
pub use profile::{BlobProfileRepository, ProfileRepositoryTrait};
pub use readings::{BlobReadingRepository, ReadingRepositoryTrait};

// Re-export mock implementations for both testing and when mock feature is enabled
#[cfg(any(test, feature = "mock"))]
pub use profile::tests::MockProfileRepository;
#[cfg(any(test, feature = "mock"))]
pub use readings::tests::MockReadingRepository;

/// Blob key for the serialized reading collection
pub const READINGS_KEY: &str = "blood_pressure_readings";

/// Blob key for the serialized user profile
pub const PROFILE_KEY: &str = "user_profile";

/// Blob key for the onboarding completion marker
pub const ONBOARDING_KEY: &str = "onboarding_complete";
