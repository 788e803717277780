use thiserror::Error;
use tracing::{info, warn};
use validator::Validate;

use nata_track_data::repository::{ProfileRepositoryTrait, StorageError};

use crate::entities::conversions;
use crate::entities::profile::{OnboardingRequest, UserProfile};
use crate::services::clock::Clock;
use crate::services::gestation;

/// Profile service errors
#[derive(Debug, Error)]
pub enum ProfileServiceError {
    /// Validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// Storage error
    #[error("Storage error: {0}")]
    Storage(String),
}

/// Service managing the onboarding-collected profile and the values derived
/// from it
pub struct ProfileService<P: ProfileRepositoryTrait, C: Clock> {
    repository: P,
    clock: C,
}

impl<P: ProfileRepositoryTrait, C: Clock> ProfileService<P, C> {
    /// Create a new profile service
    pub fn new(repository: P, clock: C) -> Self {
        Self { repository, clock }
    }

    /// Map repository errors to service errors
    fn map_storage_error(err: StorageError) -> ProfileServiceError {
        ProfileServiceError::Storage(err.to_string())
    }

    /// Complete onboarding, overwriting any previously stored profile
    pub fn complete_onboarding(
        &self,
        request: OnboardingRequest,
    ) -> Result<UserProfile, ProfileServiceError> {
        if let Err(validation_errors) = request.validate() {
            let error_message = validation_errors
                .field_errors()
                .iter()
                .map(|(field, errors)| {
                    let error_msgs: Vec<String> = errors
                        .iter()
                        .map(|err| {
                            if let Some(msg) = &err.message {
                                msg.to_string()
                            } else {
                                format!("Invalid {}", field)
                            }
                        })
                        .collect();
                    format!("{}: {}", field, error_msgs.join(", "))
                })
                .collect::<Vec<String>>()
                .join("; ");

            return Err(ProfileServiceError::Validation(error_message));
        }

        // Additional validation: a whitespace-only name passes the length
        // check but is still unusable
        if request.name.trim().is_empty() {
            return Err(ProfileServiceError::Validation(
                "Name is required".to_string(),
            ));
        }

        let profile = UserProfile {
            name: request.name.trim().to_string(),
            due_date: request.due_date,
            current_week: request.current_week,
            first_pregnancy: request.first_pregnancy,
            pre_existing_conditions: request.pre_existing_conditions,
            current_medications: request.current_medications,
            doctor_name: request.doctor_name,
            reminder_frequency: request.reminder_frequency,
        };

        self.repository
            .save(&conversions::convert_to_data_profile(&profile))
            .map_err(Self::map_storage_error)?;

        info!("Onboarding completed for {}", profile.name);
        Ok(profile)
    }

    /// The stored profile, or `None` when onboarding has not run.
    /// A profile that no longer parses is treated as absent, with a logged
    /// diagnostic.
    pub fn load(&self) -> Result<Option<UserProfile>, ProfileServiceError> {
        let record = self.repository.load().map_err(Self::map_storage_error)?;

        Ok(record.and_then(
            |record| match conversions::convert_to_domain_profile(record) {
                Ok(profile) => Some(profile),
                Err(e) => {
                    warn!("Discarding unreadable profile: {}", e);
                    None
                }
            },
        ))
    }

    /// Whether onboarding has been completed on this device
    pub fn onboarding_complete(&self) -> Result<bool, ProfileServiceError> {
        self.repository
            .onboarding_complete()
            .map_err(Self::map_storage_error)
    }

    /// The gestational week to display right now.
    ///
    /// Always computed from the stored due date; the self-reported
    /// onboarding week is context for the care provider, never the display
    /// value.
    pub fn display_week(&self) -> Result<u8, ProfileServiceError> {
        let due_date = self.load()?.map(|p| p.due_date);
        Ok(gestation::current_week(due_date, self.clock.today()))
    }
}
