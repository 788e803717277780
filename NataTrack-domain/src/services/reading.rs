use chrono::NaiveDate;
use thiserror::Error;
use tracing::{info, warn};
use uuid::Uuid;
use validator::Validate;

use nata_track_data::repository::{
    ProfileRepositoryTrait, ReadingRepositoryTrait, StorageError,
};

use crate::entities::conversions;
use crate::entities::reading::{Category, CreateReadingRequest, Reading, Ruleset};
use crate::services::clock::Clock;
use crate::services::export::{self, ExportError};
use crate::services::insights::{self, TrendPoint, VitalAverages, TREND_WINDOW};
use crate::services::{classify, gestation};

/// Reading service errors
#[derive(Debug, Error)]
pub enum ReadingServiceError {
    /// Validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// Storage error
    #[error("Storage error: {0}")]
    Storage(String),

    /// Export error
    #[error("Export error: {0}")]
    Export(#[from] ExportError),
}

/// Follow-up urgency attached to a concerning reading
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advisory {
    /// Contact the care provider soon
    Important,

    /// Contact the care provider immediately or seek emergency care
    Urgent,
}

impl Advisory {
    /// Advisory level for a category, if the category warrants one
    pub fn for_category(category: Category) -> Option<Advisory> {
        match category {
            Category::Crisis => Some(Advisory::Urgent),
            Category::Stage2 => Some(Advisory::Important),
            _ => None,
        }
    }

    /// User-facing advisory text
    pub fn message(&self) -> &'static str {
        match self {
            Advisory::Urgent => {
                "URGENT: Your blood pressure reading is very high. Contact your \
                 healthcare provider immediately or seek emergency care."
            }
            Advisory::Important => {
                "Important: This reading indicates gestational hypertension. \
                 Please contact your healthcare provider soon."
            }
        }
    }
}

/// Service orchestrating reading submission, listing, deletion, derived
/// metrics, and export.
///
/// A submission is validated against the active rule set, classified, and
/// stamped with a gestational-week snapshot before it reaches the store;
/// nothing is persisted when validation fails.
pub struct ReadingService<R, P, C>
where
    R: ReadingRepositoryTrait,
    P: ProfileRepositoryTrait,
    C: Clock,
{
    readings: R,
    profiles: P,
    clock: C,
    ruleset: Ruleset,
}

impl<R, P, C> ReadingService<R, P, C>
where
    R: ReadingRepositoryTrait,
    P: ProfileRepositoryTrait,
    C: Clock,
{
    /// Create a new reading service operating under `ruleset`
    pub fn new(readings: R, profiles: P, clock: C, ruleset: Ruleset) -> Self {
        Self {
            readings,
            profiles,
            clock,
            ruleset,
        }
    }

    /// The rule set this service classifies and validates under
    pub fn ruleset(&self) -> Ruleset {
        self.ruleset
    }

    /// Map repository errors to service errors
    fn map_storage_error(err: StorageError) -> ReadingServiceError {
        ReadingServiceError::Storage(err.to_string())
    }

    /// Validate a create reading request against the active rule set
    pub fn validate_request(
        &self,
        request: &CreateReadingRequest,
    ) -> Result<(), ReadingServiceError> {
        // Use the validator crate's validation for the static constraints
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

            return Err(ReadingServiceError::Validation(error_message));
        }

        // Rule-set-specific vitals ranges cannot be expressed statically
        let ranges = self.ruleset.vital_ranges();
        if !ranges.systolic.contains(&request.systolic) {
            return Err(ReadingServiceError::Validation(format!(
                "Systolic must be between {} and {} mmHg",
                ranges.systolic.start(),
                ranges.systolic.end()
            )));
        }
        if !ranges.diastolic.contains(&request.diastolic) {
            return Err(ReadingServiceError::Validation(format!(
                "Diastolic must be between {} and {} mmHg",
                ranges.diastolic.start(),
                ranges.diastolic.end()
            )));
        }
        if !ranges.pulse.contains(&request.pulse) {
            return Err(ReadingServiceError::Validation(format!(
                "Pulse must be between {} and {} bpm",
                ranges.pulse.start(),
                ranges.pulse.end()
            )));
        }

        Ok(())
    }

    /// Record a new reading.
    ///
    /// The category comes from the classifier under the active rule set; the
    /// gestational week is computed from the profile's due date at this
    /// moment and frozen into the reading.
    pub fn create(&self, request: CreateReadingRequest) -> Result<Reading, ReadingServiceError> {
        self.validate_request(&request)?;

        let gestational_week =
            gestation::current_week(self.profile_due_date()?, self.clock.today());
        let category = classify::classify(request.systolic, request.diastolic, self.ruleset);

        let reading = Reading {
            id: Uuid::new_v4().to_string(),
            systolic: request.systolic,
            diastolic: request.diastolic,
            pulse: request.pulse,
            date: request.date,
            time: request.time,
            notes: request.notes.filter(|n| !n.trim().is_empty()),
            symptoms: request.symptoms,
            position: request.position,
            category,
            gestational_week,
        };

        self.readings
            .append(conversions::convert_to_data_reading(&reading))
            .map_err(Self::map_storage_error)?;

        info!(
            "Recorded reading {} ({}/{} mmHg, {})",
            reading.id,
            reading.systolic,
            reading.diastolic,
            category.label(self.ruleset)
        );

        Ok(reading)
    }

    /// All readings, newest-first.
    ///
    /// Records that no longer parse against the current vocabulary are
    /// skipped with a logged diagnostic rather than failing the whole list.
    pub fn list(&self) -> Result<Vec<Reading>, ReadingServiceError> {
        let records = self.readings.all().map_err(Self::map_storage_error)?;

        let readings = records
            .into_iter()
            .filter_map(|record| {
                let id = record.id.clone();
                match conversions::convert_to_domain_reading(record) {
                    Ok(reading) => Some(reading),
                    Err(e) => {
                        warn!("Skipping unreadable reading {}: {}", id, e);
                        None
                    }
                }
            })
            .collect();

        Ok(readings)
    }

    /// Delete a reading by identifier. Deleting an unknown identifier is a
    /// no-op; a malformed identifier is a validation error.
    pub fn delete(&self, id: &str) -> Result<(), ReadingServiceError> {
        conversions::parse_string_to_uuid(id).map_err(ReadingServiceError::Validation)?;

        self.readings.remove(id).map_err(Self::map_storage_error)
    }

    /// Rolling averages over the most recent readings
    pub fn averages(&self) -> Result<Option<VitalAverages>, ReadingServiceError> {
        Ok(insights::recent_averages(&self.list()?))
    }

    /// Count of stage 2 and crisis readings across the whole collection
    pub fn high_risk_count(&self) -> Result<usize, ReadingServiceError> {
        Ok(insights::high_risk_count(&self.list()?))
    }

    /// Oldest-first trend series over the most recent readings
    pub fn trend(&self) -> Result<Vec<TrendPoint>, ReadingServiceError> {
        Ok(insights::trend_points(&self.list()?, TREND_WINDOW))
    }

    /// The reading collection as CSV, ready to hand to a care provider
    pub fn export_csv(&self) -> Result<String, ReadingServiceError> {
        Ok(export::to_csv(&self.list()?, self.ruleset)?)
    }

    /// Due date from the stored profile, if onboarding has been completed
    fn profile_due_date(&self) -> Result<Option<NaiveDate>, ReadingServiceError> {
        let record = self.profiles.load().map_err(Self::map_storage_error)?;
        Ok(record.map(|r| r.due_date))
    }
}
