use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Storage model for the onboarding-collected user profile.
/// Persisted as a single record and overwritten wholesale when onboarding
/// is re-run.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProfileRecord {
    /// Display name collected at onboarding
    pub name: String,

    /// Estimated due date; sole authority for the computed gestational week
    pub due_date: NaiveDate,

    /// Self-reported pregnancy week at onboarding time
    pub current_week: Option<u8>,

    /// Whether this is the user's first pregnancy
    pub first_pregnancy: bool,

    /// Free-text pre-existing conditions
    pub pre_existing_conditions: Option<String>,

    /// Free-text current medications
    pub current_medications: Option<String>,

    /// Care provider name
    pub doctor_name: Option<String>,

    /// Reminder frequency preference (daily, twice-daily, weekly, none)
    pub reminder_frequency: String,
}
