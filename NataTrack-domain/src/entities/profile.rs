use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use validator::Validate;

/// How often the user wants measurement reminders
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum ReminderFrequency {
    Daily,
    TwiceDaily,
    Weekly,
    None,
}

impl ReminderFrequency {
    /// Stable kebab-case key used for persistence
    pub fn as_str(&self) -> &'static str {
        match self {
            ReminderFrequency::Daily => "daily",
            ReminderFrequency::TwiceDaily => "twice-daily",
            ReminderFrequency::Weekly => "weekly",
            ReminderFrequency::None => "none",
        }
    }
}

impl FromStr for ReminderFrequency {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "daily" => Ok(ReminderFrequency::Daily),
            "twice-daily" => Ok(ReminderFrequency::TwiceDaily),
            "weekly" => Ok(ReminderFrequency::Weekly),
            "none" => Ok(ReminderFrequency::None),
            _ => Err(format!("Unknown reminder frequency: {}", s)),
        }
    }
}

/// Domain model for the onboarding-collected user profile
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserProfile {
    /// Display name collected at onboarding
    pub name: String,

    /// Estimated due date; sole authority for the computed gestational week
    pub due_date: NaiveDate,

    /// Self-reported pregnancy week at onboarding time. Kept as context for
    /// the care provider; the week shown anywhere in the app is always the
    /// one computed from the due date.
    pub current_week: Option<u8>,

    /// Whether this is the user's first pregnancy
    pub first_pregnancy: bool,

    /// Free-text pre-existing conditions
    pub pre_existing_conditions: Option<String>,

    /// Free-text current medications
    pub current_medications: Option<String>,

    /// Care provider name
    pub doctor_name: Option<String>,

    /// Reminder frequency preference
    pub reminder_frequency: ReminderFrequency,
}

/// Request payload for completing (or re-running) onboarding
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct OnboardingRequest {
    /// Display name
    #[validate(length(min = 1, max = 100, message = "Name is required"))]
    pub name: String,

    /// Estimated due date
    pub due_date: NaiveDate,

    /// Self-reported pregnancy week, if the user knows it
    #[validate(range(min = 1, max = 42, message = "Current week must be between 1 and 42"))]
    pub current_week: Option<u8>,

    /// Whether this is the user's first pregnancy
    pub first_pregnancy: bool,

    /// Free-text pre-existing conditions
    #[validate(length(
        max = 1000,
        message = "Pre-existing conditions cannot exceed 1000 characters"
    ))]
    pub pre_existing_conditions: Option<String>,

    /// Free-text current medications
    #[validate(length(max = 1000, message = "Medications cannot exceed 1000 characters"))]
    pub current_medications: Option<String>,

    /// Care provider name
    #[validate(length(max = 100, message = "Doctor name cannot exceed 100 characters"))]
    pub doctor_name: Option<String>,

    /// Reminder frequency preference
    pub reminder_frequency: ReminderFrequency,
}
