use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// Storage model for a blood pressure reading.
/// This is the shape persisted to the blob store; enum-like fields are kept
/// as strings so old blobs survive vocabulary changes in the domain layer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReadingRecord {
    /// Unique identifier for the reading
    pub id: String,

    /// Systolic blood pressure (the higher number)
    pub systolic: u16,

    /// Diastolic blood pressure (the lower number)
    pub diastolic: u16,

    /// Pulse rate in beats per minute
    pub pulse: u16,

    /// Calendar date the reading was taken
    pub date: NaiveDate,

    /// Time of day the reading was taken
    pub time: NaiveTime,

    /// Optional notes about the reading
    pub notes: Option<String>,

    /// Symptom tags recorded with the reading
    pub symptoms: Vec<String>,

    /// Position during measurement (sitting, lying, standing)
    pub position: String,

    /// Risk category assigned at creation time
    pub category: String,

    /// Gestational week snapshot taken at creation time
    pub gestational_week: u8,
}
