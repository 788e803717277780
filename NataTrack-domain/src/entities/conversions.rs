use uuid::Uuid;

use nata_track_data::models::{ProfileRecord, ReadingRecord};

use crate::entities::profile::UserProfile;
use crate::entities::reading::{Position, Reading, Symptom};

/// Conversion functions between domain entities and storage models.
/// These functions follow the pattern convert_to_[target_layer]_[model_name].

/// Helper function to safely parse a string ID to UUID.
/// When an invalid UUID is provided, it returns a descriptive error message.
pub fn parse_string_to_uuid(id: &str) -> Result<Uuid, String> {
    Uuid::parse_str(id).map_err(|_| format!("Invalid UUID format: {}", id))
}

/// Convert from storage model to domain entity for a reading.
/// Fails when the record carries enum strings outside the known vocabulary,
/// e.g. after a hand-edited blob.
pub fn convert_to_domain_reading(record: ReadingRecord) -> Result<Reading, String> {
    let position: Position = record.position.parse()?;
    let category = record.category.parse()?;
    let symptoms = record
        .symptoms
        .iter()
        .map(|tag| tag.parse::<Symptom>())
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Reading {
        id: record.id,
        systolic: record.systolic,
        diastolic: record.diastolic,
        pulse: record.pulse,
        date: record.date,
        time: record.time,
        notes: record.notes,
        symptoms,
        position,
        category,
        gestational_week: record.gestational_week,
    })
}

/// Convert from domain entity to storage model for a reading
pub fn convert_to_data_reading(reading: &Reading) -> ReadingRecord {
    ReadingRecord {
        id: reading.id.clone(),
        systolic: reading.systolic,
        diastolic: reading.diastolic,
        pulse: reading.pulse,
        date: reading.date,
        time: reading.time,
        notes: reading.notes.clone(),
        symptoms: reading
            .symptoms
            .iter()
            .map(|s| s.as_str().to_string())
            .collect(),
        position: reading.position.as_str().to_string(),
        category: reading.category.as_str().to_string(),
        gestational_week: reading.gestational_week,
    }
}

/// Convert from storage model to domain entity for the user profile
pub fn convert_to_domain_profile(record: ProfileRecord) -> Result<UserProfile, String> {
    let reminder_frequency = record.reminder_frequency.parse()?;

    Ok(UserProfile {
        name: record.name,
        due_date: record.due_date,
        current_week: record.current_week,
        first_pregnancy: record.first_pregnancy,
        pre_existing_conditions: record.pre_existing_conditions,
        current_medications: record.current_medications,
        doctor_name: record.doctor_name,
        reminder_frequency,
    })
}

/// Convert from domain entity to storage model for the user profile
pub fn convert_to_data_profile(profile: &UserProfile) -> ProfileRecord {
    ProfileRecord {
        name: profile.name.clone(),
        due_date: profile.due_date,
        current_week: profile.current_week,
        first_pregnancy: profile.first_pregnancy,
        pre_existing_conditions: profile.pre_existing_conditions.clone(),
        current_medications: profile.current_medications.clone(),
        doctor_name: profile.doctor_name.clone(),
        reminder_frequency: profile.reminder_frequency.as_str().to_string(),
    }
}
