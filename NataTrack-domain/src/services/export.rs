use chrono::NaiveDate;
use csv::{QuoteStyle, WriterBuilder};
use thiserror::Error;

use crate::entities::reading::{Reading, Ruleset};

/// Column order of the exported CSV
pub const EXPORT_HEADER: [&str; 10] = [
    "Date",
    "Time",
    "Systolic",
    "Diastolic",
    "Pulse",
    "Category",
    "Position",
    "Pregnancy Week",
    "Symptoms",
    "Notes",
];

/// Separator between symptom tags inside the single Symptoms cell
const SYMPTOM_SEPARATOR: &str = "; ";

/// Filename stem used when no profile name is available
const ANONYMOUS_STEM: &str = "patient";

/// Export formatting errors
#[derive(Error, Debug)]
pub enum ExportError {
    /// CSV writer error
    #[error("CSV write error: {0}")]
    Csv(#[from] csv::Error),

    /// Buffer extraction error
    #[error("CSV buffer error: {0}")]
    Buffer(String),
}

/// Serialize the reading collection to CSV, one row per reading in the
/// sequence's current (newest-first) order.
///
/// Every cell is quoted, including the header; embedded quotes are doubled
/// per RFC 4180. The category column carries the rule-set-specific display
/// label so the file reads the same way the app does.
pub fn to_csv(readings: &[Reading], ruleset: Ruleset) -> Result<String, ExportError> {
    let mut writer = WriterBuilder::new()
        .quote_style(QuoteStyle::Always)
        .from_writer(Vec::new());

    writer.write_record(EXPORT_HEADER)?;

    for reading in readings {
        let symptoms = reading
            .symptoms
            .iter()
            .map(|s| s.as_str())
            .collect::<Vec<_>>()
            .join(SYMPTOM_SEPARATOR);

        writer.write_record([
            reading.date.format("%Y-%m-%d").to_string(),
            reading.time.format("%H:%M").to_string(),
            reading.systolic.to_string(),
            reading.diastolic.to_string(),
            reading.pulse.to_string(),
            reading.category.label(ruleset).to_string(),
            reading.position.as_str().to_string(),
            reading.gestational_week.to_string(),
            symptoms,
            reading.notes.clone().unwrap_or_default(),
        ])?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| ExportError::Buffer(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| ExportError::Buffer(e.to_string()))
}

/// Build the download filename: the profile name with whitespace collapsed
/// to hyphens, or `patient` when absent, plus the current date.
pub fn export_filename(profile_name: Option<&str>, today: NaiveDate) -> String {
    let stem = match profile_name {
        Some(name) if !name.trim().is_empty() => {
            name.split_whitespace().collect::<Vec<_>>().join("-")
        }
        _ => ANONYMOUS_STEM.to_string(),
    };

    format!(
        "pregnancy-bp-readings-{}-{}.csv",
        stem,
        today.format("%Y-%m-%d")
    )
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, NaiveTime};

    use super::*;
    use crate::entities::reading::{Category, Position, Symptom};

    fn reading(id: &str, notes: Option<&str>, symptoms: Vec<Symptom>) -> Reading {
        Reading {
            id: id.to_string(),
            systolic: 142,
            diastolic: 92,
            pulse: 88,
            date: NaiveDate::from_ymd_opt(2025, 7, 4).unwrap(),
            time: NaiveTime::from_hms_opt(18, 5, 0).unwrap(),
            notes: notes.map(str::to_string),
            symptoms,
            position: Position::Standing,
            category: Category::Stage2,
            gestational_week: 33,
        }
    }

    #[test]
    fn test_header_and_one_row_per_reading_in_order() {
        let readings = vec![
            reading("b", None, vec![]),
            reading("a", Some("first entry"), vec![]),
        ];

        let csv = to_csv(&readings, Ruleset::Pregnancy).unwrap();
        let lines: Vec<&str> = csv.lines().collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(
            lines[0],
            "\"Date\",\"Time\",\"Systolic\",\"Diastolic\",\"Pulse\",\"Category\",\"Position\",\"Pregnancy Week\",\"Symptoms\",\"Notes\""
        );
        // Rows come out in the collection's stored order
        assert!(lines[1].ends_with("\"\""));
        assert!(lines[2].ends_with("\"first entry\""));
    }

    #[test]
    fn test_every_cell_is_quoted() {
        let csv = to_csv(&[reading("a", None, vec![])], Ruleset::Pregnancy).unwrap();
        let row = csv.lines().nth(1).unwrap();

        assert_eq!(
            row,
            "\"2025-07-04\",\"18:05\",\"142\",\"92\",\"88\",\"Gestational HTN\",\"standing\",\"33\",\"\",\"\""
        );
    }

    #[test]
    fn test_symptoms_join_inside_one_cell() {
        let csv = to_csv(
            &[reading(
                "a",
                None,
                vec![Symptom::Headache, Symptom::Swelling, Symptom::Nausea],
            )],
            Ruleset::Pregnancy,
        )
        .unwrap();

        assert!(csv.contains("\"Headache; Swelling in hands/feet; Nausea\""));
    }

    #[test]
    fn test_embedded_quotes_are_doubled() {
        let csv = to_csv(
            &[reading("a", Some("felt \"off\" today"), vec![])],
            Ruleset::Pregnancy,
        )
        .unwrap();

        assert!(csv.contains("\"felt \"\"off\"\" today\""));
    }

    #[test]
    fn test_category_label_follows_ruleset() {
        let pregnancy = to_csv(&[reading("a", None, vec![])], Ruleset::Pregnancy).unwrap();
        let general = to_csv(&[reading("a", None, vec![])], Ruleset::General).unwrap();

        assert!(pregnancy.contains("\"Gestational HTN\""));
        assert!(general.contains("\"Stage 2 High\""));
    }

    #[test]
    fn test_filename_hyphenates_whitespace() {
        let today = NaiveDate::from_ymd_opt(2025, 7, 4).unwrap();
        assert_eq!(
            export_filename(Some("Maria  da Silva"), today),
            "pregnancy-bp-readings-Maria-da-Silva-2025-07-04.csv"
        );
    }

    #[test]
    fn test_filename_falls_back_to_patient() {
        let today = NaiveDate::from_ymd_opt(2025, 7, 4).unwrap();
        assert_eq!(
            export_filename(None, today),
            "pregnancy-bp-readings-patient-2025-07-04.csv"
        );
        assert_eq!(
            export_filename(Some("   "), today),
            "pregnancy-bp-readings-patient-2025-07-04.csv"
        );
    }
}
