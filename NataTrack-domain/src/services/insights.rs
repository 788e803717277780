use serde::{Deserialize, Serialize};

use crate::entities::reading::{Category, Reading};

/// How many of the most recent readings feed the rolling averages
pub const AVERAGE_WINDOW: usize = 7;

/// How many readings the trend view shows by default
pub const TREND_WINDOW: usize = 30;

/// Rolling averages over the most recent readings
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct VitalAverages {
    /// Average systolic pressure, rounded to the nearest mmHg
    pub avg_systolic: u16,

    /// Average diastolic pressure, rounded to the nearest mmHg
    pub avg_diastolic: u16,

    /// Average pulse, rounded to the nearest bpm
    pub avg_pulse: u16,
}

/// One point of the oldest-first trend series
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TrendPoint {
    /// Short MM/DD label for the axis
    pub label: String,
    pub systolic: u16,
    pub diastolic: u16,
    pub pulse: u16,
    pub week: u8,
}

/// Average the first [`AVERAGE_WINDOW`] readings of the stored sequence.
///
/// The window is positional over the newest-first insertion order, not a
/// date window: a backdated entry still counts as recent. Returns `None`
/// for an empty collection.
pub fn recent_averages(readings: &[Reading]) -> Option<VitalAverages> {
    if readings.is_empty() {
        return None;
    }

    let recent = &readings[..readings.len().min(AVERAGE_WINDOW)];
    let count = recent.len() as f64;

    let avg = |sum: u32| (sum as f64 / count).round() as u16;

    Some(VitalAverages {
        avg_systolic: avg(recent.iter().map(|r| r.systolic as u32).sum()),
        avg_diastolic: avg(recent.iter().map(|r| r.diastolic as u32).sum()),
        avg_pulse: avg(recent.iter().map(|r| r.pulse as u32).sum()),
    })
}

/// Count readings whose stored category is stage 2 or crisis, over the whole
/// collection. Drives the advisory banner.
pub fn high_risk_count(readings: &[Reading]) -> usize {
    readings
        .iter()
        .filter(|r| matches!(r.category, Category::Stage2 | Category::Crisis))
        .count()
}

/// The most recent `window` readings as an oldest-first trend series
pub fn trend_points(readings: &[Reading], window: usize) -> Vec<TrendPoint> {
    readings
        .iter()
        .take(window)
        .rev()
        .map(|r| TrendPoint {
            label: r.date.format("%m/%d").to_string(),
            systolic: r.systolic,
            diastolic: r.diastolic,
            pulse: r.pulse,
            week: r.gestational_week,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, NaiveTime};

    use super::*;
    use crate::entities::reading::Position;

    fn reading(systolic: u16, diastolic: u16, pulse: u16, category: Category) -> Reading {
        Reading {
            id: format!("{}-{}", systolic, diastolic),
            systolic,
            diastolic,
            pulse,
            date: NaiveDate::from_ymd_opt(2025, 2, 14).unwrap(),
            time: NaiveTime::from_hms_opt(7, 0, 0).unwrap(),
            notes: None,
            symptoms: vec![],
            position: Position::Sitting,
            category,
            gestational_week: 25,
        }
    }

    #[test]
    fn test_empty_collection_has_no_averages() {
        assert!(recent_averages(&[]).is_none());
    }

    #[test]
    fn test_single_reading_averages_to_itself() {
        let readings = vec![reading(123, 81, 76, Category::Elevated)];
        let averages = recent_averages(&readings).unwrap();
        assert_eq!(
            averages,
            VitalAverages {
                avg_systolic: 123,
                avg_diastolic: 81,
                avg_pulse: 76,
            }
        );
    }

    #[test]
    fn test_only_first_seven_readings_are_averaged() {
        // Seven readings at 120 followed by three at 200; the window must
        // stop before the 200s
        let mut readings = vec![reading(120, 80, 70, Category::Normal); 7];
        readings.extend(vec![reading(200, 140, 140, Category::Crisis); 3]);

        let averages = recent_averages(&readings).unwrap();
        assert_eq!(averages.avg_systolic, 120);
        assert_eq!(averages.avg_diastolic, 80);
        assert_eq!(averages.avg_pulse, 70);
    }

    #[test]
    fn test_averages_round_half_up() {
        // 120 and 121 average to 120.5, which reports as 121
        let readings = vec![
            reading(120, 80, 70, Category::Normal),
            reading(121, 81, 71, Category::Normal),
        ];
        let averages = recent_averages(&readings).unwrap();
        assert_eq!(averages.avg_systolic, 121);
    }

    #[test]
    fn test_high_risk_counts_whole_collection() {
        let readings = vec![
            reading(120, 80, 70, Category::Normal),
            reading(145, 95, 80, Category::Stage2),
            reading(132, 86, 78, Category::Stage1),
            reading(165, 112, 90, Category::Crisis),
            reading(150, 98, 82, Category::Stage2),
        ];
        assert_eq!(high_risk_count(&readings), 3);
    }

    #[test]
    fn test_trend_is_oldest_first() {
        let readings = vec![
            reading(130, 85, 80, Category::Stage1), // newest
            reading(125, 82, 78, Category::Elevated),
            reading(118, 76, 72, Category::Normal), // oldest
        ];
        let points = trend_points(&readings, TREND_WINDOW);
        let systolics: Vec<u16> = points.iter().map(|p| p.systolic).collect();
        assert_eq!(systolics, vec![118, 125, 130]);
    }

    #[test]
    fn test_trend_window_truncates() {
        let readings = vec![reading(120, 80, 70, Category::Normal); 40];
        assert_eq!(trend_points(&readings, TREND_WINDOW).len(), 30);
    }
}
