use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use validator::Validate;

/// Which clinical threshold table governs classification and validation
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Ruleset {
    /// Standard adult guidelines
    General,

    /// Pregnancy-specific guidelines with stricter upper tiers
    Pregnancy,
}

impl Ruleset {
    /// Stable lowercase name used in logs and output
    pub fn as_str(&self) -> &'static str {
        match self {
            Ruleset::General => "general",
            Ruleset::Pregnancy => "pregnancy",
        }
    }
}

/// Clinical risk tier assigned to a reading
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Below every threshold
    Normal,

    /// Systolic at or above the watch threshold with diastolic still low
    Elevated,

    /// Stage 1 hypertension range
    Stage1,

    /// Stage 2 hypertension range
    Stage2,

    /// Hypertensive crisis range; needs immediate attention
    Crisis,
}

impl Category {
    /// Stable lowercase key used for persistence
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Normal => "normal",
            Category::Elevated => "elevated",
            Category::Stage1 => "stage1",
            Category::Stage2 => "stage2",
            Category::Crisis => "crisis",
        }
    }

    /// User-facing label; pregnancy tiers carry their own clinical wording
    pub fn label(&self, ruleset: Ruleset) -> &'static str {
        match ruleset {
            Ruleset::General => match self {
                Category::Normal => "Normal",
                Category::Elevated => "Elevated",
                Category::Stage1 => "Stage 1 High",
                Category::Stage2 => "Stage 2 High",
                Category::Crisis => "Crisis",
            },
            Ruleset::Pregnancy => match self {
                Category::Normal => "Normal",
                Category::Elevated => "Watch Zone",
                Category::Stage1 => "Gestational HTN Risk",
                Category::Stage2 => "Gestational HTN",
                Category::Crisis => "Severe - Call Doctor",
            },
        }
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "normal" => Ok(Category::Normal),
            "elevated" => Ok(Category::Elevated),
            "stage1" => Ok(Category::Stage1),
            "stage2" => Ok(Category::Stage2),
            "crisis" => Ok(Category::Crisis),
            _ => Err(format!("Unknown risk category: {}", s)),
        }
    }
}

/// Body position during measurement
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Position {
    Sitting,
    Lying,
    Standing,
}

impl Position {
    /// Stable lowercase key used for persistence
    pub fn as_str(&self) -> &'static str {
        match self {
            Position::Sitting => "sitting",
            Position::Lying => "lying",
            Position::Standing => "standing",
        }
    }
}

impl FromStr for Position {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "sitting" => Ok(Position::Sitting),
            "lying" => Ok(Position::Lying),
            "standing" => Ok(Position::Standing),
            _ => Err(format!("Unknown measurement position: {}", s)),
        }
    }
}

/// Symptom tag from the fixed vocabulary offered at entry time
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Symptom {
    #[serde(rename = "Headache")]
    Headache,
    #[serde(rename = "Dizziness")]
    Dizziness,
    #[serde(rename = "Blurred vision")]
    BlurredVision,
    #[serde(rename = "Nausea")]
    Nausea,
    #[serde(rename = "Swelling in hands/feet")]
    Swelling,
    #[serde(rename = "Chest pain")]
    ChestPain,
    #[serde(rename = "Shortness of breath")]
    ShortnessOfBreath,
    #[serde(rename = "Upper abdominal pain")]
    UpperAbdominalPain,
    #[serde(rename = "Sudden weight gain")]
    SuddenWeightGain,
}

impl Symptom {
    /// The full selectable vocabulary, in presentation order
    pub const ALL: [Symptom; 9] = [
        Symptom::Headache,
        Symptom::Dizziness,
        Symptom::BlurredVision,
        Symptom::Nausea,
        Symptom::Swelling,
        Symptom::ChestPain,
        Symptom::ShortnessOfBreath,
        Symptom::UpperAbdominalPain,
        Symptom::SuddenWeightGain,
    ];

    /// User-facing text, also the persisted representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Symptom::Headache => "Headache",
            Symptom::Dizziness => "Dizziness",
            Symptom::BlurredVision => "Blurred vision",
            Symptom::Nausea => "Nausea",
            Symptom::Swelling => "Swelling in hands/feet",
            Symptom::ChestPain => "Chest pain",
            Symptom::ShortnessOfBreath => "Shortness of breath",
            Symptom::UpperAbdominalPain => "Upper abdominal pain",
            Symptom::SuddenWeightGain => "Sudden weight gain",
        }
    }

    /// Short flag-friendly name accepted on the command line
    pub fn slug(&self) -> &'static str {
        match self {
            Symptom::Headache => "headache",
            Symptom::Dizziness => "dizziness",
            Symptom::BlurredVision => "blurred-vision",
            Symptom::Nausea => "nausea",
            Symptom::Swelling => "swelling",
            Symptom::ChestPain => "chest-pain",
            Symptom::ShortnessOfBreath => "shortness-of-breath",
            Symptom::UpperAbdominalPain => "abdominal-pain",
            Symptom::SuddenWeightGain => "weight-gain",
        }
    }
}

impl FromStr for Symptom {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.to_ascii_lowercase();
        Symptom::ALL
            .iter()
            .find(|symptom| {
                needle == symptom.slug() || needle == symptom.as_str().to_ascii_lowercase()
            })
            .copied()
            .ok_or_else(|| format!("Unknown symptom tag: {}", s))
    }
}

/// Domain model for a recorded blood pressure reading
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Reading {
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

    /// Symptoms experienced around measurement time
    pub symptoms: Vec<Symptom>,

    /// Position during measurement
    pub position: Position,

    /// Risk category computed from the vitals at creation; never user-set
    pub category: Category,

    /// Gestational week snapshot taken at creation and frozen thereafter
    pub gestational_week: u8,
}

/// Request payload for recording a new blood pressure reading
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateReadingRequest {
    /// Systolic blood pressure (the higher number)
    pub systolic: u16,

    /// Diastolic blood pressure (the lower number)
    pub diastolic: u16,

    /// Pulse rate in beats per minute
    pub pulse: u16,

    /// Calendar date of the measurement
    pub date: NaiveDate,

    /// Time of day of the measurement
    pub time: NaiveTime,

    /// Optional notes about the reading
    #[validate(length(max = 1000, message = "Notes cannot exceed 1000 characters"))]
    pub notes: Option<String>,

    /// Symptoms experienced around measurement time
    pub symptoms: Vec<Symptom>,

    /// Position during measurement
    pub position: Position,
}
