use std::path::PathBuf;

use chrono::{NaiveDate, NaiveTime};
use clap::{Args, Parser, Subcommand, ValueEnum};

use nata_track_domain::entities::{Position, ReminderFrequency, Ruleset, Symptom};

#[derive(Parser, Debug)]
#[command(name = "natatrack", version, disable_help_subcommand = true)]
#[command(about = "Local-first pregnancy blood pressure tracker")]
pub struct Cli {
    /// Directory holding the persisted data (defaults to ~/.natatrack)
    #[arg(long)]
    pub data_dir: Option<PathBuf>,

    /// Threshold table used for validation and classification
    #[arg(long, value_enum, default_value_t = RulesetArg::Pregnancy)]
    pub ruleset: RulesetArg,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the onboarding questionnaire (re-running overwrites the profile)
    Onboard(OnboardArgs),

    /// Record a new blood pressure reading
    Add(AddArgs),

    /// Show recorded readings, newest first
    List {
        /// Show every reading instead of the ten most recent
        #[arg(long, default_value_t = false)]
        all: bool,
        #[arg(long, value_enum, default_value_t = FormatArg::Text)]
        format: FormatArg,
    },

    /// Delete one reading by its identifier
    Delete {
        /// Identifier printed by `list`
        id: String,
    },

    /// Show totals, rolling averages, pregnancy week, and high-risk count
    Stats {
        #[arg(long, value_enum, default_value_t = FormatArg::Text)]
        format: FormatArg,
    },

    /// Show the recent readings as an oldest-first trend table
    Trend,

    /// Print the clinical threshold table for the active rule set
    Guidelines,

    /// Write the readings to a CSV file for the care provider
    Export {
        /// Target path (defaults to a dated filename in the working directory)
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

#[derive(Args, Debug)]
pub struct OnboardArgs {
    /// Display name
    #[arg(long)]
    pub name: String,

    /// Estimated due date (YYYY-MM-DD)
    #[arg(long)]
    pub due_date: NaiveDate,

    /// Self-reported pregnancy week, if known
    #[arg(long)]
    pub current_week: Option<u8>,

    /// Whether this is the first pregnancy
    #[arg(long, default_value_t = false)]
    pub first_pregnancy: bool,

    /// Free-text pre-existing conditions
    #[arg(long)]
    pub conditions: Option<String>,

    /// Free-text current medications
    #[arg(long)]
    pub medications: Option<String>,

    /// Care provider name
    #[arg(long)]
    pub doctor: Option<String>,

    /// Reminder frequency preference
    #[arg(long, value_enum, default_value_t = ReminderArg::Daily)]
    pub reminders: ReminderArg,
}

#[derive(Args, Debug)]
pub struct AddArgs {
    /// Systolic pressure in mmHg
    #[arg(long)]
    pub systolic: u16,

    /// Diastolic pressure in mmHg
    #[arg(long)]
    pub diastolic: u16,

    /// Pulse in beats per minute
    #[arg(long)]
    pub pulse: u16,

    /// Measurement date (YYYY-MM-DD, defaults to today)
    #[arg(long)]
    pub date: Option<NaiveDate>,

    /// Measurement time (HH:MM, defaults to now)
    #[arg(long, value_parser = parse_time)]
    pub time: Option<NaiveTime>,

    /// Position during measurement
    #[arg(long, value_enum, default_value_t = PositionArg::Sitting)]
    pub position: PositionArg,

    /// Symptom tag; repeat the flag for several symptoms
    #[arg(long = "symptom", value_enum)]
    pub symptoms: Vec<SymptomArg>,

    /// Notes about the reading
    #[arg(long)]
    pub notes: Option<String>,
}

/// Accept `HH:MM` the way the entry form did, plus `HH:MM:SS`
fn parse_time(s: &str) -> Result<NaiveTime, String> {
    NaiveTime::parse_from_str(s, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(s, "%H:%M:%S"))
        .map_err(|_| format!("Invalid time '{}', expected HH:MM", s))
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatArg {
    Text,
    Json,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RulesetArg {
    General,
    Pregnancy,
}

impl From<RulesetArg> for Ruleset {
    fn from(arg: RulesetArg) -> Self {
        match arg {
            RulesetArg::General => Ruleset::General,
            RulesetArg::Pregnancy => Ruleset::Pregnancy,
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PositionArg {
    Sitting,
    Lying,
    Standing,
}

impl From<PositionArg> for Position {
    fn from(arg: PositionArg) -> Self {
        match arg {
            PositionArg::Sitting => Position::Sitting,
            PositionArg::Lying => Position::Lying,
            PositionArg::Standing => Position::Standing,
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymptomArg {
    Headache,
    Dizziness,
    BlurredVision,
    Nausea,
    Swelling,
    ChestPain,
    ShortnessOfBreath,
    AbdominalPain,
    WeightGain,
}

impl From<SymptomArg> for Symptom {
    fn from(arg: SymptomArg) -> Self {
        match arg {
            SymptomArg::Headache => Symptom::Headache,
            SymptomArg::Dizziness => Symptom::Dizziness,
            SymptomArg::BlurredVision => Symptom::BlurredVision,
            SymptomArg::Nausea => Symptom::Nausea,
            SymptomArg::Swelling => Symptom::Swelling,
            SymptomArg::ChestPain => Symptom::ChestPain,
            SymptomArg::ShortnessOfBreath => Symptom::ShortnessOfBreath,
            SymptomArg::AbdominalPain => Symptom::UpperAbdominalPain,
            SymptomArg::WeightGain => Symptom::SuddenWeightGain,
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReminderArg {
    Daily,
    TwiceDaily,
    Weekly,
    None,
}

impl From<ReminderArg> for ReminderFrequency {
    fn from(arg: ReminderArg) -> Self {
        match arg {
            ReminderArg::Daily => ReminderFrequency::Daily,
            ReminderArg::TwiceDaily => ReminderFrequency::TwiceDaily,
            ReminderArg::Weekly => ReminderFrequency::Weekly,
            ReminderArg::None => ReminderFrequency::None,
        }
    }
}
