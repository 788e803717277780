use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use serde::Serialize;

use nata_track_domain::auth::greeting_name;
use nata_track_domain::entities::{Reading, Ruleset};
use nata_track_domain::services::clock::Clock;
use nata_track_domain::services::export::export_filename;
use nata_track_domain::services::insights::VitalAverages;
use nata_track_domain::services::{Advisory, SystemClock};

use crate::cli::{AddArgs, FormatArg};
use crate::config::AppConfig;

use super::{profile_service, reading_service};

/// How many readings `list` shows without `--all`
const LIST_LIMIT: usize = 10;

/// Handle `natatrack add`
pub fn add(config: &AppConfig, ruleset: Ruleset, args: AddArgs) -> anyhow::Result<()> {
    let service = reading_service(config, ruleset)?;
    let clock = SystemClock;

    let request = nata_track_domain::entities::CreateReadingRequest {
        systolic: args.systolic,
        diastolic: args.diastolic,
        pulse: args.pulse,
        date: args.date.unwrap_or_else(|| clock.today()),
        time: args.time.unwrap_or_else(|| clock.time_of_day()),
        notes: args.notes,
        symptoms: args.symptoms.into_iter().map(Into::into).collect(),
        position: args.position.into(),
    };

    let reading = service.create(request)?;

    println!(
        "Recorded {}/{} mmHg, pulse {} bpm - {} (week {})",
        reading.systolic,
        reading.diastolic,
        reading.pulse,
        reading.category.label(ruleset),
        reading.gestational_week
    );
    println!("ID: {}", reading.id);

    if let Some(advisory) = Advisory::for_category(reading.category) {
        println!();
        println!("{}", advisory.message());
    }

    Ok(())
}

/// Handle `natatrack list`
pub fn list(config: &AppConfig, ruleset: Ruleset, all: bool, format: FormatArg) -> anyhow::Result<()> {
    let service = reading_service(config, ruleset)?;
    let readings = service.list()?;

    if let FormatArg::Json = format {
        println!("{}", serde_json::to_string_pretty(&readings)?);
        return Ok(());
    }

    if readings.is_empty() {
        println!("No readings recorded yet. Add your first reading with `natatrack add`.");
        return Ok(());
    }

    let shown = if all {
        readings.len()
    } else {
        readings.len().min(LIST_LIMIT)
    };

    println!("Recent readings ({} total)", readings.len());
    for reading in &readings[..shown] {
        print_reading(reading, ruleset);
    }

    if readings.len() > shown {
        println!("... and {} more readings (use --all)", readings.len() - shown);
    }

    Ok(())
}

fn print_reading(reading: &Reading, ruleset: Ruleset) {
    println!(
        "{} {}  {}/{} mmHg  pulse {}  week {}  {}  [{}]",
        reading.date,
        reading.time.format("%H:%M"),
        reading.systolic,
        reading.diastolic,
        reading.pulse,
        reading.gestational_week,
        reading.category.label(ruleset),
        reading.id
    );
    println!("    Position: {}", reading.position.as_str());
    if !reading.symptoms.is_empty() {
        let tags: Vec<&str> = reading.symptoms.iter().map(|s| s.as_str()).collect();
        println!("    Symptoms: {}", tags.join(", "));
    }
    if let Some(notes) = &reading.notes {
        println!("    \"{}\"", notes);
    }
}

/// Handle `natatrack delete`
pub fn delete(config: &AppConfig, ruleset: Ruleset, id: &str) -> anyhow::Result<()> {
    let service = reading_service(config, ruleset)?;
    service.delete(id)?;
    println!("Removed reading {}", id);
    Ok(())
}

/// JSON shape of the `stats` output
#[derive(Debug, Serialize)]
struct StatsReport {
    name: String,
    total_readings: usize,
    averages: Option<VitalAverages>,
    pregnancy_week: u8,
    high_risk_readings: usize,
}

/// Handle `natatrack stats`
pub fn stats(config: &AppConfig, ruleset: Ruleset, format: FormatArg) -> anyhow::Result<()> {
    let readings = reading_service(config, ruleset)?;
    let profiles = profile_service(config);

    let profile = profiles.load()?;
    let all = readings.list()?;
    let report = StatsReport {
        name: greeting_name(profile.as_ref().map(|p| p.name.as_str()), &config.session)
            .to_string(),
        total_readings: all.len(),
        averages: readings.averages()?,
        pregnancy_week: profiles.display_week()?,
        high_risk_readings: readings.high_risk_count()?,
    };

    if let FormatArg::Json = format {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!(
        "Welcome back, {}! Week {} of pregnancy.",
        report.name, report.pregnancy_week
    );
    println!();
    println!("Total readings:     {}", report.total_readings);
    match report.averages {
        Some(avg) => println!(
            "7-reading average:  {}/{} mmHg, pulse {} bpm",
            avg.avg_systolic, avg.avg_diastolic, avg.avg_pulse
        ),
        None => println!("7-reading average:  --"),
    }
    println!("High-risk readings: {}", report.high_risk_readings);

    if report.high_risk_readings > 0 {
        let plural = if report.high_risk_readings > 1 { "s" } else { "" };
        println!();
        println!(
            "You have {} high-risk blood pressure reading{}. Please discuss \
             these with your healthcare provider at your next appointment.",
            report.high_risk_readings, plural
        );
    }

    Ok(())
}

/// Handle `natatrack trend`
pub fn trend(config: &AppConfig, ruleset: Ruleset) -> anyhow::Result<()> {
    let service = reading_service(config, ruleset)?;
    let points = service.trend()?;

    if points.is_empty() {
        println!("No readings recorded yet.");
        return Ok(());
    }

    println!("Date   Sys/Dia  Pulse  Week");
    for point in points {
        println!(
            "{}  {:>3}/{:<3}  {:>5}  {:>4}",
            point.label, point.systolic, point.diastolic, point.pulse, point.week
        );
    }

    Ok(())
}

/// Handle `natatrack guidelines`
pub fn guidelines(ruleset: Ruleset) -> anyhow::Result<()> {
    use nata_track_domain::entities::Category;

    let t = ruleset.thresholds();

    println!("Blood pressure guidelines ({} rule set)", ruleset.as_str());
    println!();
    println!(
        "{:<22} below {}/{} mmHg",
        Category::Normal.label(ruleset),
        t.elevated_systolic,
        t.elevated_diastolic_below
    );
    println!(
        "{:<22} {}-{} systolic with diastolic under {}",
        Category::Elevated.label(ruleset),
        t.elevated_systolic,
        t.stage1_systolic - 1,
        t.elevated_diastolic_below
    );
    println!(
        "{:<22} {}-{} systolic or {}-{} diastolic",
        Category::Stage1.label(ruleset),
        t.stage1_systolic,
        t.stage2_systolic - 1,
        t.stage1_diastolic,
        t.stage2_diastolic - 1
    );
    println!(
        "{:<22} {}-{} systolic or {}-{} diastolic",
        Category::Stage2.label(ruleset),
        t.stage2_systolic,
        t.crisis_systolic - 1,
        t.stage2_diastolic,
        t.crisis_diastolic - 1
    );
    println!(
        "{:<22} {}+ systolic or {}+ diastolic",
        Category::Crisis.label(ruleset),
        t.crisis_systolic,
        t.crisis_diastolic
    );

    if let Ruleset::Pregnancy = ruleset {
        println!();
        println!(
            "Important: contact your healthcare provider immediately if you \
             have severe symptoms like severe headache, vision changes, upper \
             abdominal pain, or sudden swelling."
        );
    }

    Ok(())
}

/// Handle `natatrack export`
pub fn export(config: &AppConfig, ruleset: Ruleset, out: Option<PathBuf>) -> anyhow::Result<()> {
    let readings = reading_service(config, ruleset)?;
    let profiles = profile_service(config);

    let csv = readings.export_csv()?;
    let count = readings.list()?.len();

    let path = match out {
        Some(path) => path,
        None => {
            let profile = profiles.load()?;
            PathBuf::from(export_filename(
                profile.as_ref().map(|p| p.name.as_str()),
                SystemClock.today(),
            ))
        }
    };

    fs::write(&path, csv).with_context(|| format!("Failed to write {}", path.display()))?;
    println!("Exported {} readings to {}", count, path.display());

    Ok(())
}
