// End-to-end command flow against a temporary data directory

use std::path::Path;

use clap::Parser;

use nata_track_app::cli::Cli;
use nata_track_app::commands;
use nata_track_app::config::AppConfig;
use nata_track_data::blob::FileBlobStore;
use nata_track_data::repository::{BlobReadingRepository, ReadingRepositoryTrait};
use nata_track_domain::auth::Session;

fn config(dir: &Path) -> AppConfig {
    AppConfig::with(
        dir.to_path_buf(),
        Session::signed_in(Some("ana@example.com".to_string())),
    )
}

fn run(dir: &Path, args: &[&str]) -> anyhow::Result<()> {
    let cli = Cli::parse_from(args);
    commands::run(cli, config(dir))
}

#[test]
fn onboard_add_export_flow() {
    let tmp = tempfile::tempdir().unwrap();
    let dir = tmp.path();

    run(
        dir,
        &[
            "natatrack",
            "onboard",
            "--name",
            "Ana Petrova",
            "--due-date",
            "2099-01-01",
            "--current-week",
            "8",
            "--first-pregnancy",
        ],
    )
    .unwrap();

    run(
        dir,
        &[
            "natatrack", "add", "--systolic", "118", "--diastolic", "74", "--pulse", "78",
        ],
    )
    .unwrap();
    run(
        dir,
        &[
            "natatrack",
            "add",
            "--systolic",
            "150",
            "--diastolic",
            "95",
            "--pulse",
            "88",
            "--symptom",
            "headache",
            "--notes",
            "felt dizzy standing up",
        ],
    )
    .unwrap();

    run(dir, &["natatrack", "list", "--all"]).unwrap();
    run(dir, &["natatrack", "stats"]).unwrap();
    run(dir, &["natatrack", "trend"]).unwrap();

    let out = dir.join("export.csv");
    run(
        dir,
        &["natatrack", "export", "--out", out.to_str().unwrap()],
    )
    .unwrap();

    let csv = std::fs::read_to_string(&out).unwrap();
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines.len(), 3); // header plus one row per reading
    assert!(lines[1].contains("\"Gestational HTN\"")); // newest first
    assert!(csv.contains("\"Headache\""));
}

#[test]
fn out_of_range_reading_is_rejected() {
    let tmp = tempfile::tempdir().unwrap();
    let dir = tmp.path();

    let result = run(
        dir,
        &[
            "natatrack", "add", "--systolic", "240", "--diastolic", "80", "--pulse", "70",
        ],
    );

    assert!(result.is_err());

    // Nothing may have been persisted
    let repo = BlobReadingRepository::load(FileBlobStore::new(dir)).unwrap();
    assert!(repo.all().unwrap().is_empty());
}

#[test]
fn general_ruleset_widens_the_accepted_range() {
    let tmp = tempfile::tempdir().unwrap();
    let dir = tmp.path();

    // 240 systolic is rejected for pregnancy but accepted generally
    run(
        dir,
        &[
            "natatrack",
            "--ruleset",
            "general",
            "add",
            "--systolic",
            "240",
            "--diastolic",
            "80",
            "--pulse",
            "70",
        ],
    )
    .unwrap();

    let repo = BlobReadingRepository::load(FileBlobStore::new(dir)).unwrap();
    let readings = repo.all().unwrap();
    assert_eq!(readings.len(), 1);
    assert_eq!(readings[0].category, "crisis");
}

#[test]
fn delete_removes_the_target_reading() {
    let tmp = tempfile::tempdir().unwrap();
    let dir = tmp.path();

    for systolic in ["118", "124", "130"] {
        run(
            dir,
            &[
                "natatrack", "add", "--systolic", systolic, "--diastolic", "78", "--pulse", "75",
            ],
        )
        .unwrap();
    }

    let repo = BlobReadingRepository::load(FileBlobStore::new(dir)).unwrap();
    let target = repo.all().unwrap()[1].id.clone();

    run(dir, &["natatrack", "delete", &target]).unwrap();

    let repo = BlobReadingRepository::load(FileBlobStore::new(dir)).unwrap();
    let remaining: Vec<u16> = repo.all().unwrap().iter().map(|r| r.systolic).collect();
    assert_eq!(remaining, vec![130, 118]);

    // Deleting a malformed identifier is a user error
    assert!(run(dir, &["natatrack", "delete", "not-a-uuid"]).is_err());
}

#[test]
fn signed_out_sessions_are_refused() {
    let tmp = tempfile::tempdir().unwrap();
    let cli = Cli::parse_from(["natatrack", "stats"]);
    let config = AppConfig::with(tmp.path().to_path_buf(), Session::signed_out());

    let result = commands::run(cli, config);

    assert!(result.is_err());
}
