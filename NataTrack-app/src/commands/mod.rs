// Command handler module structure
pub mod profile;
pub mod readings;

use anyhow::Context;

use nata_track_data::blob::FileBlobStore;
use nata_track_data::repository::{BlobProfileRepository, BlobReadingRepository};
use nata_track_domain::entities::Ruleset;
use nata_track_domain::services::{ProfileService, ReadingService, SystemClock};

use crate::cli::{Cli, Command};
use crate::config::AppConfig;

/// Dispatch a parsed command line against the configured data directory
pub fn run(cli: Cli, config: AppConfig) -> anyhow::Result<()> {
    if !config.session.signed_in {
        anyhow::bail!("You are signed out. Sign in through your identity provider first.");
    }

    let ruleset = cli.ruleset.into();

    match cli.command {
        Command::Onboard(args) => profile::onboard(&config, args),
        Command::Add(args) => readings::add(&config, ruleset, args),
        Command::List { all, format } => readings::list(&config, ruleset, all, format),
        Command::Delete { id } => readings::delete(&config, ruleset, &id),
        Command::Stats { format } => readings::stats(&config, ruleset, format),
        Command::Trend => readings::trend(&config, ruleset),
        Command::Guidelines => readings::guidelines(ruleset),
        Command::Export { out } => readings::export(&config, ruleset, out),
    }
}

/// Reading service wired to the file-backed blob store
pub(crate) fn reading_service(
    config: &AppConfig,
    ruleset: Ruleset,
) -> anyhow::Result<
    ReadingService<
        BlobReadingRepository<FileBlobStore>,
        BlobProfileRepository<FileBlobStore>,
        SystemClock,
    >,
> {
    let store = FileBlobStore::new(&config.data_dir);
    let readings = BlobReadingRepository::load(store.clone())
        .with_context(|| format!("Failed to load readings from {}", config.data_dir.display()))?;
    let profiles = BlobProfileRepository::new(store);

    Ok(ReadingService::new(
        readings,
        profiles,
        SystemClock,
        ruleset,
    ))
}

/// Profile service wired to the file-backed blob store
pub(crate) fn profile_service(
    config: &AppConfig,
) -> ProfileService<BlobProfileRepository<FileBlobStore>, SystemClock> {
    ProfileService::new(
        BlobProfileRepository::new(FileBlobStore::new(&config.data_dir)),
        SystemClock,
    )
}
