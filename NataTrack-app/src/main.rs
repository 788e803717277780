use clap::Parser;

use nata_track_app::cli::Cli;
use nata_track_app::commands;
use nata_track_app::config::AppConfig;

fn main() -> anyhow::Result<()> {
    // Initialize logging with environment settings
    tracing_subscriber::fmt::init();

    // Load environment variables from .env file if it exists
    dotenv::dotenv().ok();

    let cli = Cli::parse();
    let config = AppConfig::from_env(cli.data_dir.clone());
    tracing::info!("Using data directory {}", config.data_dir.display());

    commands::run(cli, config)
}
