use anyhow::{Context, Result};
use clap::Parser;
use std::path::Path;
use std::sync::Arc;

mod api;
mod breach;
mod cli;
mod core;
mod generators;
mod logging;
mod models;
mod strength;
mod utils;

use crate::cli::{Args, CliCommand};
use crate::core::config::Config;
use crate::core::PasswordService;

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables
    if Path::new(".env").exists() {
        dotenvy::dotenv().ok();
    }

    let args = Args::parse();

    let mut config = Config::load();
    if let Some(port) = args.api_port {
        config.web_port = port;
    }

    logging::init_logging(&config).context("Failed to initialise logging")?;
    log::debug!("Loaded config: {:?}", config);

    let service = Arc::new(
        PasswordService::from_config(&config).context("Failed to prepare password service")?,
    );

    match args.command.unwrap_or(CliCommand::Serve) {
        CliCommand::Serve => {
            log::info!("🔒 Starting PassGuard password analysis service");
            api::start_server(service, &config)
                .await
                .context("API server failed")?;
            log::info!("✅ PassGuard shutdown complete.");
        }
        CliCommand::Analyze { offline } => {
            cli::handlers::handle_analyze(&service, offline).await?;
        }
        CliCommand::Generate(generate) => {
            cli::handlers::handle_generate(&service, &generate)?;
        }
    }

    Ok(())
}
