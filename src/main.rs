//! Squad Client - Fantasy squad generator
//!
//! Submits squad constraints to the squad generation service and prints the result.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use squad_client::adapters::cli::{CliApp, Command, GenerateCmd};
use squad_client::adapters::render::{render_formations, render_page};
use squad_client::adapters::squad_api::SquadApiClient;
use squad_client::application::{PageController, PageState};
use squad_client::config::{load_config, load_config_or_default, Config, DEFAULT_CONFIG_PATH};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if it exists
    dotenvy::dotenv().ok();

    let app = CliApp::parse();

    match app.command {
        Command::Generate(cmd) => {
            let config = resolve_config(cmd.config.as_ref())?;
            init_logging(app.verbose, app.debug, Some(&config.logging.level))?;
            generate_command(cmd, config).await
        }
        Command::Formations => {
            init_logging(app.verbose, app.debug, None)?;
            print!("{}", render_formations());
            Ok(())
        }
    }
}

fn init_logging(verbose: bool, debug: bool, config_level: Option<&str>) -> Result<()> {
    let filter = if debug {
        EnvFilter::new("debug")
    } else if verbose {
        EnvFilter::new("info")
    } else if let Ok(filter) = EnvFilter::try_from_default_env() {
        filter
    } else {
        EnvFilter::new(config_level.unwrap_or("warn"))
    };

    // Logs go to stderr so --json output stays parseable
    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;
    Ok(())
}

/// Explicit config paths must exist; the default path falls back to built-in defaults
fn resolve_config(path: Option<&PathBuf>) -> Result<Config> {
    match path {
        Some(path) => {
            let expanded = shellexpand::tilde(&path.to_string_lossy()).to_string();
            load_config(&expanded)
                .with_context(|| format!("Failed to load configuration from '{}'", expanded))
        }
        None => load_config_or_default(DEFAULT_CONFIG_PATH)
            .context("Failed to load default configuration"),
    }
}

async fn generate_command(cmd: GenerateCmd, config: Config) -> Result<()> {
    let api_config = config
        .api_config(cmd.api_url.as_deref())
        .context("Invalid squad service URL")?;

    let client = SquadApiClient::with_config(api_config)
        .context("Failed to create squad API client")?;
    tracing::info!("Squad service endpoint: {}", client.generate_url());

    let controller = PageController::new(Arc::new(client));
    let form = cmd.to_form(config.form.budget, config.form.formation);

    let state = controller.submit(&form).await?;
    let snapshot = controller.snapshot().await;

    if cmd.json {
        let json = serde_json::to_string_pretty(&snapshot)
            .context("Failed to serialize page snapshot")?;
        println!("{}", json);
    } else {
        print!("{}", render_page(&snapshot));
    }

    if state == PageState::Failed {
        std::process::exit(1);
    }
    Ok(())
}
