//! CLI Commands
//!
//! Argument definitions for the squad generator client.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use rust_decimal::Decimal;

use crate::domain::{Formation, SquadForm};

/// Squad Client - Fantasy squad generator
#[derive(Parser, Debug)]
#[command(
    name = "squad-client",
    version = env!("CARGO_PKG_VERSION"),
    author = env!("CARGO_PKG_AUTHORS"),
    about = "Generate a fantasy squad from budget and formation constraints",
    long_about = "Squad Client submits a budget, a formation and must-have/excluded \
                  player IDs to the squad generation service and prints the returned \
                  squad grouped by position, followed by the service's analysis."
)]
pub struct CliApp {
    /// The command to execute
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Submit constraints and print the generated squad
    Generate(GenerateCmd),

    /// List the selectable formations
    Formations,
}

/// Generate a squad
#[derive(Parser, Debug)]
pub struct GenerateCmd {
    /// Path to configuration file (defaults apply when the default file is absent)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Budget in millions (overrides config)
    #[arg(short, long, value_name = "MILLIONS")]
    pub budget: Option<Decimal>,

    /// Formation, e.g. 3-4-3 (overrides config)
    #[arg(short, long, value_name = "FORMATION")]
    pub formation: Option<Formation>,

    /// Must-have player IDs, comma separated
    #[arg(short, long, value_name = "IDS", default_value = "")]
    pub must_have: String,

    /// Excluded player IDs, comma separated
    #[arg(short, long, value_name = "IDS", default_value = "")]
    pub excluded: String,

    /// Override squad service base URL
    #[arg(long, value_name = "URL")]
    pub api_url: Option<String>,

    /// Print the page snapshot as JSON instead of text
    #[arg(long)]
    pub json: bool,
}

impl GenerateCmd {
    /// Raw form state, falling back to configured defaults for budget and formation
    pub fn to_form(&self, default_budget: Decimal, default_formation: Formation) -> SquadForm {
        SquadForm::new(
            self.budget.unwrap_or(default_budget),
            self.formation.unwrap_or(default_formation),
        )
        .with_must_have(self.must_have.clone())
        .with_excluded(self.excluded.clone())
    }
}
