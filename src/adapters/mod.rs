//! Adapters Layer - External System Implementations
//!
//! - Squad API: HTTP client for the squad generation service
//! - Render: terminal view of the page
//! - CLI: Command-line interface definitions

pub mod squad_api;
pub mod render;
pub mod cli;

pub use squad_api::SquadApiClient;
pub use cli::CliApp;
