//! CLI Adapter
//!
//! Command-line interface for the squad generator client.
//! Uses clap derive macros for argument parsing.

mod commands;

pub use commands::{CliApp, Command, GenerateCmd};
