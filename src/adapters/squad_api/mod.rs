//! Squad API Adapter
//!
//! Implementation of the SquadServicePort over HTTP.

mod client;

pub use client::{SquadApiClient, SquadApiConfig, DEFAULT_GENERATE_PATH};
