//! Ports Layer - Trait definitions for external dependencies
//!
//! The squad generation service is the only external collaborator:
//! - `squad_service`: the gateway trait and its error type
//! - `wire`: JSON schema exchanged with the service
//! - `mocks`: scripted in-memory gateway for tests

pub mod squad_service;
pub mod wire;
pub mod mocks;

pub use squad_service::{GatewayError, SquadServicePort};
pub use wire::{WirePlayer, WireSquadRequest, WireSquadResult};
pub use mocks::ScriptedSquadService;
