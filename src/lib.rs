//! Squad Client - Fantasy squad generator client library
//!
//! Collects squad constraints, submits them to the squad generation service
//! and presents the returned squad grouped by position.
//!
//! # Modules
//!
//! - `domain`: Core types (Formation, SquadConstraints, Player, SquadView)
//! - `ports`: Trait abstractions and wire schema (SquadServicePort)
//! - `adapters`: External implementations (Squad API, text renderer, CLI)
//! - `config`: Configuration loading and validation
//! - `application`: Wire-to-domain mapping and the page controller

pub mod domain;
pub mod ports;
pub mod adapters;
pub mod config;
pub mod application;
