//! Squad Service Wire Schema
//!
//! JSON request and response structures exchanged with the squad generation
//! service. These types exist only at the network boundary.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::SquadConstraints;

/// Request body for the generate-squad endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WireSquadRequest {
    /// Budget in millions, sent as a JSON number
    #[serde(with = "rust_decimal::serde::float")]
    pub budget: Decimal,
    /// Formation label, e.g. "3-4-3"
    pub formation: String,
    pub must_have_players: Vec<u64>,
    pub excluded_players: Vec<u64>,
}

impl From<&SquadConstraints> for WireSquadRequest {
    fn from(constraints: &SquadConstraints) -> Self {
        Self {
            budget: constraints.budget,
            formation: constraints.formation.label().to_string(),
            must_have_players: constraints.must_have_player_ids.clone(),
            excluded_players: constraints.excluded_player_ids.clone(),
        }
    }
}

/// A selected player as returned by the service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WirePlayer {
    pub player_id: u64,
    pub name: String,
    pub position: String,
    pub team: String,
    /// Price in millions
    pub price: f64,
    #[serde(default)]
    pub total_points: Option<i64>,
    #[serde(default)]
    pub form: Option<f64>,
    #[serde(default)]
    pub value_for_money: Option<f64>,
    #[serde(default)]
    pub next_fixtures: Option<Vec<String>>,
    #[serde(default)]
    pub injury_status: Option<String>,
    /// Probability of playing next round, when the service knows it
    #[serde(default)]
    pub chance_of_playing: Option<f64>,
    #[serde(default)]
    pub ai_score: Option<f64>,
    /// BUY, HOLD, SELL or WATCH
    #[serde(default)]
    pub recommendation: Option<String>,
}

/// Response body for the generate-squad endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WireSquadResult {
    pub selected_players: Vec<WirePlayer>,
    pub total_cost: f64,
    pub projected_points: f64,
    #[serde(default)]
    pub ai_analysis: Option<String>,
    /// Position key to player count; keys kept exactly as sent
    #[serde(default)]
    pub position_breakdown: BTreeMap<String, u32>,
}
