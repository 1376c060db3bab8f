//! Wire-to-domain mapping
//!
//! Narrows service players into domain players with a fixed field list.
//! Form, value, injury, chance-of-playing and AI score stay at the wire boundary.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::domain::{Player, SquadView};
use crate::ports::wire::{WirePlayer, WireSquadResult};

impl From<&WirePlayer> for Player {
    fn from(wire: &WirePlayer) -> Self {
        Player {
            id: wire.player_id,
            name: wire.name.clone(),
            position: wire.position.clone(),
            team: wire.team.clone(),
            cost: wire.price,
            total_points: wire.total_points,
            next_fixtures: wire.next_fixtures.clone(),
            recommendation: wire.recommendation.clone(),
        }
    }
}

/// One domain player per wire player, same order
pub fn map_players(wire_players: &[WirePlayer]) -> Vec<Player> {
    wire_players.iter().map(Player::from).collect()
}

/// Squad totals reported by the service
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SquadSummary {
    pub total_cost: f64,
    pub projected_points: f64,
    pub position_breakdown: BTreeMap<String, u32>,
}

/// Result of a successful submission
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SquadResult {
    pub players: Vec<Player>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub analysis: Option<String>,
    pub summary: SquadSummary,
}

impl SquadResult {
    pub fn from_wire(result: WireSquadResult) -> Self {
        Self {
            players: map_players(&result.selected_players),
            analysis: result.ai_analysis,
            summary: SquadSummary {
                total_cost: result.total_cost,
                projected_points: result.projected_points,
                position_breakdown: result.position_breakdown,
            },
        }
    }

    /// Position-grouped view, rebuilt from the player list on every call
    pub fn view(&self) -> SquadView {
        SquadView::build(&self.players, self.analysis.as_deref())
    }
}
