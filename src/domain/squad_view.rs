//! Position-grouped presentation model
//!
//! Derived fresh from a player list on every successful response; it holds
//! no state of its own.

use super::player::{Player, Position};

/// Players partitioned by recognized position, input order kept per bucket
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PositionGroups {
    buckets: [Vec<Player>; 4],
}

impl PositionGroups {
    pub fn get(&self, position: Position) -> &[Player] {
        &self.buckets[position.index()]
    }

    /// Buckets in pitch order, empty ones included
    pub fn iter(&self) -> impl Iterator<Item = (Position, &[Player])> + '_ {
        Position::ALL.into_iter().map(move |p| (p, self.get(p)))
    }

    /// Number of grouped players
    pub fn len(&self) -> usize {
        self.buckets.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Partition players into the four position buckets.
///
/// Players whose position is not an exact recognized label are left out.
pub fn group_by_position(players: &[Player]) -> PositionGroups {
    let mut groups = PositionGroups::default();
    for player in players {
        if let Some(position) = player.recognized_position() {
            groups.buckets[position.index()].push(player.clone());
        }
    }
    groups
}

/// What the view renders for a successful squad
#[derive(Debug, Clone, PartialEq)]
pub struct SquadView {
    pub groups: PositionGroups,
    pub analysis: Option<String>,
}

impl SquadView {
    pub fn build(players: &[Player], analysis: Option<&str>) -> Self {
        Self {
            groups: group_by_position(players),
            analysis: analysis.map(str::to_string),
        }
    }
}
