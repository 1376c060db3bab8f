//! Player domain entity

use std::fmt;

use serde::Serialize;

/// The four recognized playing positions, in pitch order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Position {
    Goalkeeper = 0,
    Defender = 1,
    Midfielder = 2,
    Forward = 3,
}

impl Position {
    pub const ALL: [Position; 4] = [
        Position::Goalkeeper,
        Position::Defender,
        Position::Midfielder,
        Position::Forward,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Position::Goalkeeper => "Goalkeeper",
            Position::Defender => "Defender",
            Position::Midfielder => "Midfielder",
            Position::Forward => "Forward",
        }
    }

    /// Exact, case-sensitive match against a position label
    pub fn from_label(label: &str) -> Option<Self> {
        Position::ALL.iter().copied().find(|p| p.label() == label)
    }

    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Internal player representation used for presentation.
///
/// `position` is kept verbatim from the service; grouping decides whether it
/// is one of the recognized labels.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub id: u64,
    pub name: String,
    pub position: String,
    pub team: String,
    /// Price in millions
    pub cost: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_points: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_fixtures: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recommendation: Option<String>,
}

impl Player {
    pub fn new(
        id: u64,
        name: impl Into<String>,
        position: impl Into<String>,
        team: impl Into<String>,
        cost: f64,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            position: position.into(),
            team: team.into(),
            cost,
            total_points: None,
            next_fixtures: None,
            recommendation: None,
        }
    }

    /// Recognized position, if the label is one of the four known ones
    pub fn recognized_position(&self) -> Option<Position> {
        Position::from_label(&self.position)
    }
}
