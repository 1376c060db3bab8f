//! Squad Constraints
//!
//! Formation labels, the raw form state a user fills in, and the request
//! builder that turns that form state into `SquadConstraints`.

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Fixed set of formations offered to the user
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Formation {
    #[default]
    #[serde(rename = "3-4-3")]
    ThreeFourThree,
    #[serde(rename = "4-3-3")]
    FourThreeThree,
    #[serde(rename = "3-5-2")]
    ThreeFiveTwo,
    #[serde(rename = "5-5-3")]
    FiveFiveThree,
    #[serde(rename = "4-4-2")]
    FourFourTwo,
    #[serde(rename = "5-3-2")]
    FiveThreeTwo,
}

impl Formation {
    /// All formations, in the order they are offered
    pub const ALL: [Formation; 6] = [
        Formation::ThreeFourThree,
        Formation::FourThreeThree,
        Formation::ThreeFiveTwo,
        Formation::FiveFiveThree,
        Formation::FourFourTwo,
        Formation::FiveThreeTwo,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Formation::ThreeFourThree => "3-4-3",
            Formation::FourThreeThree => "4-3-3",
            Formation::ThreeFiveTwo => "3-5-2",
            Formation::FiveFiveThree => "5-5-3",
            Formation::FourFourTwo => "4-4-2",
            Formation::FiveThreeTwo => "5-3-2",
        }
    }

    /// Outfield line sizes as (defenders, midfielders, forwards)
    pub fn lines(&self) -> (u8, u8, u8) {
        match self {
            Formation::ThreeFourThree => (3, 4, 3),
            Formation::FourThreeThree => (4, 3, 3),
            Formation::ThreeFiveTwo => (3, 5, 2),
            Formation::FiveFiveThree => (5, 5, 3),
            Formation::FourFourTwo => (4, 4, 2),
            Formation::FiveThreeTwo => (5, 3, 2),
        }
    }
}

impl fmt::Display for Formation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown formation '{0}' (expected one of 3-4-3, 4-3-3, 3-5-2, 5-5-3, 4-4-2, 5-3-2)")]
pub struct FormationParseError(pub String);

impl FromStr for Formation {
    type Err = FormationParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let label = s.trim();
        Formation::ALL
            .iter()
            .copied()
            .find(|f| f.label() == label)
            .ok_or_else(|| FormationParseError(s.to_string()))
    }
}

/// Validated request payload sent to the squad service.
///
/// Must-have and excluded IDs may overlap; the service decides conflicts.
#[derive(Debug, Clone, PartialEq)]
pub struct SquadConstraints {
    /// Budget in millions
    pub budget: Decimal,
    pub formation: Formation,
    pub must_have_player_ids: Vec<u64>,
    pub excluded_player_ids: Vec<u64>,
}

/// Raw form state as typed by the user
#[derive(Debug, Clone, PartialEq)]
pub struct SquadForm {
    pub budget: Decimal,
    pub formation: Formation,
    /// Comma separated player IDs
    pub must_have: String,
    /// Comma separated player IDs
    pub excluded: String,
}

impl Default for SquadForm {
    fn default() -> Self {
        Self {
            budget: dec!(100),
            formation: Formation::default(),
            must_have: String::new(),
            excluded: String::new(),
        }
    }
}

impl SquadForm {
    pub fn new(budget: Decimal, formation: Formation) -> Self {
        Self {
            budget,
            formation,
            ..Self::default()
        }
    }

    pub fn with_must_have(mut self, ids: impl Into<String>) -> Self {
        self.must_have = ids.into();
        self
    }

    pub fn with_excluded(mut self, ids: impl Into<String>) -> Self {
        self.excluded = ids.into();
        self
    }

    /// Build the request payload. Budget is passed through unclamped.
    pub fn build(&self) -> SquadConstraints {
        SquadConstraints {
            budget: self.budget,
            formation: self.formation,
            must_have_player_ids: parse_id_list(&self.must_have),
            excluded_player_ids: parse_id_list(&self.excluded),
        }
    }
}

/// Best-effort parse of a comma separated ID list.
///
/// Tokens are trimmed; anything that is not a positive integer is dropped.
/// Input order is preserved and duplicates are kept.
pub fn parse_id_list(raw: &str) -> Vec<u64> {
    raw.split(',')
        .map(str::trim)
        .filter_map(|token| token.parse::<u64>().ok())
        .filter(|&id| id != 0)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_id_list_drops_malformed_tokens() {
        assert_eq!(parse_id_list("1, 2,x,3"), vec![1, 2, 3]);
    }

    #[test]
    fn test_parse_id_list_drops_zero_and_negative() {
        assert_eq!(parse_id_list("0, 5, -4, 6"), vec![5, 6]);
    }

    #[test]
    fn test_parse_id_list_empty_input() {
        assert!(parse_id_list("").is_empty());
        assert!(parse_id_list(" , ,").is_empty());
    }

    #[test]
    fn test_parse_id_list_keeps_order_and_duplicates() {
        assert_eq!(parse_id_list("9,3,9"), vec![9, 3, 9]);
    }

    #[test]
    fn test_parse_id_list_rejects_partial_numbers() {
        assert_eq!(parse_id_list("12abc, 1.5, 7"), vec![7]);
    }

    #[test]
    fn test_formation_round_trips_labels() {
        for formation in Formation::ALL {
            assert_eq!(formation.label().parse::<Formation>(), Ok(formation));
            assert_eq!(formation.to_string(), formation.label());
        }
    }

    #[test]
    fn test_formation_rejects_unknown_label() {
        let err = "4-2-4".parse::<Formation>().unwrap_err();
        assert_eq!(err, FormationParseError("4-2-4".to_string()));
    }

    #[test]
    fn test_formation_serializes_as_label() {
        let json = serde_json::to_string(&Formation::FiveThreeTwo).unwrap();
        assert_eq!(json, "\"5-3-2\"");

        let parsed: Formation = serde_json::from_str("\"4-4-2\"").unwrap();
        assert_eq!(parsed, Formation::FourFourTwo);
    }

    #[test]
    fn test_default_formation() {
        assert_eq!(Formation::default(), Formation::ThreeFourThree);
        assert_eq!(SquadForm::default().formation, Formation::ThreeFourThree);
    }

    #[test]
    fn test_formation_lines() {
        assert_eq!(Formation::FourFourTwo.lines(), (4, 4, 2));
        assert_eq!(Formation::FiveFiveThree.lines(), (5, 5, 3));
    }

    #[test]
    fn test_form_build() {
        let form = SquadForm::new(dec!(100), Formation::ThreeFourThree)
            .with_must_have("1, 2")
            .with_excluded("");

        let constraints = form.build();
        assert_eq!(constraints.budget, dec!(100));
        assert_eq!(constraints.formation, Formation::ThreeFourThree);
        assert_eq!(constraints.must_have_player_ids, vec![1, 2]);
        assert!(constraints.excluded_player_ids.is_empty());
    }

    #[test]
    fn test_form_build_passes_budget_through() {
        let constraints = SquadForm::new(dec!(-3.5), Formation::FourThreeThree).build();
        assert_eq!(constraints.budget, dec!(-3.5));
    }

    #[test]
    fn test_form_build_allows_overlap() {
        let constraints = SquadForm::default()
            .with_must_have("4")
            .with_excluded("4")
            .build();
        assert_eq!(constraints.must_have_player_ids, vec![4]);
        assert_eq!(constraints.excluded_player_ids, vec![4]);
    }
}
