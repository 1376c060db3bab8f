//! Domain Layer - Core types for the squad generator client
//!
//! Pure types and transformations with no I/O:
//! - `constraints`: formations, raw form state and the request builder
//! - `player`: the internal player entity and recognized positions
//! - `squad_view`: position-grouped presentation model

pub mod constraints;
pub mod player;
pub mod squad_view;

pub use constraints::{parse_id_list, Formation, FormationParseError, SquadConstraints, SquadForm};
pub use player::{Player, Position};
pub use squad_view::{group_by_position, PositionGroups, SquadView};
