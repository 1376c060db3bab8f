//! Application Layer
//!
//! Wire-to-domain mapping and the page controller that drives one
//! submission at a time.

pub mod mapper;
pub mod controller;

pub use mapper::{map_players, SquadResult, SquadSummary};
pub use controller::{ControllerError, PageController, PageSnapshot, PageState, GENERATE_FAILED_MESSAGE};
