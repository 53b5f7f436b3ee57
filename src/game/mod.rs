//! Running matches: the session a front end drives, and batch simulation.

pub mod session;
pub mod simulate;

pub use session::{new_game, Match, MatchSnapshot, PlayerSnapshot, FIRST_SEAT, HAND_SIZE};
pub use simulate::{simulate, SimulationSummary, TeamWins};
