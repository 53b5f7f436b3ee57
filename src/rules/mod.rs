//! Match rules: turn order, passing, going out and locked tables.
//!
//! Strategies only propose moves. `MatchState` is the single place where a
//! decision becomes a mutation of hands, the chain and the counters.

pub mod turn;

pub use turn::{MatchState, MatchStatus, TeamTotals, TurnAction, TurnOutcome};
