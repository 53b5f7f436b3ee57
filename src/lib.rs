//! # domino-engine
//!
//! A four-player double-six domino engine with partner teams and
//! interchangeable seat strategies.
//!
//! ## Design Principles
//!
//! 1. **Strategies read, the state machine writes**: every automated
//!    strategy is a pure function of a borrowed [`TableView`] returning a
//!    [`Decision`]. Only [`MatchState`] mutates hands and the chain.
//!
//! 2. **Reproducible from a seed**: the deal and all strategy randomness come
//!    from [`GameRng`] context streams, and ambiguous automated placements
//!    always take the left end.
//!
//! 3. **Tiles are owned once**: a tile lives in exactly one hand or on the
//!    chain. Hands plus chain always hold all 28.
//!
//! ## Modules
//!
//! - `core`: tiles, seats and teams, hands, RNG, configuration, errors
//! - `table`: the chain of played tiles and the play history
//! - `strategy`: Random, Win, Help, Block, AI and human move validation
//! - `rules`: the turn state machine (passes, going out, locked tables)
//! - `game`: match sessions, snapshots and batch simulation
//!
//! ## Example
//!
//! ```
//! use domino_engine::{new_game, MatchConfig};
//!
//! let mut game = new_game(MatchConfig::new().with_seed(1)).unwrap();
//! game.advance_automated_turns().unwrap();
//! assert!(game.status().winner().is_some());
//! ```

pub mod core;
pub mod table;
pub mod strategy;
pub mod rules;
pub mod game;

pub use crate::core::{
    ConfigError, EngineError, GameRng, Hand, MatchConfig, PlayError, Player, PlayerId, PlayerMap,
    Team, Tile, TileSet,
};

pub use crate::table::{Chain, Ends, Fit, PlayHistory, PlayRecord, Side};

pub use crate::strategy::{
    list_playable_tile_indices, Decision, PlayableTiles, Strategy, StrategyKind, TableView,
};

pub use crate::rules::{MatchState, MatchStatus, TeamTotals, TurnAction, TurnOutcome};

pub use crate::game::{new_game, simulate, Match, MatchSnapshot, SimulationSummary};
