//! Core engine types: tiles, seats, hands, RNG, configuration, errors.
//!
//! Everything here is independent of turn flow. The table, strategies and
//! turn state machine build on these types.

pub mod tile;
pub mod player;
pub mod hand;
pub mod rng;
pub mod config;
pub mod error;

pub use tile::{pip_frequency, Tile, TileSet, MAX_PIP, PIP_OCCURRENCES, TILE_COUNT};
pub use player::{Player, PlayerId, PlayerMap, Team, PLAYER_COUNT};
pub use hand::Hand;
pub use rng::GameRng;
pub use config::MatchConfig;
pub use error::{ConfigError, EngineError, PlayError};
