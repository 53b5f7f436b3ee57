//! Error types.
//!
//! Every error here is a recoverable precondition violation reported to the
//! caller. Automated strategies never produce one: having no legal move is a
//! pass, not an error.

use thiserror::Error;

use super::tile::Tile;
use crate::table::Side;

/// Errors from placing tiles and driving turns.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum PlayError {
    #[error("Hand index {index} is out of range for a hand of {hand_size} tiles")]
    InvalidIndex { index: usize, hand_size: usize },

    #[error("Tile {tile} does not match the {} end of the chain", side_label(.side))]
    InvalidPlacement { tile: Tile, side: Option<Side> },

    #[error("Tile {tile} fits both ends of the chain; a side must be chosen")]
    AmbiguousSideRequired { tile: Tile },

    #[error("It is not the human player's turn")]
    NotHumanTurn,

    #[error("The match is already over")]
    MatchOver,

    #[error("Cannot pass while holding a playable tile")]
    MustPlay,
}

fn side_label(side: &Option<Side>) -> &'static str {
    match side {
        Some(Side::Left) => "left",
        Some(Side::Right) => "right",
        None => "left or right",
    }
}

/// Errors from building a match configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Double priority must be within 0.0..=1.0, got {0}")]
    DoublePriorityOutOfRange(f64),

    #[error("Seat {seat} is configured as User but is not the human seat")]
    UnexpectedHumanStrategy { seat: char },

    #[error("Failed to parse config: {0}")]
    Json(#[from] serde_json::Error),
}

/// Either kind of failure, for callers that build and drive whole matches.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Play(#[from] PlayError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_play_error_messages() {
        let err = PlayError::InvalidIndex { index: 9, hand_size: 3 };
        assert_eq!(
            err.to_string(),
            "Hand index 9 is out of range for a hand of 3 tiles"
        );

        let err = PlayError::InvalidPlacement {
            tile: Tile::new(1, 2),
            side: Some(Side::Right),
        };
        assert_eq!(err.to_string(), "Tile [1|2] does not match the right end of the chain");

        let err = PlayError::InvalidPlacement {
            tile: Tile::new(1, 2),
            side: None,
        };
        assert!(err.to_string().contains("left or right"));
    }

    #[test]
    fn test_config_error_from_json() {
        let err: ConfigError = serde_json::from_str::<u32>("nope").unwrap_err().into();
        assert!(matches!(err, ConfigError::Json(_)));
    }

    #[test]
    fn test_engine_error_wraps_both() {
        let err: EngineError = PlayError::MatchOver.into();
        assert_eq!(err.to_string(), "The match is already over");

        let err: EngineError = ConfigError::DoublePriorityOutOfRange(2.0).into();
        assert!(matches!(err, EngineError::Config(_)));
    }
}
