//! Match configuration.
//!
//! `MatchConfig` selects the seed, the human seat (if any), the strategy each
//! automated seat starts with, and a few tuning knobs. It deserializes from
//! JSON with every field optional.

use serde::{Deserialize, Serialize};

use super::error::ConfigError;
use super::player::{PlayerId, PlayerMap};
use crate::strategy::StrategyKind;

/// Match configuration parameters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    /// Seed for the deal and for strategy randomness.
    /// Same seed and strategies produce the same match.
    pub seed: u64,

    /// Seat controlled through `apply_human_move`. `None` for bot-only matches.
    pub human_seat: Option<PlayerId>,

    /// Starting strategy per seat. The human seat's entry is ignored.
    pub strategies: PlayerMap<StrategyKind>,

    /// Probability that an automated player leads with a playable double
    /// before consulting its strategy (1.0 = always).
    pub double_priority: f64,

    /// How many trailing move-log entries a snapshot carries.
    pub log_tail: usize,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            human_seat: None,
            strategies: PlayerMap::with_value(StrategyKind::Ai),
            double_priority: 1.0,
            log_tail: 3,
        }
    }
}

impl MatchConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// The line-up used when a person sits down against bots.
    ///
    /// Sitting at A puts a Help partner at C and blockers at B and D;
    /// any other seat gets a Win partner and blockers on the other team.
    pub fn against_bots(human_seat: PlayerId) -> Self {
        let partner = if human_seat == PlayerId::A {
            StrategyKind::Help
        } else {
            StrategyKind::Win
        };
        let strategies = PlayerMap::new(|seat| {
            if seat == human_seat {
                StrategyKind::User
            } else if seat == human_seat.teammate() {
                partner
            } else {
                StrategyKind::Block
            }
        });

        Self {
            human_seat: Some(human_seat),
            strategies,
            ..Self::default()
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_human_seat(mut self, seat: PlayerId) -> Self {
        self.human_seat = Some(seat);
        self
    }

    /// Set the starting strategy for one seat.
    pub fn with_strategy(mut self, seat: PlayerId, kind: StrategyKind) -> Self {
        self.strategies[seat] = kind;
        self
    }

    /// Give every seat the same starting strategy.
    pub fn with_all_strategies(mut self, kind: StrategyKind) -> Self {
        self.strategies = PlayerMap::with_value(kind);
        self
    }

    pub fn with_double_priority(mut self, probability: f64) -> Self {
        self.double_priority = probability;
        self
    }

    pub fn with_log_tail(mut self, entries: usize) -> Self {
        self.log_tail = entries;
        self
    }

    /// Parse a config from JSON and validate it.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.double_priority) {
            return Err(ConfigError::DoublePriorityOutOfRange(self.double_priority));
        }

        for (seat, kind) in self.strategies.iter() {
            if *kind == StrategyKind::User && self.human_seat != Some(seat) {
                return Err(ConfigError::UnexpectedHumanStrategy { seat: seat.name() });
            }
        }

        Ok(())
    }

    /// The strategy each seat actually starts with: the human seat is
    /// always `User`.
    #[must_use]
    pub fn starting_strategies(&self) -> PlayerMap<StrategyKind> {
        PlayerMap::new(|seat| {
            if self.human_seat == Some(seat) {
                StrategyKind::User
            } else {
                self.strategies[seat]
            }
        })
    }
}
