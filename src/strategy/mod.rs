//! Decision strategies.
//!
//! Each automated strategy is a unit struct implementing [`Strategy`]: a pure
//! read of the table through a [`TableView`] that returns a [`Decision`]. The
//! turn state machine applies the decision; strategies never mutate hands or
//! the chain themselves.
//!
//! [`StrategyKind`] is the per-seat tag that selects one of them. `User` has
//! no automated decision; its moves arrive through the session boundary and
//! are validated by [`user::validate_move`].
//!
//! ## Common pre-step
//!
//! Before any automated strategy runs, a playable double (the first one in
//! hand order) is led with probability `MatchConfig::double_priority`.

pub mod view;
pub mod weights;
pub mod random;
pub mod win;
pub mod help;
pub mod block;
pub mod ai;
pub mod user;

use serde::{Deserialize, Serialize};

use crate::core::GameRng;

pub use ai::AiStrategy;
pub use block::BlockStrategy;
pub use help::HelpStrategy;
pub use random::RandomStrategy;
pub use user::{list_playable_tile_indices, validate_move, PlayableTiles};
pub use view::TableView;
pub use weights::PipWeights;
pub use win::WinStrategy;

/// Strategy tag carried by each seat.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StrategyKind {
    Random,
    Win,
    Help,
    Block,
    #[serde(rename = "AI")]
    Ai,
    User,
}

impl StrategyKind {
    /// Every automated strategy, in declaration order.
    pub const AUTOMATED: [StrategyKind; 5] = [
        StrategyKind::Random,
        StrategyKind::Win,
        StrategyKind::Help,
        StrategyKind::Block,
        StrategyKind::Ai,
    ];

    #[must_use]
    pub const fn is_automated(self) -> bool {
        !matches!(self, StrategyKind::User)
    }

    fn strategy(self) -> Option<&'static dyn Strategy> {
        match self {
            StrategyKind::Random => Some(&RandomStrategy),
            StrategyKind::Win => Some(&WinStrategy),
            StrategyKind::Help => Some(&HelpStrategy),
            StrategyKind::Block => Some(&BlockStrategy),
            StrategyKind::Ai => Some(&AiStrategy),
            StrategyKind::User => None,
        }
    }

    /// Run the double pre-step and then the tagged strategy.
    ///
    /// Returns `None` for `User`, whose decisions come from outside.
    pub fn decide(self, view: &TableView<'_>, rng: &mut GameRng) -> Option<Decision> {
        let strategy = self.strategy()?;
        if let Some(decision) = lead_with_double(view, rng) {
            return Some(decision);
        }
        Some(strategy.decide(view, rng))
    }
}

impl std::fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            StrategyKind::Random => "Random",
            StrategyKind::Win => "Win",
            StrategyKind::Help => "Help",
            StrategyKind::Block => "Block",
            StrategyKind::Ai => "AI",
            StrategyKind::User => "User",
        };
        f.write_str(name)
    }
}

/// What a strategy wants to do this turn.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Decision {
    /// Play the tile at `index` of the deciding player's hand, using the
    /// chain's default side rule.
    Play { index: usize, reason: String },
    /// No move. `hand_off` asks the turn state machine to consider handing
    /// this seat's strategy to the partner.
    Pass { hand_off: bool, reason: String },
}

impl Decision {
    pub(crate) fn play(index: usize, reason: impl Into<String>) -> Self {
        Decision::Play {
            index,
            reason: reason.into(),
        }
    }

    pub(crate) fn pass(reason: impl Into<String>) -> Self {
        Decision::Pass {
            hand_off: false,
            reason: reason.into(),
        }
    }

    #[must_use]
    pub fn reason(&self) -> &str {
        match self {
            Decision::Play { reason, .. } | Decision::Pass { reason, .. } => reason,
        }
    }
}

/// An automated decision function.
pub trait Strategy: Send + Sync {
    /// Choose a tile from `view.hand()` or pass.
    ///
    /// A returned `Play` index must be in range and playable on the chain.
    fn decide(&self, view: &TableView<'_>, rng: &mut GameRng) -> Decision;
}

fn lead_with_double(view: &TableView<'_>, rng: &mut GameRng) -> Option<Decision> {
    let index = view
        .playable_indices()
        .into_iter()
        .find(|&i| view.hand().tiles()[i].is_double())?;

    if !rng.gen_bool(view.double_priority()) {
        return None;
    }
    let tile = view.hand().tiles()[index];
    Some(Decision::play(index, format!("prioritized playing double {tile}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{PlayerId, Tile};
    use crate::strategy::view::fixtures::TableFixture;

    #[test]
    fn test_automated_flags() {
        assert!(StrategyKind::AUTOMATED.iter().all(|k| k.is_automated()));
        assert!(!StrategyKind::User.is_automated());
    }

    #[test]
    fn test_user_has_no_automated_decision() {
        let fixture = TableFixture::new([&[(1, 2)], &[], &[], &[]]);
        let mut rng = GameRng::new(1);
        assert!(StrategyKind::User
            .decide(&fixture.view(PlayerId::A), &mut rng)
            .is_none());
    }

    #[test]
    fn test_serde_names() {
        assert_eq!(serde_json::to_string(&StrategyKind::Ai).unwrap(), "\"AI\"");
        let kind: StrategyKind = serde_json::from_str("\"Block\"").unwrap();
        assert_eq!(kind, StrategyKind::Block);
        assert_eq!(StrategyKind::Ai.to_string(), "AI");
    }

    #[test]
    fn test_double_led_by_every_automated_strategy() {
        let fixture = TableFixture::new([&[(0, 1), (4, 4), (3, 4)], &[], &[], &[]])
            .with_chain(&[(4, 2)]);
        for kind in StrategyKind::AUTOMATED {
            let mut rng = GameRng::new(5);
            let decision = kind.decide(&fixture.view(PlayerId::A), &mut rng).unwrap();
            assert!(
                matches!(decision, Decision::Play { index: 1, .. }),
                "{kind} did not lead the double"
            );
        }
    }

    #[test]
    fn test_double_priority_zero_skips_prestep() {
        // Ends (4, 2). Without the pre-step Win plays [3|4], exposing the
        // hand's threes instead of the double's fours.
        let fixture = TableFixture::new([&[(4, 4), (3, 4), (3, 3), (3, 1)], &[], &[], &[]])
            .with_chain(&[(4, 2)])
            .with_double_priority(0.0);
        let mut rng = GameRng::new(5);
        let decision = StrategyKind::Win
            .decide(&fixture.view(PlayerId::A), &mut rng)
            .unwrap();
        assert!(matches!(decision, Decision::Play { index: 1, .. }));
        assert_eq!(fixture.hand(PlayerId::A).tiles()[1], Tile::new(3, 4));
    }

    #[test]
    fn test_unplayable_double_is_not_led() {
        let fixture = TableFixture::new([&[(6, 6), (2, 5)], &[], &[], &[]])
            .with_chain(&[(1, 2)]);
        let mut rng = GameRng::new(5);
        let decision = StrategyKind::Random
            .decide(&fixture.view(PlayerId::A), &mut rng)
            .unwrap();
        assert!(matches!(decision, Decision::Play { index: 1, .. }));
    }
}
