use super::random::RandomStrategy;
use super::weights::{first_max, PipWeights};
use super::{Decision, Strategy, TableView};
use crate::core::GameRng;

/// Partner support: keep open the numbers the teammate has been playing.
///
/// The teammate's plays are weighted 1, 1/2, 1/3, ... in play order, so the
/// first tiles they chose say the most about their hand.
#[derive(Clone, Copy, Debug, Default)]
pub struct HelpStrategy;

impl Strategy for HelpStrategy {
    fn decide(&self, view: &TableView<'_>, rng: &mut GameRng) -> Decision {
        let hand = view.hand();
        let teammate = view.seat().teammate();

        let mut weights = PipWeights::new();
        weights.accumulate_harmonic(&view.plays_by(teammate), 1.0);

        let best = first_max(view.playable_indices().into_iter().filter_map(|i| {
            let ends = view.ends_after(hand.tiles()[i])?;
            Some((i, weights.sum(&ends.numbers())))
        }));

        if let Some((index, score)) = best {
            let tile = hand.tiles()[index];
            let reason = if score > 0.0 {
                format!("played {tile} to keep partner {teammate}'s numbers open (weight {score:.2})")
            } else {
                format!("no read on partner {teammate}; played first fit {tile}")
            };
            return Decision::play(index, reason);
        }

        match RandomStrategy::pick(view, rng) {
            Some(index) => Decision::play(index, format!("played {}", hand.tiles()[index])),
            None => Decision::pass("no tile fits either end"),
        }
    }
}
