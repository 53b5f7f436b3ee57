use super::weights::first_max;
use super::{Decision, Strategy, TableView};
use crate::core::GameRng;

/// Self-interest: keep the chain open on numbers this hand is rich in.
///
/// When stuck it asks to hand the role to its partner.
#[derive(Clone, Copy, Debug, Default)]
pub struct WinStrategy;

/// Opening tile whose two pips are most common in the hand.
///
/// Shared with [`AiStrategy`](super::AiStrategy).
pub(crate) fn richest_opener(view: &TableView<'_>) -> Option<(usize, f64)> {
    let frequency = view.own_frequency();
    first_max(view.hand().tiles().iter().enumerate().map(|(i, tile)| {
        let score: u32 = tile.pips().iter().map(|&p| frequency[p as usize]).sum();
        (i, f64::from(score))
    }))
}

impl Strategy for WinStrategy {
    fn decide(&self, view: &TableView<'_>, _rng: &mut GameRng) -> Decision {
        let hand = view.hand();
        if view.chain().is_empty() {
            return match richest_opener(view) {
                Some((index, score)) => Decision::play(
                    index,
                    format!("opened with {} (hand frequency {score})", hand.tiles()[index]),
                ),
                None => Decision::pass("empty hand"),
            };
        }

        let frequency = view.own_frequency();
        let best = first_max(view.playable_indices().into_iter().filter_map(|i| {
            let ends = view.ends_after(hand.tiles()[i])?;
            let score: u32 = ends.numbers().iter().map(|&n| frequency[n as usize]).sum();
            Some((i, f64::from(score)))
        }));

        match best {
            Some((index, score)) => Decision::play(
                index,
                format!(
                    "played {} to keep strong numbers open (hand frequency {score})",
                    hand.tiles()[index]
                ),
            ),
            None => Decision::Pass {
                hand_off: true,
                reason: "stuck; offering the Win role to partner".to_string(),
            },
        }
    }
}
