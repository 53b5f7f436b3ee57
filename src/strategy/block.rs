use super::weights::{first_max, PipWeights};
use super::{Decision, Strategy, TableView};
use crate::core::GameRng;

/// Bonus for closing both ends onto one number.
const CLOSED_ENDS_BONUS: f64 = 10.0;

/// Opponent suppression: starve the next seat of the numbers its team has
/// been playing.
///
/// The next player's plays weigh `2 / (i + 1)`, their partner's `1 / (i + 1)`.
/// A tile that leaves both ends on one number `v` scores
/// `10 - w(v)`; anything else scores `-(w(left) + w(right))`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BlockStrategy;

impl BlockStrategy {
    fn opponent_weights(view: &TableView<'_>) -> PipWeights {
        let next = view.seat().next();
        let mut weights = PipWeights::new();
        weights.accumulate_harmonic(&view.plays_by(next), 2.0);
        weights.accumulate_harmonic(&view.plays_by(next.teammate()), 1.0);
        weights
    }
}

impl Strategy for BlockStrategy {
    fn decide(&self, view: &TableView<'_>, _rng: &mut GameRng) -> Decision {
        let hand = view.hand();
        if view.chain().is_empty() {
            return match hand.get(0) {
                Some(tile) => Decision::play(0, format!("opened with {tile}")),
                None => Decision::pass("empty hand"),
            };
        }

        let weights = Self::opponent_weights(view);
        let best = first_max(view.playable_indices().into_iter().filter_map(|i| {
            let numbers = view.ends_after(hand.tiles()[i])?.numbers();
            let score = match numbers.as_slice() {
                [single] => CLOSED_ENDS_BONUS - weights.get(*single),
                pips => -weights.sum(pips),
            };
            Some((i, score))
        }));

        match best {
            Some((index, score)) => Decision::play(
                index,
                format!(
                    "played {} to block {} (score {score:.2})",
                    hand.tiles()[index],
                    view.seat().next()
                ),
            ),
            None => Decision::pass("no tile fits either end"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{PlayerId, Tile};
    use crate::strategy::view::fixtures::TableFixture;

    #[test]
    fn test_opens_with_first_tile() {
        let fixture = TableFixture::new([&[(0, 1), (6, 5)], &[], &[], &[]]);
        let decision = BlockStrategy.decide(&fixture.view(PlayerId::A), &mut GameRng::new(0));
        assert!(matches!(decision, Decision::Play { index: 0, .. }));
    }

    #[test]
    fn test_weights_come_from_next_player() {
        // B opened [2|4]. A can leave 2 exposed with [4|0] or 4 with [2|6].
        let fixture = TableFixture::new([&[(4, 0), (2, 6)], &[], &[], &[]])
            .with_plays(&[(PlayerId::B, (2, 4))]);
        let view = fixture.view(PlayerId::A);
        let weights = BlockStrategy::opponent_weights(&view);
        assert!((weights.get(2) - 2.0).abs() < 1e-9);
        assert!((weights.get(4) - 2.0).abs() < 1e-9);

        // Both leave one of B's numbers (-2) plus a fresh one (0); tie.
        let decision = BlockStrategy.decide(&view, &mut GameRng::new(0));
        assert!(matches!(decision, Decision::Play { index: 0, .. }));
    }

    #[test]
    fn test_next_player_counts_double() {
        // B opened [1|2]; D, B's partner, played [2|3]. Ends (1, 3).
        // [3|0] leaves B's 1 (weight 2); [1|6] leaves D's 3 (weight 1).
        let fixture = TableFixture::new([&[(3, 0), (1, 6)], &[], &[], &[]])
            .with_plays(&[(PlayerId::B, (1, 2)), (PlayerId::D, (2, 3))]);
        let view = fixture.view(PlayerId::A);
        let decision = BlockStrategy.decide(&view, &mut GameRng::new(0));
        assert!(matches!(decision, Decision::Play { index: 1, .. }));
        assert_eq!(view.hand().tiles()[1], Tile::new(1, 6));
    }

    #[test]
    fn test_prefers_closing_ends_on_one_number() {
        // Ends (5, 2). [2|5] placed left leaves 2 and 2.
        let fixture = TableFixture::new([&[(5, 6), (5, 2)], &[], &[], &[]])
            .with_chain(&[(5, 2)]);
        let decision = BlockStrategy.decide(&fixture.view(PlayerId::A), &mut GameRng::new(0));
        assert!(matches!(decision, Decision::Play { index: 1, .. }));
    }

    #[test]
    fn test_passes_without_a_fit() {
        let fixture = TableFixture::new([&[(0, 0)], &[], &[], &[]]).with_chain(&[(5, 2)]);
        let decision = BlockStrategy.decide(&fixture.view(PlayerId::A), &mut GameRng::new(0));
        assert!(matches!(decision, Decision::Pass { .. }));
    }
}
