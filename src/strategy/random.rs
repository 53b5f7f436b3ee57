use super::{Decision, Strategy, TableView};
use crate::core::GameRng;

/// Plays any fitting tile, picked uniformly.
#[derive(Clone, Copy, Debug, Default)]
pub struct RandomStrategy;

impl RandomStrategy {
    /// The random rule on its own; Help falls back to it.
    pub(crate) fn pick(view: &TableView<'_>, rng: &mut GameRng) -> Option<usize> {
        let hand = view.hand();
        if hand.is_empty() {
            return None;
        }
        if view.chain().is_empty() {
            return Some(0);
        }

        let mut order: Vec<usize> = (0..hand.len()).collect();
        rng.shuffle(&mut order);
        order
            .into_iter()
            .find(|&i| view.chain().fits(hand.tiles()[i]).is_playable())
    }
}

impl Strategy for RandomStrategy {
    fn decide(&self, view: &TableView<'_>, rng: &mut GameRng) -> Decision {
        match Self::pick(view, rng) {
            Some(index) if view.chain().is_empty() => Decision::play(
                index,
                format!("opened with {} as the first tile in hand", view.hand().tiles()[index]),
            ),
            Some(index) => Decision::play(
                index,
                format!("randomly picked {}", view.hand().tiles()[index]),
            ),
            None => Decision::pass("no tile fits either end"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::PlayerId;
    use crate::strategy::view::fixtures::TableFixture;

    #[test]
    fn test_opens_with_first_tile() {
        let fixture = TableFixture::new([&[(1, 2), (5, 6)], &[], &[], &[]]);
        let mut rng = GameRng::new(3);
        let decision = RandomStrategy.decide(&fixture.view(PlayerId::A), &mut rng);
        assert!(matches!(decision, Decision::Play { index: 0, .. }));
    }

    #[test]
    fn test_only_plays_fitting_tiles() {
        let fixture = TableFixture::new([&[(0, 0), (1, 1), (4, 3), (2, 5)], &[], &[], &[]])
            .with_chain(&[(3, 6)]);
        for seed in 0..32 {
            let mut rng = GameRng::new(seed);
            let decision = RandomStrategy.decide(&fixture.view(PlayerId::A), &mut rng);
            assert!(matches!(decision, Decision::Play { index: 2, .. }));
        }
    }

    #[test]
    fn test_passes_without_a_fit() {
        let fixture = TableFixture::new([&[(0, 0), (1, 1)], &[], &[], &[]])
            .with_chain(&[(3, 6)]);
        let mut rng = GameRng::new(3);
        let decision = RandomStrategy.decide(&fixture.view(PlayerId::A), &mut rng);
        assert!(matches!(decision, Decision::Pass { hand_off: false, .. }));
    }

    #[test]
    fn test_same_seed_same_choice() {
        let fixture = TableFixture::new([&[(3, 0), (3, 1), (3, 2), (6, 4)], &[], &[], &[]])
            .with_chain(&[(3, 6)]);
        let first = RandomStrategy.decide(&fixture.view(PlayerId::A), &mut GameRng::new(11));
        let second = RandomStrategy.decide(&fixture.view(PlayerId::A), &mut GameRng::new(11));
        assert_eq!(first, second);
    }
}
