//! Worked table scenarios through the public API.

use domino_engine::core::{GameRng, Hand, Player, PlayerId, PlayerMap, Tile};
use domino_engine::rules::{MatchState, MatchStatus, TeamTotals, TurnAction};
use domino_engine::table::{Chain, Ends, Side};
use domino_engine::{Decision, PlayError, StrategyKind, TableView};

fn tiles(pairs: &[(u8, u8)]) -> Vec<Tile> {
    pairs.iter().map(|&(a, b)| Tile::new(a, b)).collect()
}

fn seat(hands: [&[(u8, u8)]; 4], kinds: [StrategyKind; 4]) -> PlayerMap<Player> {
    PlayerMap::new(|id| Player::new(id, kinds[id.index()], Hand::new(tiles(hands[id.index()]))))
}

fn chain_of(pairs: &[(u8, u8)]) -> Chain {
    let mut chain = Chain::new();
    for tile in tiles(pairs) {
        chain.play_tile(tile, None, None).unwrap();
    }
    chain
}

const ALL_AI: [StrategyKind; 4] = [StrategyKind::Ai; 4];

#[test]
fn test_win_opens_with_richest_tile() {
    let players = seat([&[(2, 2), (3, 4)], &[], &[], &[]], ALL_AI);
    let chain = Chain::new();
    let view = TableView::new(PlayerId::A, &players, &chain, None, 0.0);

    let decision = StrategyKind::Win.decide(&view, &mut GameRng::new(0)).unwrap();
    assert!(matches!(decision, Decision::Play { index: 0, .. }));
}

#[test]
fn test_double_joins_matching_right_end() {
    let mut chain = chain_of(&[(1, 2)]);
    let mut hand = Hand::new(tiles(&[(0, 5), (2, 2)]));
    hand.play(1, &mut chain, Some(PlayerId::A), None).unwrap();

    assert_eq!(chain.tiles().copied().collect::<Vec<_>>(), tiles(&[(1, 2), (2, 2)]));
    assert_eq!(chain.ends(), Some(Ends { left: 1, right: 2 }));
}

#[test]
fn test_four_passes_lock_for_lower_bd_total() {
    let mut players = seat([&[(6, 6)], &[(4, 5)], &[], &[]], ALL_AI);
    let chain = chain_of(&[(0, 0)]);
    let mut state = MatchState::new(PlayerId::A);

    for _ in 0..4 {
        state.pass(&mut players, &chain, false, "stuck".into()).unwrap();
    }

    assert_eq!(
        state.status(),
        MatchStatus::Locked {
            winner: PlayerId::B,
            totals: TeamTotals { ac: 12, bd: 9 }
        }
    );
    assert!(state.status().is_terminal());
}

#[test]
fn test_going_out_ends_the_match() {
    let mut players = seat(
        [&[(1, 2)], &[(2, 6)], &[(3, 3)], &[(4, 4)]],
        [StrategyKind::Random; 4],
    );
    let mut chain = Chain::new();
    let mut state = MatchState::new(PlayerId::A);
    let mut rng = GameRng::new(0);

    let outcome = state.step(&mut players, &mut chain, &mut rng, 1.0).unwrap().unwrap();
    assert!(matches!(outcome.action, TurnAction::Played { .. }));
    assert_eq!(state.status(), MatchStatus::PlayerWon(PlayerId::A));

    assert_eq!(
        state.step(&mut players, &mut chain, &mut rng, 1.0).unwrap_err(),
        PlayError::MatchOver
    );
    assert_eq!(players[PlayerId::B].hand().len(), 1);
}

#[test]
fn test_stuck_win_seat_swaps_with_partner() {
    let mut players = seat(
        [
            &[(0, 0), (0, 1), (0, 2), (1, 1), (1, 2)],
            &[(3, 4)],
            &[(0, 3), (0, 4), (0, 5), (1, 3), (1, 4), (1, 5)],
            &[(2, 6)],
        ],
        [
            StrategyKind::Win,
            StrategyKind::Block,
            StrategyKind::Ai,
            StrategyKind::Block,
        ],
    );
    let mut chain = chain_of(&[(6, 6)]);
    let mut state = MatchState::new(PlayerId::A);

    state
        .step(&mut players, &mut chain, &mut GameRng::new(0), 1.0)
        .unwrap()
        .unwrap();

    assert_eq!(players[PlayerId::A].strategy(), StrategyKind::Ai);
    assert_eq!(players[PlayerId::C].strategy(), StrategyKind::Win);
    assert_eq!(state.passes(), 1);
    assert_eq!(state.current(), PlayerId::B);
}

#[test]
fn test_tile_on_a_double_exposes_both_numbers() {
    for side in [None, Some(Side::Left), Some(Side::Right)] {
        let mut chain = chain_of(&[(3, 3)]);
        chain.play_tile(Tile::new(3, 5), None, side).unwrap();
        let ends = chain.ends().unwrap();
        let mut numbers = [ends.left, ends.right];
        numbers.sort_unstable();
        assert_eq!(numbers, [3, 5]);
    }
    let mut chain = chain_of(&[(3, 3)]);
    chain.play_tile(Tile::new(3, 5), None, None).unwrap();
    assert_eq!(chain.ends(), Some(Ends { left: 5, right: 3 }));
}

#[test]
fn test_predictive_lock_is_independent_of_passing() {
    // Every five but [5|6] is down; the ends are 6 and 5.
    let mut chain = chain_of(&[
        (5, 5),
        (5, 0),
        (0, 0),
        (0, 1),
        (1, 5),
        (5, 2),
        (2, 2),
        (2, 3),
        (3, 5),
        (5, 4),
        (4, 4),
        (4, 6),
    ]);
    let mut players = seat([&[(6, 5), (1, 1)], &[(3, 3)], &[(6, 6)], &[(1, 3)]], ALL_AI);
    let mut state = MatchState::new(PlayerId::A);

    assert!(chain.will_lock(Tile::new(6, 5), None));
    state
        .play(&mut players, &mut chain, 0, None, "close".into())
        .unwrap();
    assert_eq!(chain.ends(), Some(Ends { left: 5, right: 5 }));
    assert_eq!(state.status(), MatchStatus::InProgress);

    for _ in 0..4 {
        state.pass(&mut players, &chain, false, "stuck".into()).unwrap();
    }
    assert_eq!(
        state.status(),
        MatchStatus::Locked {
            winner: PlayerId::B,
            totals: TeamTotals { ac: 14, bd: 10 }
        }
    );
}
