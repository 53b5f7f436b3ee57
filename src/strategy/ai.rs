//! Multi-factor scorer.
//!
//! Every playable tile gets a sum of weighted terms; the first tile with the
//! highest total is played.
//!
//! | term | value |
//! |------|-------|
//! | playing it empties the hand | +1000 |
//! | partner's hand already empty | +900 |
//! | either opponent's hand already empty | -500 |
//! | hand frequency of the tile's numbers | +10 each |
//! | tile number with fewer than 3 halves unplayed | +5 each |
//! | unplayed halves of the exposed numbers after the play | -2 each |
//! | partner close to out and the tile shares a number with the opener | +50 |
//!
//! "Unplayed" is read from the play history, so it counts halves still in
//! any hand, including this one.

use super::weights::first_max;
use super::win::richest_opener;
use super::{Decision, Strategy, TableView};
use crate::core::GameRng;

const EMPTIES_HAND: f64 = 1000.0;
const PARTNER_OUT: f64 = 900.0;
const OPPONENT_OUT: f64 = -500.0;
const HAND_FREQUENCY: f64 = 10.0;
const SCARCE_NUMBER: f64 = 5.0;
const SCARCE_BELOW: u32 = 3;
const EXPOSED_REMAINING: f64 = -2.0;
const PARTNER_RUNNING_OUT: f64 = 50.0;
const PARTNER_RUNNING_OUT_SIZE: usize = 3;

/// Weighs winning, partner support, scarcity and exposure together.
#[derive(Clone, Copy, Debug, Default)]
pub struct AiStrategy;

impl AiStrategy {
    fn score(view: &TableView<'_>, index: usize) -> Option<f64> {
        let hand = view.hand();
        let tile = hand.tiles()[index];
        let ends = view.ends_after(tile)?;

        let seat = view.seat();
        let remaining = hand.len() - 1;
        let partner_size = view.hand_len(seat.teammate());
        let frequency = view.own_frequency();
        let unplayed = view.chain().history().unplayed_occurrences();

        let mut score = 0.0;
        if remaining == 0 {
            score += EMPTIES_HAND;
        }
        if partner_size == 0 {
            score += PARTNER_OUT;
        }
        if seat.opponents().iter().any(|&o| view.hand_len(o) == 0) {
            score += OPPONENT_OUT;
        }

        for n in tile.numbers() {
            score += HAND_FREQUENCY * f64::from(frequency[n as usize]);
            if unplayed[n as usize] < SCARCE_BELOW {
                score += SCARCE_NUMBER;
            }
        }

        let exposed: u32 = ends.numbers().iter().map(|&n| unplayed[n as usize]).sum();
        score += EXPOSED_REMAINING * f64::from(exposed);

        let shares_opener = view
            .opening()
            .is_some_and(|record| tile.shares_number(record.tile));
        if partner_size <= PARTNER_RUNNING_OUT_SIZE && partner_size < remaining && shares_opener {
            score += PARTNER_RUNNING_OUT;
        }

        Some(score)
    }
}

impl Strategy for AiStrategy {
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

        let best = first_max(
            view.playable_indices()
                .into_iter()
                .filter_map(|i| Self::score(view, i).map(|score| (i, score))),
        );

        match best {
            Some((index, score)) => Decision::play(
                index,
                format!("played {} (score {score:.1})", hand.tiles()[index]),
            ),
            None => Decision::pass("no tile fits either end"),
        }
    }
}
