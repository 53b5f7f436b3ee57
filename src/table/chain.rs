//! The chain of played tiles.
//!
//! Tiles are stored oriented: for adjacent tiles `x` then `y`,
//! `x.right == y.left`. The exposed ends are `first.left` and `last.right`.
//!
//! ## Placement rule
//!
//! - Empty chain: the tile opens the chain as held.
//! - No side requested: left end if the tile matches it, otherwise the right
//!   end. Automated players always place this way, so a tile that fits both
//!   ends goes left.
//! - Side requested: only that end is tried.
//!
//! The tile is flipped so the matching pip touches the end it joins.

use im::Vector;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::history::PlayHistory;
use crate::core::{pip_frequency, Hand, PlayError, PlayerId, Tile, PIP_OCCURRENCES};

/// An end of the chain.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Left,
    Right,
}

/// The two exposed pips of a non-empty chain.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ends {
    pub left: u8,
    pub right: u8,
}

impl Ends {
    #[must_use]
    pub const fn contains(self, pip: u8) -> bool {
        self.left == pip || self.right == pip
    }

    /// Distinct exposed numbers.
    #[must_use]
    pub fn numbers(self) -> SmallVec<[u8; 2]> {
        if self.left == self.right {
            smallvec::smallvec![self.left]
        } else {
            smallvec::smallvec![self.left, self.right]
        }
    }

    /// Both ends show the same number.
    #[must_use]
    pub const fn is_closed_pair(self) -> bool {
        self.left == self.right
    }
}

/// Where a tile could go.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Fit {
    /// The chain is empty; any tile opens it.
    Opening,
    Left,
    Right,
    Both,
    None,
}

impl Fit {
    #[must_use]
    pub const fn is_playable(self) -> bool {
        !matches!(self, Fit::None)
    }
}

/// Result of a successful placement.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Placement {
    /// End the tile joined; `None` when it opened the chain.
    pub side: Option<Side>,
    /// The tile as it now lies on the chain.
    pub oriented: Tile,
}

/// Ordered sequence of placed tiles plus the play history.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chain {
    tiles: Vector<Tile>,
    history: PlayHistory,
}

impl Chain {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    pub fn tiles(&self) -> impl Iterator<Item = &Tile> {
        self.tiles.iter()
    }

    #[must_use]
    pub fn history(&self) -> &PlayHistory {
        &self.history
    }

    #[must_use]
    pub fn ends(&self) -> Option<Ends> {
        let first = self.tiles.front()?;
        let last = self.tiles.back()?;
        Some(Ends {
            left: first.left,
            right: last.right,
        })
    }

    /// `[left, right]`, or empty when nothing has been played.
    #[must_use]
    pub fn playable_numbers(&self) -> SmallVec<[u8; 2]> {
        match self.ends() {
            Some(ends) => smallvec::smallvec![ends.left, ends.right],
            None => SmallVec::new(),
        }
    }

    #[must_use]
    pub fn fits(&self, tile: Tile) -> Fit {
        let Some(ends) = self.ends() else {
            return Fit::Opening;
        };
        match (tile.contains(ends.left), tile.contains(ends.right)) {
            (true, true) => Fit::Both,
            (true, false) => Fit::Left,
            (false, true) => Fit::Right,
            (false, false) => Fit::None,
        }
    }

    /// A tile that fits both ends where the ends show different numbers,
    /// so the side changes the outcome.
    #[must_use]
    pub fn is_ambiguous(&self, tile: Tile) -> bool {
        self.fits(tile) == Fit::Both && self.ends().is_some_and(|e| !e.is_closed_pair())
    }

    /// Work out where `tile` would go without placing it.
    pub fn placement(&self, tile: Tile, side: Option<Side>) -> Result<Placement, PlayError> {
        let Some(ends) = self.ends() else {
            return Ok(Placement {
                side: None,
                oriented: tile,
            });
        };

        let on_left = || {
            tile.contains(ends.left).then(|| Placement {
                side: Some(Side::Left),
                oriented: if tile.right == ends.left { tile } else { tile.flipped() },
            })
        };
        let on_right = || {
            tile.contains(ends.right).then(|| Placement {
                side: Some(Side::Right),
                oriented: if tile.left == ends.right { tile } else { tile.flipped() },
            })
        };

        let placement = match side {
            Some(Side::Left) => on_left(),
            Some(Side::Right) => on_right(),
            None => on_left().or_else(on_right),
        };
        placement.ok_or(PlayError::InvalidPlacement { tile, side })
    }

    /// Place a tile, recording it in the history when a player is given.
    pub fn play_tile(
        &mut self,
        tile: Tile,
        player: Option<PlayerId>,
        side: Option<Side>,
    ) -> Result<Placement, PlayError> {
        let placement = self.placement(tile, side)?;
        match placement.side {
            Some(Side::Left) => self.tiles.push_front(placement.oriented),
            None | Some(Side::Right) => self.tiles.push_back(placement.oriented),
        }
        if let Some(player) = player {
            self.history.record(player, tile);
        }
        debug_assert!(self.is_well_formed());
        Ok(placement)
    }

    /// Exposed ends after a hypothetical placement, using the same rule as
    /// `play_tile`. `None` if the tile cannot go there.
    #[must_use]
    pub fn preview(&self, tile: Tile, side: Option<Side>) -> Option<Ends> {
        let placement = self.placement(tile, side).ok()?;
        let oriented = placement.oriented;
        let ends = match (placement.side, self.ends()) {
            (Some(Side::Left), Some(ends)) => Ends {
                left: oriented.left,
                right: ends.right,
            },
            (Some(Side::Right), Some(ends)) => Ends {
                left: ends.left,
                right: oriented.right,
            },
            _ => Ends {
                left: oriented.left,
                right: oriented.right,
            },
        };
        Some(ends)
    }

    /// Whether the placement would close the table: every number left
    /// exposed already has all of its pip halves on the chain, so nobody can
    /// ever play again.
    ///
    /// Advisory only. Turn flow detects a locked table by counting passes.
    #[must_use]
    pub fn will_lock(&self, tile: Tile, side: Option<Side>) -> bool {
        let Some(ends) = self.preview(tile, side) else {
            return false;
        };
        let counts = pip_frequency(self.tiles.iter().chain(std::iter::once(&tile)));
        ends.numbers()
            .iter()
            .all(|&n| counts[n as usize] >= PIP_OCCURRENCES)
    }

    /// Pips left in a hand; the lower team total wins a locked table.
    #[must_use]
    pub fn count_remaining_pips(&self, hand: &Hand) -> u32 {
        hand.pip_total()
    }

    /// Adjacent tiles touch with equal pips.
    #[must_use]
    pub fn is_well_formed(&self) -> bool {
        self.tiles
            .iter()
            .zip(self.tiles.iter().skip(1))
            .all(|(a, b)| a.right == b.left)
    }
}
