//! Domino tiles and the double-six set.
//!
//! ## Tile
//!
//! A pip pair `(left, right)` with both values in `0..=6`. Identity is
//! orientation-insensitive: `[2, 5]` and `[5, 2]` are the same piece. Once a
//! tile sits on the chain its orientation matters: `left` touches the tile
//! before it and `right` the tile after it.
//!
//! ## TileSet
//!
//! The 28 canonical pairs `(a, b)` with `a <= b`.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::rng::GameRng;

/// Highest pip value in a double-six set.
pub const MAX_PIP: u8 = 6;

/// Number of tiles in a double-six set.
pub const TILE_COUNT: usize = 28;

/// How many pip halves in the whole set carry a given number.
///
/// Six non-doubles carry the number once and the double carries it twice.
pub const PIP_OCCURRENCES: u32 = 8;

/// A domino tile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tile {
    pub left: u8,
    pub right: u8,
}

impl Tile {
    /// Create a tile with the given orientation.
    ///
    /// Panics if either pip is above [`MAX_PIP`].
    #[must_use]
    pub fn new(left: u8, right: u8) -> Self {
        assert!(left <= MAX_PIP && right <= MAX_PIP, "Pips must be in 0..=6");
        Self { left, right }
    }

    /// The same tile turned around.
    #[must_use]
    pub const fn flipped(self) -> Self {
        Self {
            left: self.right,
            right: self.left,
        }
    }

    /// Canonical orientation (smaller pip first).
    #[must_use]
    pub fn canonical(self) -> Self {
        if self.left <= self.right {
            self
        } else {
            self.flipped()
        }
    }

    /// Orientation-insensitive identity check.
    #[must_use]
    pub fn same_piece(self, other: Tile) -> bool {
        self.canonical() == other.canonical()
    }

    #[must_use]
    pub const fn is_double(self) -> bool {
        self.left == self.right
    }

    /// Scoring value of the tile.
    #[must_use]
    pub const fn pip_sum(self) -> u32 {
        self.left as u32 + self.right as u32
    }

    #[must_use]
    pub const fn contains(self, pip: u8) -> bool {
        self.left == pip || self.right == pip
    }

    /// Both pips, in orientation order.
    #[must_use]
    pub const fn pips(self) -> [u8; 2] {
        [self.left, self.right]
    }

    /// The distinct numbers on the tile (one for a double).
    #[must_use]
    pub fn numbers(self) -> SmallVec<[u8; 2]> {
        if self.is_double() {
            smallvec::smallvec![self.left]
        } else {
            smallvec::smallvec![self.left, self.right]
        }
    }

    /// Whether two tiles share at least one number.
    #[must_use]
    pub fn shares_number(self, other: Tile) -> bool {
        self.contains(other.left) || self.contains(other.right)
    }
}

impl std::fmt::Display for Tile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}|{}]", self.left, self.right)
    }
}

/// The full double-six set.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TileSet {
    tiles: Vec<Tile>,
}

impl TileSet {
    /// All 28 canonical tiles, ordered by `(a, b)`.
    #[must_use]
    pub fn standard() -> Self {
        let tiles = (0..=MAX_PIP)
            .flat_map(|a| (a..=MAX_PIP).map(move |b| Tile::new(a, b)))
            .collect();
        Self { tiles }
    }

    /// Shuffle the set in place.
    pub fn shuffle(&mut self, rng: &mut GameRng) {
        rng.shuffle(&mut self.tiles);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    #[must_use]
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// Split the set into `count` consecutive hands of `size` tiles.
    ///
    /// Tiles move out of the set; the set is consumed.
    #[must_use]
    pub fn deal(self, count: usize, size: usize) -> Vec<Vec<Tile>> {
        assert_eq!(count * size, self.tiles.len(), "Deal must use every tile");
        let mut tiles = self.tiles.into_iter();
        (0..count)
            .map(|_| tiles.by_ref().take(size).collect())
            .collect()
    }
}

/// Count pip halves per number in a set of tiles (a double counts twice).
#[must_use]
pub fn pip_frequency<'a>(tiles: impl IntoIterator<Item = &'a Tile>) -> [u32; 7] {
    let mut counts = [0u32; 7];
    for tile in tiles {
        counts[tile.left as usize] += 1;
        counts[tile.right as usize] += 1;
    }
    counts
}
