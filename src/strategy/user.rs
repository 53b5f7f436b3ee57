//! Human moves.
//!
//! A `User` seat never decides inside the engine. The boundary layer asks
//! which tiles are playable, collects a choice, and the engine checks it
//! here before anything is mutated.

use serde::{Deserialize, Serialize};

use crate::core::{Hand, PlayError, Tile};
use crate::table::{Chain, Placement, Side};

/// Playable hand indices, in hand order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayableTiles {
    pub indices: Vec<usize>,
    /// Subset of `indices` that fit both ends where the ends differ; these
    /// need a side.
    pub ambiguous: Vec<usize>,
}

impl PlayableTiles {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    #[must_use]
    pub fn contains(&self, index: usize) -> bool {
        self.indices.contains(&index)
    }
}

/// Which tiles in `hand` can go on `chain`. Every index is playable on an
/// empty chain.
#[must_use]
pub fn list_playable_tile_indices(hand: &Hand, chain: &Chain) -> PlayableTiles {
    let mut playable = PlayableTiles::default();
    for (index, &tile) in hand.tiles().iter().enumerate() {
        if !chain.fits(tile).is_playable() {
            continue;
        }
        playable.indices.push(index);
        if chain.is_ambiguous(tile) {
            playable.ambiguous.push(index);
        }
    }
    playable
}

/// Check a human move without applying it.
///
/// Fails with `InvalidIndex` for an index outside the hand,
/// `AmbiguousSideRequired` when the tile fits two different ends and no
/// side was given, and `InvalidPlacement` when it does not fit.
pub fn validate_move(
    hand: &Hand,
    chain: &Chain,
    index: usize,
    side: Option<Side>,
) -> Result<(Tile, Placement), PlayError> {
    let tile = hand.get(index).ok_or(PlayError::InvalidIndex {
        index,
        hand_size: hand.len(),
    })?;

    if side.is_none() && chain.is_ambiguous(tile) {
        return Err(PlayError::AmbiguousSideRequired { tile });
    }

    let placement = chain.placement(tile, side)?;
    Ok((tile, placement))
}
