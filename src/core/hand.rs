//! A player's tiles.

use serde::{Deserialize, Serialize};

use super::error::PlayError;
use super::player::PlayerId;
use super::tile::Tile;
use crate::table::{Chain, Placement, Side};

/// Tiles held by one player, in deal order.
///
/// Index-based access mirrors how a person picks a tile ("the third one").
/// Range checks for externally supplied indices live at the session
/// boundary; `get` returns `None` past the end.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hand {
    tiles: Vec<Tile>,
}

impl Hand {
    #[must_use]
    pub fn new(tiles: Vec<Tile>) -> Self {
        Self { tiles }
    }

    #[must_use]
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
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
    pub fn get(&self, index: usize) -> Option<Tile> {
        self.tiles.get(index).copied()
    }

    /// Index of the first tile that is the same piece as `tile`.
    #[must_use]
    pub fn position(&self, tile: Tile) -> Option<usize> {
        self.tiles.iter().position(|t| t.same_piece(tile))
    }

    /// Remove and return the tile at `index`.
    pub fn remove(&mut self, index: usize) -> Result<Tile, PlayError> {
        if index >= self.tiles.len() {
            return Err(PlayError::InvalidIndex {
                index,
                hand_size: self.tiles.len(),
            });
        }
        Ok(self.tiles.remove(index))
    }

    /// Move the tile at `index` onto the chain.
    ///
    /// If the chain rejects the tile it goes back into its slot, so a failed
    /// play never loses a tile.
    pub fn play(
        &mut self,
        index: usize,
        chain: &mut Chain,
        player: Option<PlayerId>,
        side: Option<Side>,
    ) -> Result<(Tile, Placement), PlayError> {
        let tile = self.remove(index)?;
        match chain.play_tile(tile, player, side) {
            Ok(placement) => Ok((tile, placement)),
            Err(err) => {
                self.tiles.insert(index, tile);
                Err(err)
            }
        }
    }

    /// Sum of pips left in the hand.
    #[must_use]
    pub fn pip_total(&self) -> u32 {
        self.tiles.iter().map(|t| t.pip_sum()).sum()
    }
}
