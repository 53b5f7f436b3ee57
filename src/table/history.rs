//! Append-only log of who played which tile.
//!
//! The history is the only record strategies consult to infer what partners
//! and opponents are strong in. Tiles are stored as they were held in the
//! hand, not as they were oriented on the chain.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::core::{PlayerId, Tile, PIP_OCCURRENCES};

/// One placement by one player.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayRecord {
    pub player: PlayerId,
    pub tile: Tile,
}

impl PlayRecord {
    #[must_use]
    pub fn new(player: PlayerId, tile: Tile) -> Self {
        Self { player, tile }
    }
}

/// Ordered play log backed by a persistent vector.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayHistory {
    records: Vector<PlayRecord>,
}

impl PlayHistory {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, player: PlayerId, tile: Tile) {
        self.records.push_back(PlayRecord::new(player, tile));
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &PlayRecord> {
        self.records.iter()
    }

    /// Tiles played by one seat, oldest first.
    pub fn tiles_by(&self, player: PlayerId) -> impl Iterator<Item = Tile> + '_ {
        self.records
            .iter()
            .filter(move |r| r.player == player)
            .map(|r| r.tile)
    }

    /// Pip halves already played, per number.
    #[must_use]
    pub fn played_occurrences(&self) -> [u32; 7] {
        crate::core::pip_frequency(self.records.iter().map(|r| &r.tile))
    }

    /// Pip halves of each number not yet seen in the history.
    #[must_use]
    pub fn unplayed_occurrences(&self) -> [u32; 7] {
        self.played_occurrences()
            .map(|played| PIP_OCCURRENCES.saturating_sub(played))
    }
}
