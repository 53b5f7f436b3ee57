//! Read-only view of the table for one deciding seat.

use smallvec::SmallVec;

use crate::core::{pip_frequency, Hand, Player, PlayerId, PlayerMap, Tile};
use crate::table::{Chain, Ends, PlayRecord};

/// Everything a strategy may look at when it is `seat`'s turn.
///
/// Borrows the match's player arena instead of letting players hold
/// references to each other.
#[derive(Clone, Copy, Debug)]
pub struct TableView<'a> {
    seat: PlayerId,
    players: &'a PlayerMap<Player>,
    chain: &'a Chain,
    opening: Option<PlayRecord>,
    double_priority: f64,
}

impl<'a> TableView<'a> {
    #[must_use]
    pub fn new(
        seat: PlayerId,
        players: &'a PlayerMap<Player>,
        chain: &'a Chain,
        opening: Option<PlayRecord>,
        double_priority: f64,
    ) -> Self {
        Self {
            seat,
            players,
            chain,
            opening,
            double_priority,
        }
    }

    #[must_use]
    pub fn seat(&self) -> PlayerId {
        self.seat
    }

    #[must_use]
    pub fn player(&self, id: PlayerId) -> &'a Player {
        &self.players[id]
    }

    /// The deciding seat's hand.
    #[must_use]
    pub fn hand(&self) -> &'a Hand {
        self.players[self.seat].hand()
    }

    #[must_use]
    pub fn hand_len(&self, id: PlayerId) -> usize {
        self.players[id].hand().len()
    }

    #[must_use]
    pub fn chain(&self) -> &'a Chain {
        self.chain
    }

    /// The tile that opened the chain and who played it.
    #[must_use]
    pub fn opening(&self) -> Option<PlayRecord> {
        self.opening
    }

    #[must_use]
    pub fn double_priority(&self) -> f64 {
        self.double_priority
    }

    /// Indices of hand tiles that fit the chain, in hand order.
    #[must_use]
    pub fn playable_indices(&self) -> SmallVec<[usize; 7]> {
        let chain = self.chain;
        self.hand()
            .tiles()
            .iter()
            .enumerate()
            .filter(|(_, tile)| chain.fits(**tile).is_playable())
            .map(|(i, _)| i)
            .collect()
    }

    /// Pip halves per number in the deciding seat's hand.
    #[must_use]
    pub fn own_frequency(&self) -> [u32; 7] {
        pip_frequency(self.hand().tiles())
    }

    /// Exposed ends if `tile` were placed by the default rule.
    #[must_use]
    pub fn ends_after(&self, tile: Tile) -> Option<Ends> {
        self.chain.preview(tile, None)
    }

    /// A seat's plays in order, led by the opening tile if that seat
    /// opened the chain.
    pub fn plays_by(&self, id: PlayerId) -> Vec<Tile> {
        let opening = self.opening.filter(|record| record.player == id);
        let mut plays: Vec<Tile> = opening.iter().map(|record| record.tile).collect();

        let mut skipped_opening = opening.is_none();
        for tile in self.chain.history().tiles_by(id) {
            if !skipped_opening && opening.is_some_and(|record| record.tile == tile) {
                skipped_opening = true;
                continue;
            }
            plays.push(tile);
        }
        plays
    }
}
