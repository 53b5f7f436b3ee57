//! Turn state machine.
//!
//! ## Flow
//!
//! Each processed turn is either a play or a pass by the current seat:
//!
//! - A play resets the pass counter, records the opening tile if the chain
//!   was empty, and ends the match with `PlayerWon` if the hand is now empty.
//! - A pass bumps the pass counter and may hand the seat's strategy to its
//!   partner. Four passes in a row lock the table.
//!
//! Otherwise play moves to the next seat. Every processed turn bumps the
//! turn counter. Once the status is terminal every transition fails with
//! `MatchOver`.
//!
//! ## Locked tables
//!
//! Each team's remaining pips are summed. Team AC wins (reported as seat A)
//! only with a strictly lower total; ties go to team BD (seat B).

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::core::{GameRng, PlayError, Player, PlayerId, PlayerMap, Team, Tile, PLAYER_COUNT};
use crate::strategy::{Decision, TableView};
use crate::table::{Chain, PlayRecord, Side};

/// Remaining pips per team.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamTotals {
    pub ac: u32,
    pub bd: u32,
}

impl TeamTotals {
    #[must_use]
    pub fn of(players: &PlayerMap<Player>, chain: &Chain) -> Self {
        let total = |team: Team| -> u32 {
            team.members()
                .iter()
                .map(|&id| chain.count_remaining_pips(players[id].hand()))
                .sum()
        };
        Self {
            ac: total(Team::AC),
            bd: total(Team::BD),
        }
    }

    /// Lower total wins; a tie goes to BD.
    #[must_use]
    pub fn winning_team(&self) -> Team {
        if self.ac < self.bd {
            Team::AC
        } else {
            Team::BD
        }
    }
}

/// Where the match stands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchStatus {
    InProgress,
    /// A seat played its last tile.
    PlayerWon(PlayerId),
    /// Nobody could play; `winner` is the winning team's representative seat.
    Locked { winner: PlayerId, totals: TeamTotals },
}

impl MatchStatus {
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        !matches!(self, MatchStatus::InProgress)
    }

    #[must_use]
    pub fn is_locked(&self) -> bool {
        matches!(self, MatchStatus::Locked { .. })
    }

    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        match self {
            MatchStatus::InProgress => None,
            MatchStatus::PlayerWon(id) => Some(*id),
            MatchStatus::Locked { winner, .. } => Some(*winner),
        }
    }

    #[must_use]
    pub fn winning_team(&self) -> Option<Team> {
        self.winner().map(PlayerId::team)
    }

    /// Whether `player`'s team won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        self.winning_team() == Some(player.team())
    }
}

/// What a seat did on its turn.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnAction {
    /// `side` is `None` for the opening tile.
    Played { tile: Tile, side: Option<Side> },
    /// `handed_off_to` names the partner who took over this seat's strategy.
    Passed { handed_off_to: Option<PlayerId> },
}

/// One processed turn, as kept in the move log.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnOutcome {
    pub turn: u32,
    pub player: PlayerId,
    pub action: TurnAction,
    pub reason: String,
}

/// Turn order, counters, status and the opening tile.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchState {
    current: PlayerId,
    passes: u32,
    turn: u32,
    status: MatchStatus,
    opening: Option<PlayRecord>,
}

impl MatchState {
    #[must_use]
    pub fn new(first: PlayerId) -> Self {
        Self {
            current: first,
            passes: 0,
            turn: 0,
            status: MatchStatus::InProgress,
            opening: None,
        }
    }

    #[must_use]
    pub fn current(&self) -> PlayerId {
        self.current
    }

    /// Consecutive passes since the last play.
    #[must_use]
    pub fn passes(&self) -> u32 {
        self.passes
    }

    /// Turns processed so far.
    #[must_use]
    pub fn turn(&self) -> u32 {
        self.turn
    }

    #[must_use]
    pub fn status(&self) -> MatchStatus {
        self.status
    }

    #[must_use]
    pub fn opening(&self) -> Option<PlayRecord> {
        self.opening
    }

    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.status.is_terminal()
    }

    fn ensure_in_progress(&self) -> Result<(), PlayError> {
        if self.is_terminal() {
            return Err(PlayError::MatchOver);
        }
        Ok(())
    }

    /// Run the current seat's strategy and apply its decision.
    ///
    /// Returns `Ok(None)` without touching anything when the current seat
    /// is human-controlled.
    pub fn step(
        &mut self,
        players: &mut PlayerMap<Player>,
        chain: &mut Chain,
        rng: &mut GameRng,
        double_priority: f64,
    ) -> Result<Option<TurnOutcome>, PlayError> {
        self.ensure_in_progress()?;
        let seat = self.current;
        let kind = players[seat].strategy();

        let decision = {
            let view = TableView::new(seat, players, chain, self.opening, double_priority);
            kind.decide(&view, rng)
        };
        let Some(decision) = decision else {
            return Ok(None);
        };
        debug!(player = %seat, strategy = %kind, reason = decision.reason(), "decided");

        let outcome = match decision {
            Decision::Play { index, reason } => self.play(players, chain, index, None, reason)?,
            Decision::Pass { hand_off, reason } => self.pass(players, chain, hand_off, reason)?,
        };
        Ok(Some(outcome))
    }

    /// The current seat plays the tile at `index`.
    pub fn play(
        &mut self,
        players: &mut PlayerMap<Player>,
        chain: &mut Chain,
        index: usize,
        side: Option<Side>,
        reason: String,
    ) -> Result<TurnOutcome, PlayError> {
        self.ensure_in_progress()?;
        let seat = self.current;
        let opened = chain.is_empty();

        let (tile, placement) = players[seat].hand_mut().play(index, chain, Some(seat), side)?;
        if opened && self.opening.is_none() {
            self.opening = Some(PlayRecord::new(seat, tile));
        }
        self.passes = 0;

        let outcome = self.record(
            seat,
            TurnAction::Played {
                tile,
                side: placement.side,
            },
            reason,
        );

        if players[seat].hand().is_empty() {
            self.status = MatchStatus::PlayerWon(seat);
            info!(winner = %seat, turn = self.turn, "player went out");
        } else {
            self.current = seat.next();
        }
        Ok(outcome)
    }

    /// The current seat passes. With `hand_off`, its strategy may move to
    /// the partner.
    pub fn pass(
        &mut self,
        players: &mut PlayerMap<Player>,
        chain: &Chain,
        hand_off: bool,
        reason: String,
    ) -> Result<TurnOutcome, PlayError> {
        self.ensure_in_progress()?;
        let seat = self.current;
        self.passes += 1;

        let handed_off_to = if hand_off {
            Self::hand_off(players, seat)
        } else {
            None
        };
        let outcome = self.record(seat, TurnAction::Passed { handed_off_to }, reason);

        if self.passes as usize >= PLAYER_COUNT {
            let totals = TeamTotals::of(players, chain);
            let winner = totals.winning_team().representative();
            self.status = MatchStatus::Locked { winner, totals };
            info!(winner = %winner, ac = totals.ac, bd = totals.bd, "table locked");
        } else {
            self.current = seat.next();
        }
        Ok(outcome)
    }

    /// Swap strategy tags with the partner unless the partner is closer to
    /// going out. Human seats never trade.
    fn hand_off(players: &mut PlayerMap<Player>, seat: PlayerId) -> Option<PlayerId> {
        let partner = seat.teammate();
        let own = players[seat].strategy();
        let theirs = players[partner].strategy();
        if !own.is_automated() || !theirs.is_automated() {
            return None;
        }
        if players[partner].hand().len() < players[seat].hand().len() {
            return None;
        }

        players[seat].set_strategy(theirs);
        players[partner].set_strategy(own);
        debug!(from = %seat, to = %partner, strategy = %own, "strategy handed off");
        Some(partner)
    }

    fn record(&mut self, player: PlayerId, action: TurnAction, reason: String) -> TurnOutcome {
        self.turn += 1;
        TurnOutcome {
            turn: self.turn,
            player,
            action,
            reason,
        }
    }
}
