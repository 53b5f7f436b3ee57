//! A match in progress and the operations a front end needs.
//!
//! ## Usage
//!
//! ```
//! use domino_engine::core::{MatchConfig, PlayerId};
//! use domino_engine::game::new_game;
//!
//! let mut game = new_game(MatchConfig::against_bots(PlayerId::A).with_seed(7)).unwrap();
//!
//! // A human at seat A moves first.
//! let playable = game.playable_for_human().unwrap();
//! game.apply_human_move(playable.indices[0], None).unwrap();
//! game.advance_automated_turns().unwrap();
//!
//! let snapshot = game.snapshot();
//! assert!(snapshot.turn >= 1);
//! ```

use serde::Serialize;
use tracing::info;

use crate::core::{
    ConfigError, GameRng, Hand, MatchConfig, PlayError, Player, PlayerId, PlayerMap, Team, Tile,
    TileSet, PLAYER_COUNT,
};
use crate::rules::{MatchState, MatchStatus, TeamTotals, TurnOutcome};
use crate::strategy::{list_playable_tile_indices, validate_move, PlayableTiles, StrategyKind};
use crate::table::{Chain, Ends, PlayRecord, Side};

/// Tiles dealt to each seat.
pub const HAND_SIZE: usize = 7;

/// Seat that leads the first turn.
pub const FIRST_SEAT: PlayerId = PlayerId::A;

/// Shuffle, deal and seat a new match.
pub fn new_game(config: MatchConfig) -> Result<Match, ConfigError> {
    config.validate()?;

    let root = GameRng::new(config.seed);
    let mut tiles = TileSet::standard();
    tiles.shuffle(&mut root.for_context("deal"));

    let strategies = config.starting_strategies();
    let mut hands = tiles.deal(PLAYER_COUNT, HAND_SIZE).into_iter();
    let players = PlayerMap::new(|id| {
        Player::new(id, strategies[id], Hand::new(hands.next().unwrap_or_default()))
    });

    info!(seed = config.seed, human = ?config.human_seat, "new match dealt");
    Ok(Match {
        players,
        chain: Chain::new(),
        state: MatchState::new(FIRST_SEAT),
        rng: root.for_context("strategy"),
        log: Vec::new(),
        config,
    })
}

/// Chain, hands, turn state and the move log for one match.
#[derive(Clone, Debug)]
pub struct Match {
    config: MatchConfig,
    players: PlayerMap<Player>,
    chain: Chain,
    state: MatchState,
    rng: GameRng,
    log: Vec<TurnOutcome>,
}

impl Match {
    #[must_use]
    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    #[must_use]
    pub fn players(&self) -> &PlayerMap<Player> {
        &self.players
    }

    #[must_use]
    pub fn player(&self, id: PlayerId) -> &Player {
        &self.players[id]
    }

    #[must_use]
    pub fn chain(&self) -> &Chain {
        &self.chain
    }

    #[must_use]
    pub fn state(&self) -> &MatchState {
        &self.state
    }

    #[must_use]
    pub fn status(&self) -> MatchStatus {
        self.state.status()
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.state.is_terminal()
    }

    /// Every processed turn, oldest first.
    #[must_use]
    pub fn move_log(&self) -> &[TurnOutcome] {
        &self.log
    }

    #[must_use]
    pub fn is_human_turn(&self) -> bool {
        !self.is_over()
            && self.config.human_seat == Some(self.state.current())
            && self.players[self.state.current()].strategy() == StrategyKind::User
    }

    /// Tiles `seat` could play right now.
    #[must_use]
    pub fn playable(&self, seat: PlayerId) -> PlayableTiles {
        list_playable_tile_indices(self.players[seat].hand(), &self.chain)
    }

    /// The human's playable tiles, or `None` when it is not their turn.
    #[must_use]
    pub fn playable_for_human(&self) -> Option<PlayableTiles> {
        self.is_human_turn()
            .then(|| self.playable(self.state.current()))
    }

    fn ensure_human_turn(&self) -> Result<PlayerId, PlayError> {
        if self.is_over() {
            return Err(PlayError::MatchOver);
        }
        if !self.is_human_turn() {
            return Err(PlayError::NotHumanTurn);
        }
        Ok(self.state.current())
    }

    /// Play the human's tile at `index`. `side` is required when the tile
    /// fits two different ends.
    pub fn apply_human_move(
        &mut self,
        index: usize,
        side: Option<Side>,
    ) -> Result<TurnOutcome, PlayError> {
        let seat = self.ensure_human_turn()?;
        let (tile, placement) = validate_move(self.players[seat].hand(), &self.chain, index, side)?;

        let reason = format!("{seat} chose {tile}");
        let outcome = self.state.play(
            &mut self.players,
            &mut self.chain,
            index,
            placement.side,
            reason,
        )?;
        self.log.push(outcome.clone());
        Ok(outcome)
    }

    /// Pass for the human. Only allowed with nothing to play.
    pub fn pass_human_turn(&mut self) -> Result<TurnOutcome, PlayError> {
        let seat = self.ensure_human_turn()?;
        if !self.playable(seat).is_empty() {
            return Err(PlayError::MustPlay);
        }

        let outcome = self.state.pass(
            &mut self.players,
            &self.chain,
            false,
            format!("{seat} has no playable tile"),
        )?;
        self.log.push(outcome.clone());
        Ok(outcome)
    }

    /// Run one automated turn. `Ok(None)` when the human is up.
    pub fn play_turn(&mut self) -> Result<Option<TurnOutcome>, PlayError> {
        let outcome = self.state.step(
            &mut self.players,
            &mut self.chain,
            &mut self.rng,
            self.config.double_priority,
        )?;
        if let Some(outcome) = &outcome {
            self.log.push(outcome.clone());
        }
        Ok(outcome)
    }

    /// Run automated turns until the human is up or the match ends.
    ///
    /// On a finished match this processes nothing and returns an empty list.
    pub fn advance_automated_turns(&mut self) -> Result<Vec<TurnOutcome>, PlayError> {
        let mut outcomes = Vec::new();
        while !self.is_over() {
            match self.play_turn()? {
                Some(outcome) => outcomes.push(outcome),
                None => break,
            }
        }
        Ok(outcomes)
    }

    /// Remaining pips per team right now.
    #[must_use]
    pub fn team_totals(&self) -> TeamTotals {
        TeamTotals::of(&self.players, &self.chain)
    }

    /// Read-only picture of the match for rendering or serialization.
    #[must_use]
    pub fn snapshot(&self) -> MatchSnapshot {
        let current = self.state.current();
        let status = self.state.status();
        let players = self
            .players
            .values()
            .map(|p| PlayerSnapshot {
                name: p.id(),
                team: p.team(),
                strategy: p.strategy(),
                tile_count: p.hand().len(),
                tiles: p.hand().tiles().to_vec(),
                is_current: p.id() == current,
            })
            .collect();

        let tail_start = self.log.len().saturating_sub(self.config.log_tail);
        MatchSnapshot {
            chain: self.chain.tiles().copied().collect(),
            ends: self.chain.ends(),
            players,
            current,
            turn: self.state.turn(),
            passes: self.state.passes(),
            status,
            game_over: status.is_terminal(),
            winner: status.winner(),
            locked: status.is_locked(),
            team_totals: self.team_totals(),
            history: self.chain.history().iter().copied().collect(),
            recent_moves: self.log[tail_start..].to_vec(),
        }
    }
}

/// One seat in a [`MatchSnapshot`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PlayerSnapshot {
    pub name: PlayerId,
    pub team: Team,
    pub strategy: StrategyKind,
    pub tile_count: usize,
    pub tiles: Vec<Tile>,
    /// Seat whose turn it is. After the match ends this stays on the seat
    /// that made the last move.
    pub is_current: bool,
}

/// Everything a front end shows between turns.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct MatchSnapshot {
    /// Tiles in chain order, as oriented on the table.
    pub chain: Vec<Tile>,
    pub ends: Option<Ends>,
    pub players: Vec<PlayerSnapshot>,
    pub current: PlayerId,
    pub turn: u32,
    pub passes: u32,
    pub status: MatchStatus,
    pub game_over: bool,
    pub winner: Option<PlayerId>,
    pub locked: bool,
    pub team_totals: TeamTotals,
    pub history: Vec<PlayRecord>,
    /// The last few entries of the move log.
    pub recent_moves: Vec<TurnOutcome>,
}

impl MatchSnapshot {
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
