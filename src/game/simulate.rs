//! Batch play between automated line-ups.
//!
//! Game `i` uses seed `config.seed + i`, so a batch is reproducible and any
//! single game can be replayed on its own with `new_game`.

use serde::{Deserialize, Serialize};
use tracing::info;

use super::session::new_game;
use crate::core::{EngineError, MatchConfig, PlayerMap, Team};

/// Wins per team.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamWins {
    pub ac: usize,
    pub bd: usize,
}

impl TeamWins {
    fn record(&mut self, team: Team) {
        match team {
            Team::AC => self.ac += 1,
            Team::BD => self.bd += 1,
        }
    }
}

/// Tallies from [`simulate`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationSummary {
    pub games: usize,
    /// Wins credited to each seat. A locked table is credited to the
    /// winning team's representative seat, A or B.
    pub wins: PlayerMap<usize>,
    pub team_wins: TeamWins,
    /// Games that ended with all four seats passing.
    pub locked: usize,
}

/// Play `games` fully automated matches and count the results.
///
/// The human seat is ignored; a `User` strategy anywhere is a config error.
pub fn simulate(config: &MatchConfig, games: usize) -> Result<SimulationSummary, EngineError> {
    let base = MatchConfig {
        human_seat: None,
        ..config.clone()
    };
    base.validate()?;

    let mut summary = SimulationSummary::default();
    for i in 0..games {
        let seed = base.seed.wrapping_add(i as u64);
        let mut game = new_game(base.clone().with_seed(seed))?;
        game.advance_automated_turns()?;

        let status = game.status();
        if let Some(winner) = status.winner() {
            summary.wins[winner] += 1;
            summary.team_wins.record(winner.team());
        }
        if status.is_locked() {
            summary.locked += 1;
        }
        summary.games += 1;
    }

    info!(
        games = summary.games,
        ac = summary.team_wins.ac,
        bd = summary.team_wins.bd,
        locked = summary.locked,
        "simulation finished"
    );
    Ok(summary)
}
