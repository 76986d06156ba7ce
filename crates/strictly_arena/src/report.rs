//! Printable results of the `solve` and `tournament` commands.

use crate::config::ArenaConfig;
use crate::players::PlayerKind;
use crate::tournament::{Tally, run_tournament};
use anyhow::Result;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::io::{self, Write};
use strictly_breakthrough::{GameState, SearchResult, SearchStats, Searcher, Side};
use tracing::instrument;

/// Outcome of solving one position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct SolveReport {
    /// Side to move in the solved position.
    to_move: Side,
    /// Score and best move.
    result: SearchResult,
    /// Counters from the search.
    stats: SearchStats,
}

impl SolveReport {
    /// Solves `state` for the side to move.
    #[instrument(skip(state), fields(to_move = %state.to_move()))]
    pub fn solve(state: &GameState) -> Self {
        let mut searcher = Searcher::new();
        let result = searcher.solve(state);
        Self {
            to_move: state.to_move(),
            result,
            stats: *searcher.stats(),
        }
    }

    /// Writes the report as plain text.
    pub fn write_text<W: Write>(&self, mut out: W) -> io::Result<()> {
        writeln!(
            out,
            "{} to move, {} wins with perfect play",
            self.to_move,
            self.result.winner()
        )?;
        writeln!(out, "score: {}", self.result.score())?;
        match self.result.best_move() {
            Some(mv) => writeln!(out, "best move: {mv}")?,
            None => writeln!(out, "best move: none")?,
        }
        writeln!(
            out,
            "nodes: {}, terminal: {}, cutoffs: {}",
            self.stats.nodes, self.stats.terminal_nodes, self.stats.cutoffs
        )
    }
}

/// Outcome of a tournament.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct TournamentReport {
    /// Strategy that played White.
    white: PlayerKind,
    /// Strategy that played Black.
    black: PlayerKind,
    /// Wins per side.
    tally: Tally,
}

impl TournamentReport {
    /// Plays the tournament described by `config`.
    pub fn run(config: &ArenaConfig) -> Result<Self> {
        let tally = run_tournament(config)?;
        Ok(Self {
            white: *config.white(),
            black: *config.black(),
            tally,
        })
    }

    /// Writes the report as plain text.
    pub fn write_text<W: Write>(&self, mut out: W) -> io::Result<()> {
        writeln!(
            out,
            "{} (white) vs {} (black) over {} games",
            self.white,
            self.black,
            self.tally.games()
        )?;
        writeln!(out, "white wins: {}", self.tally.white_wins)?;
        writeln!(out, "black wins: {}", self.tally.black_wins)
    }
}
