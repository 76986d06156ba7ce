//! Exhaustive alpha-beta minimax.
//!
//! The game tree of a 3x3 board is small enough to search to the end, so
//! there is no depth limit and no static evaluation: every leaf is a
//! decided position scored [`WHITE_WIN`] or [`BLACK_WIN`].
//!
//! [`maximize`] searches for White and [`minimize`] for Black. They recurse
//! into each other on private copies of the state, so exploring one branch
//! can never disturb its siblings.
//!
//! # Example
//!
//! ```
//! use strictly_breakthrough::{GameState, Searcher};
//!
//! let mut searcher = Searcher::new();
//! let result = searcher.solve(&GameState::new());
//! assert!(result.best_move().is_some());
//! ```

use crate::action::Move;
use crate::rules::{GameStatus, evaluate};
use crate::types::{GameState, Side};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, trace};

/// Search score.
pub type Score = i32;

/// Score of a position White has won.
pub const WHITE_WIN: Score = 1;

/// Score of a position Black has won.
pub const BLACK_WIN: Score = -1;

/// Root window, strictly wider than any attainable score.
pub const FULL_WINDOW: (Score, Score) = (-2, 2);

/// Score of a decided position.
pub fn terminal_score(winner: Side) -> Score {
    match winner {
        Side::White => WHITE_WIN,
        Side::Black => BLACK_WIN,
    }
}

/// Outcome of a search: the minimax score and the move achieving it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_getters::Getters)]
pub struct SearchResult {
    /// [`WHITE_WIN`] or [`BLACK_WIN`] under perfect play.
    score: Score,
    /// First best move in generation order; `None` at decided positions.
    best_move: Option<Move>,
}

impl SearchResult {
    fn terminal(winner: Side) -> Self {
        Self {
            score: terminal_score(winner),
            best_move: None,
        }
    }

    /// The side that wins with perfect play.
    pub fn winner(&self) -> Side {
        if self.score > 0 { Side::White } else { Side::Black }
    }
}

/// Counters collected while searching.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Positions visited, terminal ones included.
    pub nodes: u64,
    /// Decided positions reached.
    pub terminal_nodes: u64,
    /// Times the remaining siblings were pruned.
    pub cutoffs: u64,
}

/// Searches for White's best outcome within `[alpha, beta]`.
pub fn maximize(state: GameState, mut alpha: Score, beta: Score, stats: &mut SearchStats) -> SearchResult {
    stats.nodes += 1;
    let moves = match evaluate(&state) {
        GameStatus::Won(win) => {
            stats.terminal_nodes += 1;
            return SearchResult::terminal(*win.winner());
        }
        GameStatus::InProgress(moves) => moves,
    };

    let mut best = SearchResult {
        score: FULL_WINDOW.0,
        best_move: None,
    };
    for mv in moves {
        let reply = minimize(state.after(mv), alpha, beta, stats);
        if reply.score > best.score {
            best = SearchResult {
                score: reply.score,
                best_move: Some(mv),
            };
        }

        if best.score >= beta {
            stats.cutoffs += 1;
            trace!(score = best.score, beta, "Beta cutoff");
            return best;
        }
        alpha = alpha.max(best.score);
    }
    best
}

/// Searches for Black's best outcome within `[alpha, beta]`.
pub fn minimize(state: GameState, alpha: Score, mut beta: Score, stats: &mut SearchStats) -> SearchResult {
    stats.nodes += 1;
    let moves = match evaluate(&state) {
        GameStatus::Won(win) => {
            stats.terminal_nodes += 1;
            return SearchResult::terminal(*win.winner());
        }
        GameStatus::InProgress(moves) => moves,
    };

    let mut best = SearchResult {
        score: FULL_WINDOW.1,
        best_move: None,
    };
    for mv in moves {
        let reply = maximize(state.after(mv), alpha, beta, stats);
        if reply.score < best.score {
            best = SearchResult {
                score: reply.score,
                best_move: Some(mv),
            };
        }

        if best.score <= alpha {
            stats.cutoffs += 1;
            trace!(score = best.score, alpha, "Alpha cutoff");
            return best;
        }
        beta = beta.min(best.score);
    }
    best
}

/// Runs full-window searches and keeps their statistics.
#[derive(Debug, Clone, Default)]
pub struct Searcher {
    stats: SearchStats,
}

impl Searcher {
    /// Creates a searcher with zeroed statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Statistics of the most recent search.
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Solves `state` for the side to move.
    ///
    /// Roots the maximizer when White is to move and the minimizer when
    /// Black is, always with [`FULL_WINDOW`].
    #[instrument(skip(self, state), fields(to_move = %state.to_move()))]
    pub fn solve(&mut self, state: &GameState) -> SearchResult {
        self.search_as(state, state.to_move())
    }

    /// Searches `state` with the procedure of `side`, regardless of who is to move.
    #[instrument(skip(self, state))]
    pub fn search_as(&mut self, state: &GameState, side: Side) -> SearchResult {
        self.stats = SearchStats::default();
        let (alpha, beta) = FULL_WINDOW;
        debug!(%side, "Starting search");

        let result = match side {
            Side::White => maximize(*state, alpha, beta, &mut self.stats),
            Side::Black => minimize(*state, alpha, beta, &mut self.stats),
        };

        info!(
            score = result.score,
            best_move = ?result.best_move.map(|mv| mv.to_string()),
            nodes = self.stats.nodes,
            cutoffs = self.stats.cutoffs,
            "Search complete"
        );
        result
    }
}
