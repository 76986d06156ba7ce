//! Game rules for breakthrough.
//!
//! Pure functions deciding whether a position is decided. Rules are kept
//! apart from board storage so search, contracts and the game loop can
//! share them.

pub mod blocked;
pub mod breakthrough;

pub use blocked::is_blocked;
pub use breakthrough::reached_goal;

use crate::action::Move;
use crate::movegen::legal_moves;
use crate::types::{GameState, Side};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Why a game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum WinReason {
    /// A pawn reached the opponent's home row.
    Breakthrough,
    /// The side to move had no legal move and lost.
    Blocked,
}

/// A decided game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_getters::Getters)]
pub struct Win {
    /// The winning side.
    winner: Side,
    /// How the game was won.
    reason: WinReason,
}

impl Win {
    /// Creates a new win record.
    pub fn new(winner: Side, reason: WinReason) -> Self {
        Self { winner, reason }
    }
}

/// Current status of a position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game continues; carries the legal moves of the side to move,
    /// never empty.
    InProgress(Vec<Move>),
    /// Game is over.
    Won(Win),
}

impl GameStatus {
    /// Returns the winner, if the game is over.
    pub fn winner(&self) -> Option<Side> {
        match self {
            GameStatus::InProgress(_) => None,
            GameStatus::Won(win) => Some(win.winner),
        }
    }

    /// True once a winner is determined.
    pub fn is_over(&self) -> bool {
        matches!(self, GameStatus::Won(_))
    }

    /// Legal moves of the side to move; empty once the game is over.
    pub fn moves(&self) -> &[Move] {
        match self {
            GameStatus::InProgress(moves) => moves,
            GameStatus::Won(_) => &[],
        }
    }
}

/// Decides whether `state` is terminal.
///
/// Checked in order: a white pawn on row 2, a black pawn on row 0, then the
/// side to move having no legal move (the other side wins; there are no
/// draws). The legal moves computed along the way are returned in
/// [`GameStatus::InProgress`] for reuse.
#[instrument(level = "trace", skip(state), fields(to_move = %state.to_move()))]
pub fn evaluate(state: &GameState) -> GameStatus {
    for side in [Side::White, Side::Black] {
        if reached_goal(state.board(), side) {
            return GameStatus::Won(Win::new(side, WinReason::Breakthrough));
        }
    }

    let moves = legal_moves(state);
    if moves.is_empty() {
        return GameStatus::Won(Win::new(state.to_move().opponent(), WinReason::Blocked));
    }

    GameStatus::InProgress(moves)
}
