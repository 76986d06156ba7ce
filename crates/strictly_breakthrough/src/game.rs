//! Phase-specific typestate structs for a game of breakthrough.
//!
//! A game in progress always has at least one legal move for the side to
//! move; a finished game always has a winner. Each phase is its own type,
//! so neither fact needs an `Option` to express.

use crate::action::{Move, MoveError, Ply};
use crate::contracts::{Contract, MoveContract, check_invariants};
use crate::rules::{GameStatus, Win, evaluate};
use crate::types::{Board, Cell, GameState, Side};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

// ─────────────────────────────────────────────────────────────
//  InProgress Phase
// ─────────────────────────────────────────────────────────────

/// Game in progress - can accept moves.
///
/// Serializes as position plus history. Loading recomputes the legal moves
/// and rejects decided positions or histories that do not lead to the position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "SavedGame", try_from = "SavedGame")]
pub struct GameInProgress {
    pub(crate) state: GameState,
    pub(crate) history: Vec<Ply>,
    pub(crate) moves: Vec<Move>,
}

impl GameInProgress {
    /// Starts a game from the initial position, White to move.
    #[instrument]
    pub fn new() -> Self {
        let state = GameState::new();
        Self {
            moves: crate::movegen::legal_moves(&state),
            state,
            history: Vec::new(),
        }
    }

    /// Returns the current position.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        self.state.board()
    }

    /// Returns the side to move.
    pub fn to_move(&self) -> Side {
        self.state.to_move()
    }

    /// Returns move history.
    pub fn history(&self) -> &[Ply] {
        &self.history
    }

    /// Legal moves of the side to move, in generation order. Never empty.
    pub fn legal_moves(&self) -> &[Move] {
        &self.moves
    }

    /// Makes a move, consuming self and transitioning to the next phase.
    ///
    /// Contract enforcement:
    /// - Preconditions checked always (the move must be legal)
    /// - Postconditions checked in debug builds only
    #[instrument(skip(self), fields(mv = %mv, side = %self.to_move()))]
    pub fn make_move(self, mv: Move) -> Result<GameResult, MoveError> {
        MoveContract::pre(&self, &mv)?;

        #[cfg(debug_assertions)]
        let before = self.clone();

        let mut game = self;
        let side = game.state.to_move();
        let capture = game.state.board().cell(mv.to()) != Cell::Empty;
        game.state.apply_move(mv);
        game.history.push(Ply { side, mv, capture });
        debug!(capture, "Move applied");

        #[cfg(debug_assertions)]
        MoveContract::post(&before, &game)?;

        match evaluate(&game.state) {
            GameStatus::Won(win) => {
                info!(winner = %win.winner(), reason = %win.reason(), plies = game.history.len(), "Game over");
                Ok(GameResult::Finished(GameFinished {
                    state: game.state,
                    history: game.history,
                    win,
                }))
            }
            GameStatus::InProgress(moves) => {
                game.moves = moves;
                Ok(GameResult::InProgress(game))
            }
        }
    }

    /// Replays moves from the initial position.
    ///
    /// Stops with [`MoveError::GameOver`] if moves remain after the game
    /// has been decided.
    #[instrument(skip(moves), fields(count = moves.len()))]
    pub fn replay(moves: &[Move]) -> Result<GameResult, MoveError> {
        let mut result = GameResult::InProgress(GameInProgress::new());
        for &mv in moves {
            result = match result {
                GameResult::InProgress(game) => game.make_move(mv)?,
                GameResult::Finished(game) => return Err(MoveError::GameOver(*game.win().winner())),
            };
        }
        Ok(result)
    }
}

impl Default for GameInProgress {
    fn default() -> Self {
        Self::new()
    }
}

/// On-disk form of a game in progress.
#[derive(Serialize, Deserialize)]
struct SavedGame {
    state: GameState,
    history: Vec<Ply>,
}

impl From<GameInProgress> for SavedGame {
    fn from(game: GameInProgress) -> Self {
        Self {
            state: game.state,
            history: game.history,
        }
    }
}

impl TryFrom<SavedGame> for GameInProgress {
    type Error = MoveError;

    fn try_from(saved: SavedGame) -> Result<Self, Self::Error> {
        let moves = match evaluate(&saved.state) {
            GameStatus::Won(win) => return Err(MoveError::GameOver(*win.winner())),
            GameStatus::InProgress(moves) => moves,
        };
        let game = Self {
            state: saved.state,
            history: saved.history,
            moves,
        };
        check_invariants(&game)?;
        debug!(plies = game.history.len(), "Loaded game in progress");
        Ok(game)
    }
}

// ─────────────────────────────────────────────────────────────
//  Finished Phase
// ─────────────────────────────────────────────────────────────

/// Game finished - winner determined.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameFinished {
    state: GameState,
    history: Vec<Ply>,
    win: Win,
}

impl GameFinished {
    /// Returns the winner and how they won.
    pub fn win(&self) -> &Win {
        &self.win
    }

    /// Returns the winning side.
    pub fn winner(&self) -> Side {
        *self.win.winner()
    }

    /// Returns the final position.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Returns the final board.
    pub fn board(&self) -> &Board {
        self.state.board()
    }

    /// Returns move history.
    pub fn history(&self) -> &[Ply] {
        &self.history
    }
}

// ─────────────────────────────────────────────────────────────
//  Result Type
// ─────────────────────────────────────────────────────────────

/// Result of making a move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameResult {
    /// Game continues.
    InProgress(GameInProgress),
    /// Game finished.
    Finished(GameFinished),
}

impl GameResult {
    /// Returns the game if it continues.
    pub fn in_progress(self) -> Option<GameInProgress> {
        match self {
            GameResult::InProgress(game) => Some(game),
            GameResult::Finished(_) => None,
        }
    }

    /// Returns the game if it is over.
    pub fn finished(self) -> Option<GameFinished> {
        match self {
            GameResult::InProgress(_) => None,
            GameResult::Finished(game) => Some(game),
        }
    }

    /// Returns the current position of either phase.
    pub fn state(&self) -> &GameState {
        match self {
            GameResult::InProgress(game) => game.state(),
            GameResult::Finished(game) => game.state(),
        }
    }

    /// Returns the history of either phase.
    pub fn history(&self) -> &[Ply] {
        match self {
            GameResult::InProgress(game) => game.history(),
            GameResult::Finished(game) => game.history(),
        }
    }
}
