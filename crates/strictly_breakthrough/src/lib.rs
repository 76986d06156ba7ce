//! Strictly Breakthrough - pure 3x3 breakthrough game logic.
//!
//! Two sides each start with a row of three pawns. Pawns step one row
//! forward onto an empty cell or capture diagonally forward. A side wins by
//! reaching the far row, or when the opponent is left without a move.
//!
//! # Architecture
//!
//! - **Types**: board, cells, coordinates and the side to move
//! - **Move generation**: legal moves in a fixed, row-major order
//! - **Rules**: terminal detection (breakthrough or blocked)
//! - **Search**: exhaustive alpha-beta minimax that solves any position
//! - **Game**: typestate game with history, contracts and invariants
//!
//! # Example
//!
//! ```
//! use strictly_breakthrough::{GameInProgress, GameResult, Searcher};
//!
//! let game = GameInProgress::new();
//! let mut searcher = Searcher::new();
//! let best = searcher.solve(game.state()).best_move().expect("opening has moves");
//! match game.make_move(best).expect("search returns legal moves") {
//!     GameResult::InProgress(game) => assert_eq!(game.history().len(), 1),
//!     GameResult::Finished(_) => unreachable!("one ply cannot finish the game"),
//! }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod contracts;
mod game;
mod movegen;
mod search;
mod types;

pub mod invariants;
pub mod rules;

// Crate-level exports - Domain types
pub use types::{BOARD_SIZE, Board, Cell, Coord, GameState, Side};

// Crate-level exports - Actions and errors
pub use action::{Move, MoveError, ParseBoardError, ParseMoveError, Ply};

// Crate-level exports - Move generation
pub use movegen::{is_legal, legal_moves};

// Crate-level exports - Terminal detection
pub use rules::{GameStatus, Win, WinReason, evaluate};

// Crate-level exports - Search
pub use search::{
    BLACK_WIN, FULL_WINDOW, Score, SearchResult, SearchStats, Searcher, WHITE_WIN, maximize,
    minimize, terminal_score,
};

// Crate-level exports - Contracts
pub use contracts::{Contract, LegalMove, MoveContract};

// Crate-level exports - Game phases
pub use game::{GameFinished, GameInProgress, GameResult};
