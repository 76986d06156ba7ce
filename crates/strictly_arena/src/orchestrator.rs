//! Game orchestration between players.

use crate::players::Player;
use anyhow::{Context, Result};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use strictly_breakthrough::{
    Board, GameFinished, GameInProgress, GameResult, Move, Ply, Score, Side, WinReason,
};
use tracing::{debug, info, instrument};

/// Events emitted while a game is played.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    /// A side is about to choose a move.
    TurnStarted {
        /// Side to move.
        side: Side,
        /// Board before the move.
        board: Board,
    },
    /// A move was chosen and played.
    MoveMade {
        /// Side that moved.
        side: Side,
        /// Name of the player that chose the move.
        player: String,
        /// The move played.
        mv: Move,
        /// Search score behind the move, if the player searched.
        score: Option<Score>,
    },
    /// The game has a winner.
    GameOver {
        /// Winning side.
        winner: Side,
        /// How the game was decided.
        reason: WinReason,
        /// Final board.
        board: Board,
    },
}

/// Summary of a finished game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct GameRecord {
    /// Name of the white player.
    white: String,
    /// Name of the black player.
    black: String,
    /// Winning side.
    winner: Side,
    /// How the game was decided.
    reason: WinReason,
    /// Every ply in order.
    history: Vec<Ply>,
    /// Number of plies played.
    plies: usize,
}

impl GameRecord {
    fn new(white: &str, black: &str, finished: &GameFinished) -> Self {
        Self {
            white: white.to_string(),
            black: black.to_string(),
            winner: finished.winner(),
            reason: *finished.win().reason(),
            history: finished.history().to_vec(),
            plies: finished.history().len(),
        }
    }
}

/// Orchestrates one game between two players.
#[derive(derive_new::new)]
pub struct Orchestrator {
    white: Box<dyn Player>,
    black: Box<dyn Player>,
}

impl Orchestrator {
    /// Plays a game from the initial position to its end.
    ///
    /// Every event is handed to `on_event`; an error from it aborts the game.
    #[instrument(skip_all, fields(white = %self.white.name(), black = %self.black.name()))]
    pub fn run<F>(&mut self, mut on_event: F) -> Result<GameRecord>
    where
        F: FnMut(&GameEvent) -> Result<()>,
    {
        info!("Starting game");
        let mut game = GameInProgress::new();

        loop {
            let side = game.to_move();
            on_event(&GameEvent::TurnStarted {
                side,
                board: *game.board(),
            })?;

            let player = match side {
                Side::White => &mut self.white,
                Side::Black => &mut self.black,
            };

            debug!(player = %player.name(), %side, "Waiting for move");
            let mv = player
                .choose_move(&game, game.legal_moves())
                .with_context(|| format!("{} failed to choose a move", player.name()))?;

            on_event(&GameEvent::MoveMade {
                side,
                player: player.name().to_string(),
                mv,
                score: player.last_score(),
            })?;

            game = match game.make_move(mv)? {
                GameResult::InProgress(next) => next,
                GameResult::Finished(finished) => {
                    on_event(&GameEvent::GameOver {
                        winner: finished.winner(),
                        reason: *finished.win().reason(),
                        board: *finished.board(),
                    })?;
                    let record = GameRecord::new(self.white.name(), self.black.name(), &finished);
                    info!(winner = %record.winner, plies = record.plies, "Game over");
                    return Ok(record);
                }
            };
        }
    }
}
