//! Player that always takes the first legal move.

use super::Player;
use anyhow::Result;
use strictly_breakthrough::{GameInProgress, Move};
use tracing::debug;

/// Picks the first move in generation order.
pub struct FirstMovePlayer {
    name: String,
}

impl FirstMovePlayer {
    /// Creates a new first-move player.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Player for FirstMovePlayer {
    fn choose_move(&mut self, _game: &GameInProgress, moves: &[Move]) -> Result<Move> {
        let mv = moves
            .first()
            .copied()
            .ok_or_else(|| anyhow::anyhow!("No legal moves available"))?;
        debug!(player = %self.name, %mv, "Chose first move");
        Ok(mv)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
