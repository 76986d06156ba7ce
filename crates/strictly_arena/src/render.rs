//! Text narration of a game.

use crate::orchestrator::GameEvent;
use std::io::{self, Write};

/// Writes the board and announcements for each game event.
///
/// Boards, turn announcements and search announcements are each followed
/// by a blank line. Boards put the far row on top.
pub struct Narrator<W: Write> {
    out: W,
}

impl<W: Write> Narrator<W> {
    /// Creates a narrator writing to `out`.
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Writes the lines for one event.
    pub fn narrate(&mut self, event: &GameEvent) -> io::Result<()> {
        match event {
            GameEvent::TurnStarted { side, board } => {
                writeln!(self.out, "{board}")?;
                writeln!(self.out, "{side} to move:\n")
            }
            GameEvent::MoveMade { mv, score, .. } => match score {
                Some(_) => writeln!(self.out, "after search, best move is {mv}\n"),
                None => Ok(()),
            },
            GameEvent::GameOver { winner, board, .. } => {
                writeln!(self.out, "{board}")?;
                writeln!(self.out, "winner is {winner}")
            }
        }
    }

    /// Returns the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}
