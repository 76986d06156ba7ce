//! Human player that types moves as text.

use super::Player;
use anyhow::{Context, Result};
use std::io::{self, BufRead, StdinLock, Stdout, Write};
use strictly_breakthrough::{GameInProgress, Move};
use tracing::{debug, warn};

/// Human player reading `row,col->row,col` lines from `input`.
///
/// Unparseable or illegal moves are reported on `output` and asked for
/// again. End of input is an error.
pub struct HumanPlayer<R: BufRead, W: Write> {
    name: String,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> HumanPlayer<R, W> {
    /// Creates a human player over arbitrary input and output.
    pub fn new(name: impl Into<String>, input: R, output: W) -> Self {
        Self {
            name: name.into(),
            input,
            output,
        }
    }

    /// Returns the prompt sink.
    pub fn output(&self) -> &W {
        &self.output
    }
}

impl HumanPlayer<StdinLock<'static>, Stdout> {
    /// Creates a human player on the terminal.
    pub fn stdio(name: impl Into<String>) -> Self {
        Self::new(name, io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Player for HumanPlayer<R, W> {
    fn choose_move(&mut self, game: &GameInProgress, moves: &[Move]) -> Result<Move> {
        loop {
            write!(self.output, "{} move (row,col->row,col): ", game.to_move())?;
            self.output.flush()?;

            let mut line = String::new();
            let read = self
                .input
                .read_line(&mut line)
                .context("Failed to read move")?;
            if read == 0 {
                anyhow::bail!("Input closed before {} chose a move", self.name);
            }

            match line.trim().parse::<Move>() {
                Ok(mv) if moves.contains(&mv) => {
                    debug!(player = %self.name, %mv, "Human chose move");
                    return Ok(mv);
                }
                Ok(mv) => {
                    warn!(player = %self.name, %mv, "Rejected illegal move");
                    let options: Vec<String> = moves.iter().map(ToString::to_string).collect();
                    writeln!(
                        self.output,
                        "{mv} is not legal, choose one of: {}",
                        options.join(", ")
                    )?;
                }
                Err(e) => {
                    warn!(player = %self.name, error = %e, "Rejected unparseable move");
                    writeln!(self.output, "{e}")?;
                }
            }
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}
