//! Repeated games between two player kinds.

use crate::config::ArenaConfig;
use crate::orchestrator::{GameRecord, Orchestrator};
use crate::players::seeded_rng;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use strictly_breakthrough::Side;
use tracing::{debug, info, instrument};

/// Win counts per side.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tally {
    /// Games won by White.
    pub white_wins: u32,
    /// Games won by Black.
    pub black_wins: u32,
}

impl Tally {
    /// Counts one finished game.
    pub fn record(&mut self, record: &GameRecord) {
        match record.winner() {
            Side::White => self.white_wins += 1,
            Side::Black => self.black_wins += 1,
        }
    }

    /// Total games counted.
    pub fn games(&self) -> u32 {
        self.white_wins + self.black_wins
    }
}

/// Plays `config.games()` games, building fresh players for each.
///
/// A single generator seeded from the config feeds every game, so each game
/// gets new random seeds while the whole run stays reproducible.
#[instrument(skip(config), fields(white = %config.white(), black = %config.black(), games = config.games()))]
pub fn run_tournament(config: &ArenaConfig) -> Result<Tally> {
    let mut rng = seeded_rng(*config.seed());
    let mut tally = Tally::default();

    for game in 0..*config.games() {
        let white = config.white().build(&mut rng);
        let black = config.black().build(&mut rng);
        let record = Orchestrator::new(white, black).run(|_| Ok(()))?;
        debug!(game, winner = %record.winner(), plies = record.plies(), "Tournament game finished");
        tally.record(&record);
    }

    info!(
        white_wins = tally.white_wins,
        black_wins = tally.black_wins,
        "Tournament complete"
    );
    Ok(tally)
}
