//! Player backed by the exhaustive alpha-beta solver.

use super::Player;
use anyhow::Result;
use strictly_breakthrough::{GameInProgress, Move, Score, SearchStats, Searcher};
use tracing::{debug, instrument};

/// Plays perfectly by solving every position it is given.
pub struct SearchPlayer {
    name: String,
    searcher: Searcher,
    last_score: Option<Score>,
}

impl SearchPlayer {
    /// Creates a new search player.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            searcher: Searcher::new(),
            last_score: None,
        }
    }

    /// Statistics of the most recent search.
    pub fn stats(&self) -> &SearchStats {
        self.searcher.stats()
    }
}

impl Player for SearchPlayer {
    #[instrument(skip_all, fields(player = %self.name, side = %game.to_move()))]
    fn choose_move(&mut self, game: &GameInProgress, _moves: &[Move]) -> Result<Move> {
        let result = self.searcher.solve(game.state());
        self.last_score = Some(*result.score());
        let mv = (*result.best_move())
            .ok_or_else(|| anyhow::anyhow!("Search returned no move for an undecided game"))?;
        debug!(%mv, score = *result.score(), "Search chose move");
        Ok(mv)
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn last_score(&self) -> Option<Score> {
        self.last_score
    }
}
