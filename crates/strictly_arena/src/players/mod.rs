//! Player trait and implementations.

mod first;
mod human;
mod random;
mod search;

pub use first::FirstMovePlayer;
pub use human::HumanPlayer;
pub use random::RandomPlayer;
pub use search::SearchPlayer;

use anyhow::Result;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use strictly_breakthrough::{GameInProgress, Move, Score};
use tracing::debug;

/// Trait for anything that can pick a breakthrough move.
pub trait Player {
    /// Chooses one of `moves`, the legal moves of the side to move in `game`.
    fn choose_move(&mut self, game: &GameInProgress, moves: &[Move]) -> Result<Move>;

    /// Returns the player's display name.
    fn name(&self) -> &str;

    /// Score reported by the most recent search, for players that search.
    fn last_score(&self) -> Option<Score> {
        None
    }
}

/// The move-choosing strategies available from the command line and config.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    clap::ValueEnum,
    strum::Display,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum PlayerKind {
    /// Uniformly random legal moves.
    Random,
    /// Perfect play by exhaustive alpha-beta search.
    Search,
    /// Always the first legal move.
    First,
    /// Moves typed on standard input.
    Human,
}

impl PlayerKind {
    /// Builds a player of this kind.
    ///
    /// Random players draw their own seed from `rng`, so one seeded
    /// generator reproduces a whole arena session.
    pub fn build(self, rng: &mut StdRng) -> Box<dyn Player> {
        debug!(kind = %self, "Building player");
        match self {
            PlayerKind::Random => Box::new(RandomPlayer::new(
                "Random",
                StdRng::seed_from_u64(rng.random()),
            )),
            PlayerKind::Search => Box::new(SearchPlayer::new("Search")),
            PlayerKind::First => Box::new(FirstMovePlayer::new("First")),
            PlayerKind::Human => Box::new(HumanPlayer::stdio("Human")),
        }
    }
}

/// Creates the arena's master generator, from entropy when no seed is given.
pub fn seeded_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}
