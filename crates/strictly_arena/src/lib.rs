//! Strictly Arena - players and game loop for 3x3 breakthrough.
//!
//! # Architecture
//!
//! - **Players**: random, search, first-move and human strategies
//! - **Orchestrator**: drives one game and reports events
//! - **Narration**: board diagrams and announcements for a terminal
//! - **Config**: TOML arena settings with command-line overrides
//! - **Reports**: solver and tournament summaries as text or JSON
//!
//! # Example
//!
//! ```
//! use strictly_arena::{Orchestrator, RandomPlayer, SearchPlayer};
//! use strictly_breakthrough::Side;
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//!
//! let mut orchestrator = Orchestrator::new(
//!     Box::new(RandomPlayer::new("Random", StdRng::seed_from_u64(1))),
//!     Box::new(SearchPlayer::new("Search")),
//! );
//! let record = orchestrator.run(|_| Ok(())).expect("game completes");
//! assert_eq!(*record.winner(), Side::Black);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod orchestrator;
mod players;
mod render;
mod report;
mod tournament;

// Crate-level exports - CLI
pub use cli::{Cli, Command, PlayerArgs};

// Crate-level exports - Configuration
pub use config::{ArenaConfig, ConfigError, DEFAULT_CONFIG_FILE};

// Crate-level exports - Players
pub use players::{
    FirstMovePlayer, HumanPlayer, Player, PlayerKind, RandomPlayer, SearchPlayer, seeded_rng,
};

// Crate-level exports - Game loop
pub use orchestrator::{GameEvent, GameRecord, Orchestrator};
pub use render::Narrator;
pub use report::{SolveReport, TournamentReport};
pub use tournament::{Tally, run_tournament};
