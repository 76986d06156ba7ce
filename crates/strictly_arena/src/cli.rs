//! Command-line interface for strictly_arena.

use crate::config::{ArenaConfig, ConfigError};
use crate::players::PlayerKind;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing::{debug, instrument};

/// Strictly Arena - 3x3 breakthrough solver and player arena
#[derive(Parser, Debug)]
#[command(name = "strictly_arena")]
#[command(about = "Solve and play 3x3 breakthrough", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Player selection shared by `play` and `tournament`.
#[derive(Args, Debug, Clone, Default)]
pub struct PlayerArgs {
    /// Path to arena config (defaults to strictly_arena.toml if present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Strategy for White
    #[arg(long, value_enum)]
    pub white: Option<PlayerKind>,

    /// Strategy for Black
    #[arg(long, value_enum)]
    pub black: Option<PlayerKind>,

    /// Seed for random players
    #[arg(long)]
    pub seed: Option<u64>,
}

impl PlayerArgs {
    /// Loads the config file and applies these flags on top of it.
    ///
    /// `games` overrides the tournament length. The merged result is
    /// validated, so a flag cannot sneak past checks the file must pass.
    #[instrument(skip(self), fields(config = ?self.config))]
    pub fn resolve(&self, games: Option<u32>) -> Result<ArenaConfig, ConfigError> {
        let config = ArenaConfig::discover(self.config.as_deref())?
            .with_overrides(self.white, self.black, self.seed)
            .with_games(games);
        config.validate()?;
        debug!(?config, "Resolved arena config");
        Ok(config)
    }
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play one game and narrate it
    Play {
        /// Player selection
        #[command(flatten)]
        players: PlayerArgs,

        /// Print the game record as JSON instead of narrating
        #[arg(long)]
        json: bool,
    },

    /// Solve the opening position and print the result
    Solve {
        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Play many games and report the win tally
    Tournament {
        /// Player selection
        #[command(flatten)]
        players: PlayerArgs,

        /// Number of games to play
        #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..))]
        games: Option<u32>,

        /// Print the tally as JSON
        #[arg(long)]
        json: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn args_with_file(dir: &TempDir, content: &str) -> PlayerArgs {
        let path = dir.path().join("arena.toml");
        fs::write(&path, content).expect("write config");
        PlayerArgs {
            config: Some(path),
            ..PlayerArgs::default()
        }
    }

    #[test]
    fn test_parse_play_flags() {
        let cli = Cli::try_parse_from([
            "strictly_arena",
            "play",
            "--white",
            "search",
            "--black",
            "random",
            "--seed",
            "7",
        ])
        .expect("valid arguments");
        match cli.command {
            Command::Play { players, json } => {
                assert_eq!(players.white, Some(PlayerKind::Search));
                assert_eq!(players.black, Some(PlayerKind::Random));
                assert_eq!(players.seed, Some(7));
                assert!(!json);
            }
            other => panic!("Expected play, got {other:?}"),
        }
    }

    #[test]
    fn test_unknown_kind_is_rejected() {
        assert!(Cli::try_parse_from(["strictly_arena", "play", "--white", "oracle"]).is_err());
    }

    #[test]
    fn test_zero_games_flag_is_rejected() {
        assert!(Cli::try_parse_from(["strictly_arena", "tournament", "--games", "0"]).is_err());
    }

    #[test]
    fn test_flags_override_file_values() {
        let dir = TempDir::new().expect("temp dir");
        let mut args = args_with_file(&dir, "white = \"first\"\nblack = \"random\"\nseed = 9\n");
        args.black = Some(PlayerKind::Search);
        args.seed = Some(4);

        let config = args.resolve(Some(3)).expect("valid config");
        assert_eq!(*config.white(), PlayerKind::First);
        assert_eq!(*config.black(), PlayerKind::Search);
        assert_eq!(*config.seed(), Some(4));
        assert_eq!(*config.games(), 3);
    }

    #[test]
    fn test_file_values_kept_without_flags() {
        let dir = TempDir::new().expect("temp dir");
        let args = args_with_file(&dir, "black = \"first\"\ngames = 5\n");
        let config = args.resolve(None).expect("valid config");
        assert_eq!(*config.white(), PlayerKind::Random);
        assert_eq!(*config.black(), PlayerKind::First);
        assert_eq!(*config.games(), 5);
    }

    #[test]
    fn test_resolve_rejects_zero_games() {
        let dir = TempDir::new().expect("temp dir");
        let args = args_with_file(&dir, "");
        assert!(args.resolve(Some(0)).is_err());
    }

    #[test]
    fn test_parse_tournament_games() {
        let cli = Cli::try_parse_from(["strictly_arena", "tournament", "--games", "12"])
            .expect("valid arguments");
        match cli.command {
            Command::Tournament { games, .. } => assert_eq!(games, Some(12)),
            other => panic!("Expected tournament, got {other:?}"),
        }
    }
}
