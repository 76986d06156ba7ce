//! Strictly Arena - command-line entry point.

use anyhow::{Context, Result};
use clap::Parser;
use std::io;
use strictly_arena::{
    Cli, Command, Narrator, Orchestrator, PlayerArgs, SolveReport, TournamentReport, seeded_rng,
};
use strictly_breakthrough::GameState;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    match cli.command {
        Command::Play { players, json } => run_play(&players, json),
        Command::Solve { json } => run_solve(json),
        Command::Tournament {
            players,
            games,
            json,
        } => run_games(&players, games, json),
    }
}

/// Play a single game
#[instrument(skip(players))]
fn run_play(players: &PlayerArgs, json: bool) -> Result<()> {
    let config = players.resolve(None).context("Failed to load arena config")?;
    info!(white = %config.white(), black = %config.black(), "Starting play");

    let mut rng = seeded_rng(*config.seed());
    let white = config.white().build(&mut rng);
    let black = config.black().build(&mut rng);
    let mut orchestrator = Orchestrator::new(white, black);

    if json {
        let record = orchestrator.run(|_| Ok(()))?;
        println!("{}", serde_json::to_string_pretty(&record)?);
    } else {
        let mut narrator = Narrator::new(io::stdout().lock());
        orchestrator.run(|event| narrator.narrate(event).context("Failed to write narration"))?;
    }
    Ok(())
}

/// Solve the opening position
#[instrument]
fn run_solve(json: bool) -> Result<()> {
    let report = SolveReport::solve(&GameState::new());
    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        report.write_text(io::stdout().lock())?;
    }
    Ok(())
}

/// Play a tournament
#[instrument(skip(players))]
fn run_games(players: &PlayerArgs, games: Option<u32>, json: bool) -> Result<()> {
    let config = players.resolve(games).context("Failed to load arena config")?;
    let report = TournamentReport::run(&config)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        report.write_text(io::stdout().lock())?;
    }
    Ok(())
}
