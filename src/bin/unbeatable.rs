//! Terminal front-end for the perfect-play tic-tac-toe engine
//!
//! This binary provides a unified interface for:
//! - Playing interactive games against the engine
//! - Analyzing positions and per-move values
//! - Running batch games against reference opponents

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "unbeatable")]
#[command(version, about = "Tic-tac-toe against a perfect-play engine", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play an interactive game against the engine
    Play(unbeatable::cli::commands::play::PlayArgs),

    /// Analyze a position and report the engine's move
    Analyze(unbeatable::cli::commands::analyze::AnalyzeArgs),

    /// Run batch games between the engine and an opponent
    Selfplay(unbeatable::cli::commands::selfplay::SelfplayArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Play(args) => unbeatable::cli::commands::play::execute(args),
        Commands::Analyze(args) => unbeatable::cli::commands::analyze::execute(args),
        Commands::Selfplay(args) => unbeatable::cli::commands::selfplay::execute(args),
    }
}
