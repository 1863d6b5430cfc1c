//! Selfplay command - batch games between the engine and an opponent

use std::fs::File;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{SeedableRng, random};
use serde::{Deserialize, Serialize};

use crate::board::Mark;
use crate::cli::commands::play::parse_mark_token;
use crate::cli::output;
use crate::error::Error;
use crate::game::{Game, Outcome};
use crate::minimax;

#[derive(Parser, Debug)]
#[command(about = "Run batch games between the engine and an opponent")]
pub struct SelfplayArgs {
    /// Opponent policy: `optimal` or `random`
    #[arg(long, short = 'o', default_value = "random")]
    pub opponent: String,

    /// Number of games
    #[arg(long, short = 'g', default_value_t = 100)]
    pub games: usize,

    /// Mark the engine plays
    #[arg(long, default_value = "x")]
    pub mark: String,

    /// Random seed for reproducibility
    #[arg(long)]
    pub seed: Option<u64>,

    /// Hide the progress bar
    #[arg(long)]
    pub no_progress: bool,

    /// Export the summary as JSON
    #[arg(long)]
    pub export: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OpponentKind {
    Optimal,
    Random,
}

impl OpponentKind {
    fn parse(input: &str) -> crate::Result<Self> {
        match input.trim().to_ascii_lowercase().as_str() {
            "optimal" => Ok(OpponentKind::Optimal),
            "random" => Ok(OpponentKind::Random),
            _ => Err(Error::BadOpponent {
                input: input.to_string(),
            }),
        }
    }
}

/// Summary of a batch run, from the engine's perspective
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelfplayReport {
    pub games: usize,
    pub wins: usize,
    pub draws: usize,
    pub losses: usize,
    pub opponent: String,
    pub engine_mark: char,
    pub seed: u64,
}

pub fn execute(args: SelfplayArgs) -> Result<()> {
    let opponent = OpponentKind::parse(&args.opponent)?;
    let engine_mark = parse_mark_token(&args.mark, "--mark")?;
    let seed = args.seed.unwrap_or_else(random);
    let mut rng = StdRng::seed_from_u64(seed);

    let pb = (!args.no_progress).then(|| output::create_game_progress(args.games as u64));

    let mut wins = 0;
    let mut draws = 0;
    let mut losses = 0;

    for _ in 0..args.games {
        match run_game(engine_mark, opponent, &mut rng)? {
            Outcome::Win(mark) if mark == engine_mark => wins += 1,
            Outcome::Win(_) => losses += 1,
            Outcome::Draw => draws += 1,
        }
        if let Some(pb) = &pb {
            pb.inc(1);
        }
    }
    if let Some(pb) = &pb {
        pb.finish_and_clear();
    }

    let report = SelfplayReport {
        games: args.games,
        wins,
        draws,
        losses,
        opponent: args.opponent.clone(),
        engine_mark: engine_mark.to_char(),
        seed,
    };

    output::print_section("Selfplay results");
    output::print_kv("Opponent", &report.opponent);
    output::print_kv("Engine mark", &report.engine_mark.to_string());
    output::print_kv("Seed", &report.seed.to_string());
    output::print_kv("Games", &report.games.to_string());
    output::print_kv("Wins", &report.wins.to_string());
    output::print_kv("Draws", &report.draws.to_string());
    output::print_kv("Losses", &report.losses.to_string());

    if let Some(path) = &args.export {
        let file =
            File::create(path).with_context(|| format!("create {}", path.display()))?;
        serde_json::to_writer_pretty(file, &report).context("write report")?;
        println!("\nReport written to {}", path.display());
    }

    Ok(())
}

fn run_game(
    engine_mark: Mark,
    opponent: OpponentKind,
    rng: &mut StdRng,
) -> crate::Result<Outcome> {
    let mut game = Game::new();
    loop {
        if let Some(outcome) = game.outcome {
            return Ok(outcome);
        }

        let to_move = game.board.to_move;
        let position = if to_move == engine_mark || opponent == OpponentKind::Optimal {
            minimax::best_move(&game.board, to_move)?.position
        } else {
            *game
                .board
                .legal_moves()
                .choose(rng)
                .ok_or(Error::NoMoveAvailable)?
        };
        game.play(position)?;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opponent_kinds_parse() {
        assert_eq!(OpponentKind::parse("optimal").unwrap(), OpponentKind::Optimal);
        assert_eq!(OpponentKind::parse("Random").unwrap(), OpponentKind::Random);
        assert!(matches!(
            OpponentKind::parse("greedy").unwrap_err(),
            Error::BadOpponent { .. }
        ));
    }

    #[test]
    fn optimal_opponents_always_draw() {
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..3 {
            let outcome = run_game(Mark::X, OpponentKind::Optimal, &mut rng).unwrap();
            assert_eq!(outcome, Outcome::Draw);
        }
    }

    #[test]
    fn random_opponents_never_beat_the_engine() {
        let mut rng = StdRng::seed_from_u64(9);
        for _ in 0..10 {
            let outcome = run_game(Mark::O, OpponentKind::Random, &mut rng).unwrap();
            assert_ne!(outcome, Outcome::Win(Mark::X));
        }
    }
}
