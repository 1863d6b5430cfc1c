//! Analyze command - best move and per-move values for a position

use std::fs::File;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Parser;
use serde::Serialize;

use crate::board::Board;
use crate::cli::commands::play::parse_mark_token;
use crate::cli::output;
use crate::minimax::{self, ScoredMove};

#[derive(Parser, Debug)]
#[command(about = "Analyze a position and report the engine's move")]
pub struct AnalyzeArgs {
    /// Position as nine cells (`X`, `O`, `.`), optionally suffixed with
    /// `_X`/`_O` to declare the side to move, e.g. `XOX.O...._O`
    pub position: String,

    /// Mark whose result is maximized (defaults to the side to move)
    #[arg(long)]
    pub maximizer: Option<String>,

    /// Export the analysis as JSON
    #[arg(long)]
    pub export: Option<PathBuf>,
}

#[derive(Serialize)]
struct Analysis {
    position: String,
    to_move: char,
    maximizer: char,
    best: ScoredMove,
    candidates: Vec<ScoredMove>,
}

pub fn execute(args: AnalyzeArgs) -> Result<()> {
    let board = Board::from_text(&args.position)
        .with_context(|| format!("parse position '{}'", args.position))?;

    if !board.is_valid() {
        bail!("position '{}' is not reachable in a legal game", args.position);
    }
    if board.is_terminal() {
        bail!("position is already decided; nothing to analyze");
    }

    let maximizer = match &args.maximizer {
        Some(value) => parse_mark_token(value, "--maximizer")?,
        None => board.to_move,
    };

    let candidates = minimax::move_scores(&board, maximizer)?;
    let best = minimax::best_move(&board, maximizer)?;

    output::print_section("Position");
    println!("{}", output::render_grid(&board));
    output::print_kv("To move", &board.to_move.to_string());
    output::print_kv("Maximizer", &maximizer.to_string());

    output::print_section("Engine move");
    output::print_kv("Cell", &best.position.to_string());
    output::print_kv("Value", &describe_score(best.score));

    output::print_section("All moves");
    for candidate in &candidates {
        output::print_kv(
            &format!("cell {}", candidate.position),
            &describe_score(candidate.score),
        );
    }

    if let Some(path) = &args.export {
        let analysis = Analysis {
            position: board.encode(),
            to_move: board.to_move.to_char(),
            maximizer: maximizer.to_char(),
            best,
            candidates,
        };
        let file =
            File::create(path).with_context(|| format!("create {}", path.display()))?;
        serde_json::to_writer_pretty(file, &analysis).context("write analysis")?;
        println!("\nAnalysis written to {}", path.display());
    }

    Ok(())
}

fn describe_score(score: i32) -> String {
    match score.signum() {
        1 => format!("{score} (win)"),
        -1 => format!("{score} (loss)"),
        _ => "0 (draw)".to_string(),
    }
}
