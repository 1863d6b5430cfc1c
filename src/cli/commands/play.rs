//! Play command - interactive game against the engine

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::thread;
use std::time::Duration;

use anyhow::{Context, Result, bail};
use clap::Parser;

use crate::board::Mark;
use crate::cli::output;
use crate::game::{Game, Outcome, Seats};
use crate::minimax;

#[derive(Parser, Debug)]
#[command(about = "Play an interactive game against the engine")]
pub struct PlayArgs {
    /// Which mark the human plays (`x` or `o`); X always opens
    #[arg(long, short = 'm', default_value = "x")]
    pub mark: String,

    /// Pause before the engine's reply, in milliseconds
    #[arg(long, default_value_t = 0)]
    pub delay_ms: u64,

    /// Save the finished game transcript as JSON
    #[arg(long)]
    pub export: Option<PathBuf>,
}

pub fn execute(args: PlayArgs) -> Result<()> {
    let human = parse_mark_token(&args.mark, "--mark")?;
    let seats = Seats::with_human(human);

    let stdin = io::stdin();
    let mut input = stdin.lock();
    run(&mut input, seats, args.delay_ms, args.export.as_deref())
}

fn run(
    input: &mut impl BufRead,
    seats: Seats,
    delay_ms: u64,
    export: Option<&Path>,
) -> Result<()> {
    let mut game = Game::new();
    println!(
        "You play {}, the computer plays {}. X moves first.",
        seats.human, seats.computer
    );

    loop {
        if game.board.to_move == seats.human {
            println!("{}", output::render_grid(&game.board));
            let position = prompt_move(input, &game)?;
            game.play(position)?;
        } else {
            if delay_ms > 0 {
                thread::sleep(Duration::from_millis(delay_ms));
            }
            let chosen = minimax::best_move(&game.board, seats.computer)?;
            game.play(chosen.position)?;
            println!("Computer plays {}.", chosen.position);
        }

        if let Some(outcome) = game.outcome {
            println!("{}", output::render_grid(&game.board));
            match outcome {
                Outcome::Win(mark) if mark == seats.computer => println!("Computer wins!"),
                Outcome::Win(_) => println!("You win!"),
                Outcome::Draw => println!("It's a draw!"),
            }
            if let Some(path) = export {
                game.save(path)
                    .with_context(|| format!("save transcript to {}", path.display()))?;
                println!("Transcript written to {}", path.display());
            }
            return Ok(());
        }
    }
}

fn prompt_move(input: &mut impl BufRead, game: &Game) -> Result<usize> {
    loop {
        print!("Your move (0-8): ");
        io::stdout().flush().context("flush stdout")?;

        let mut line = String::new();
        let read = input.read_line(&mut line).context("read move")?;
        if read == 0 {
            bail!("input closed before the game finished");
        }

        match line.trim().parse::<usize>() {
            Ok(position) if game.board.is_vacant(position) => return Ok(position),
            Ok(position) => println!("Position {position} is not available."),
            Err(_) => println!("Enter a cell index between 0 and 8."),
        }
    }
}

pub(crate) fn parse_mark_token(value: &str, flag: &str) -> Result<Mark> {
    match value.trim().to_ascii_lowercase().as_str() {
        "x" => Ok(Mark::X),
        "o" => Ok(Mark::O),
        other => bail!("invalid value '{other}' for {flag} (expected 'x' or 'o')"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mark_tokens_parse_case_insensitively() {
        assert_eq!(parse_mark_token("x", "--mark").unwrap(), Mark::X);
        assert_eq!(parse_mark_token("O", "--mark").unwrap(), Mark::O);
        assert!(parse_mark_token("q", "--mark").is_err());
    }

    #[test]
    fn scripted_game_runs_to_completion() {
        // Human X blunders twice; the engine punishes on the anti-diagonal.
        let mut input: &[u8] = b"0\n1\n3\n";
        let seats = Seats::with_human(Mark::X);
        run(&mut input, seats, 0, None).unwrap();
    }

    #[test]
    fn invalid_input_is_reprompted() {
        let mut input: &[u8] = b"abc\n9\n0\n1\n3\n";
        let seats = Seats::with_human(Mark::X);
        run(&mut input, seats, 0, None).unwrap();
    }

    #[test]
    fn closed_input_is_an_error() {
        let mut input: &[u8] = b"";
        let seats = Seats::with_human(Mark::X);
        assert!(run(&mut input, seats, 0, None).is_err());
    }

    #[test]
    fn finished_game_transcript_is_exported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("transcript.json");

        let mut input: &[u8] = b"0\n1\n3\n";
        let seats = Seats::with_human(Mark::X);
        run(&mut input, seats, 0, Some(&path)).unwrap();

        let transcript = crate::game::Game::load(&path).unwrap();
        assert_eq!(transcript.outcome, Some(Outcome::Win(Mark::O)));
        assert_eq!(transcript.moves.len(), 6);
    }
}
