//! Game session management

use serde::{Deserialize, Serialize};

use crate::board::{Board, Mark};
use crate::error::{Error, Result};

/// A move that was played
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Move {
    pub position: usize,
    pub mark: Mark,
}

/// Outcome of a finished game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    Win(Mark),
    Draw,
}

/// Human/computer mark assignment, fixed for the whole game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Seats {
    pub human: Mark,
    pub computer: Mark,
}

impl Seats {
    /// Assign the human a mark; the computer takes the other one.
    pub fn with_human(human: Mark) -> Self {
        Seats {
            human,
            computer: human.opponent(),
        }
    }
}

/// A game in progress, with move history and final outcome
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Game {
    pub board: Board,
    pub moves: Vec<Move>,
    pub outcome: Option<Outcome>,
}

impl Game {
    /// Start a fresh game; X moves first
    pub fn new() -> Self {
        Game {
            board: Board::new(),
            moves: Vec::new(),
            outcome: None,
        }
    }

    /// Play a move for the side to move.
    ///
    /// # Errors
    ///
    /// Returns [`Error::GameOver`] once an outcome is set and
    /// [`Error::IllegalMove`] for occupied or out-of-bounds positions.
    pub fn play(&mut self, position: usize) -> Result<()> {
        if self.outcome.is_some() {
            return Err(Error::GameOver);
        }

        let mark = self.board.to_move;
        self.board = self.board.place(position)?;
        self.moves.push(Move { position, mark });

        if let Some(winner) = self.board.winner() {
            self.outcome = Some(Outcome::Win(winner));
        } else if self.board.is_full() {
            self.outcome = Some(Outcome::Draw);
        }

        Ok(())
    }

    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }

    /// Save the transcript as JSON
    pub fn save<P: AsRef<std::path::Path>>(&self, path: P) -> Result<()> {
        let file = std::fs::File::create(path)?;
        serde_json::to_writer_pretty(file, self)?;
        Ok(())
    }

    /// Load a transcript from JSON
    pub fn load<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        let file = std::fs::File::open(path)?;
        let game = serde_json::from_reader(file)?;
        Ok(game)
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
