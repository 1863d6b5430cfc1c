//! Board representation and basic operations

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::lines;

/// A side in the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    X,
    O,
}

impl Mark {
    /// Get the opposing mark
    pub fn opponent(self) -> Mark {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }

    pub fn to_char(self) -> char {
        match self {
            Mark::X => 'X',
            Mark::O => 'O',
        }
    }

    pub fn from_char(c: char) -> Option<Mark> {
        match c {
            'X' | 'x' => Some(Mark::X),
            'O' | 'o' | '0' => Some(Mark::O),
            _ => None,
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// Complete board state: cells in row-major order plus the side to move.
///
/// A vacant cell is `None`. The type is `Copy` (10 bytes), so search code
/// can take cheap private copies instead of borrowing mutably.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    pub cells: [Option<Mark>; 9],
    pub to_move: Mark,
}

fn count_marks(cells: &[Option<Mark>; 9]) -> (usize, usize) {
    let mut x_count = 0;
    let mut o_count = 0;
    for cell in cells {
        match cell {
            Some(Mark::X) => x_count += 1,
            Some(Mark::O) => o_count += 1,
            None => {}
        }
    }
    (x_count, o_count)
}

impl Board {
    /// Create a new empty board with X to move
    pub fn new() -> Self {
        Board {
            cells: [None; 9],
            to_move: Mark::X,
        }
    }

    /// Parse a board from text.
    ///
    /// The text must contain exactly 9 cell characters (`X`, `O`, `.`;
    /// whitespace is filtered out) and may carry a `_X`/`_O` suffix declaring
    /// the side to move. Without a suffix the side to move is inferred from
    /// the piece counts with X-first semantics.
    ///
    /// # Errors
    ///
    /// Returns an error if the cell part is not 9 characters, a character is
    /// not a valid cell, the piece counts differ by more than one, or a
    /// declared suffix conflicts with the counts.
    pub fn from_text(s: &str) -> Result<Board> {
        let cleaned: String = s.chars().filter(|c| !c.is_whitespace()).collect();
        let (cells_part, declared) = match cleaned.find('_') {
            Some(idx) => {
                let suffix = &cleaned[idx + 1..];
                let mark = match suffix {
                    "X" | "x" => Mark::X,
                    "O" | "o" => Mark::O,
                    other => {
                        return Err(Error::BadMark {
                            found: other.to_string(),
                        });
                    }
                };
                (&cleaned[..idx], Some(mark))
            }
            None => (cleaned.as_str(), None),
        };

        let chars: Vec<char> = cells_part.chars().collect();
        if chars.len() != 9 {
            return Err(Error::BoardLength {
                expected: 9,
                got: chars.len(),
            });
        }

        let mut cells = [None; 9];
        for (position, &c) in chars.iter().enumerate() {
            cells[position] = match c {
                '.' => None,
                _ => Some(Mark::from_char(c).ok_or(Error::BadCellChar {
                    character: c,
                    position,
                })?),
            };
        }

        let (x_count, o_count) = count_marks(&cells);
        let to_move = match declared {
            Some(mark) => {
                // A declared side is accepted as long as the counts permit it,
                // which also allows O-first positions.
                let consistent = match mark {
                    Mark::X => x_count == o_count || o_count == x_count + 1,
                    Mark::O => x_count == o_count || x_count == o_count + 1,
                };
                if !consistent {
                    return Err(Error::TurnMismatch {
                        declared: mark.to_char(),
                        x_count,
                        o_count,
                    });
                }
                mark
            }
            None => {
                if x_count == o_count {
                    Mark::X
                } else if x_count == o_count + 1 {
                    Mark::O
                } else {
                    return Err(Error::InconsistentCounts { x_count, o_count });
                }
            }
        };

        Ok(Board { cells, to_move })
    }

    pub(crate) fn mark_counts(&self) -> (usize, usize) {
        count_marks(&self.cells)
    }

    /// Get cell at position (0-8)
    pub fn get(&self, position: usize) -> Option<Mark> {
        self.cells[position]
    }

    /// Check if a position is on the board and unoccupied
    pub fn is_vacant(&self, position: usize) -> bool {
        position < 9 && self.cells[position].is_none()
    }

    /// Get all vacant positions in increasing index order
    pub fn vacant_positions(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_none())
            .map(|(i, _)| i)
            .collect()
    }

    /// Place the side-to-move's mark and return the resulting board
    #[must_use = "place returns a new board; the original is unchanged"]
    pub fn place(&self, position: usize) -> Result<Board> {
        if !self.is_vacant(position) {
            return Err(Error::IllegalMove { position });
        }

        let mut next = *self;
        next.cells[position] = Some(self.to_move);
        next.to_move = self.to_move.opponent();
        Ok(next)
    }

    /// Get legal moves in this position (vacant cells when the game is not over)
    pub fn legal_moves(&self) -> Vec<usize> {
        if self.is_terminal() {
            return Vec::new();
        }
        self.vacant_positions()
    }

    /// Check if a mark has completed a line
    pub fn has_won(&self, mark: Mark) -> bool {
        lines::has_line(&self.cells, mark)
    }

    /// Get the winner if there is one
    pub fn winner(&self) -> Option<Mark> {
        if self.has_won(Mark::X) {
            Some(Mark::X)
        } else if self.has_won(Mark::O) {
            Some(Mark::O)
        } else {
            None
        }
    }

    /// Check if every cell is occupied
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| cell.is_some())
    }

    /// Check if the position is a draw (full board, no winner)
    pub fn is_draw(&self) -> bool {
        self.is_full() && self.winner().is_none()
    }

    /// Check if the game is over (win or draw)
    pub fn is_terminal(&self) -> bool {
        self.winner().is_some() || self.is_full()
    }

    /// Get the canonical text form, e.g. `XO......._X`
    pub fn encode(&self) -> String {
        let cells: String = self
            .cells
            .iter()
            .map(|cell| match cell {
                Some(mark) => mark.to_char(),
                None => '.',
            })
            .collect();
        format!("{}_{}", cells, self.to_move.to_char())
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, cell) in self.cells.iter().enumerate() {
            let glyph = match cell {
                Some(mark) => mark.to_char(),
                None => '.',
            };
            write!(f, "{glyph}")?;
            if (i + 1).is_multiple_of(3) && i < 8 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
