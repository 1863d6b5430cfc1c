//! Structural validation for externally supplied positions
//!
//! The engine itself assumes well-formed input; these checks guard the CLI
//! boundary where arbitrary text can enter.

use crate::board::{Board, Mark};
use crate::lines::WINNING_LINES;

impl Board {
    /// Check whether the position is reachable in a legal game.
    ///
    /// Verifies piece counts, turn consistency, and win structure. O-first
    /// games are accepted, so the count check is symmetric.
    pub fn is_valid(&self) -> bool {
        let (x_count, o_count) = self.mark_counts();
        let diff = x_count as isize - o_count as isize;

        if diff.abs() > 1 {
            return false;
        }

        // The recorded turn must match the counts
        match self.to_move {
            Mark::X => {
                if diff == 1 {
                    return false;
                }
            }
            Mark::O => {
                if diff == -1 {
                    return false;
                }
            }
        }

        let x_wins = self.has_won(Mark::X);
        let o_wins = self.has_won(Mark::O);

        if x_wins && o_wins {
            return false;
        }

        // A winner must have moved last
        if x_wins && self.to_move != Mark::O {
            return false;
        }
        if o_wins && self.to_move != Mark::X {
            return false;
        }

        // Multiple completed lines are only possible when one move finished
        // them all at once, i.e. the lines share a cell
        if x_wins && !self.winning_lines_share_cell(Mark::X) {
            return false;
        }
        if o_wins && !self.winning_lines_share_cell(Mark::O) {
            return false;
        }

        true
    }

    fn winning_lines_share_cell(&self, mark: Mark) -> bool {
        let completed: Vec<&[usize; 3]> = WINNING_LINES
            .iter()
            .filter(|line| line.iter().all(|&idx| self.cells[idx] == Some(mark)))
            .collect();

        if completed.len() < 2 {
            return true;
        }

        (0..9).any(|pos| completed.iter().all(|line| line.contains(&pos)))
    }
}
