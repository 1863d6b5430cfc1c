//! Exhaustive game-tree search for the computer's move
//!
//! The search is plain minimax over at most 9 plies. Values are taken from
//! the maximizing side's perspective: +10 win, -10 loss, 0 draw. Depth does
//! not enter the score, and ties between equally valued moves always keep
//! the lowest cell index, so the chosen move is fully deterministic.

use serde::{Deserialize, Serialize};

use crate::board::{Board, Mark};
use crate::error::{Error, Result};
use crate::lines;

pub const WIN_SCORE: i32 = 10;
pub const LOSS_SCORE: i32 = -10;
pub const DRAW_SCORE: i32 = 0;

/// A move together with its minimax value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoredMove {
    pub position: usize,
    pub score: i32,
}

/// Evaluate every legal move for the side to move on `board`.
///
/// Scores are from `maximizer`'s perspective. Candidates are returned in
/// increasing position order, one entry per vacant cell.
///
/// # Errors
///
/// Returns [`Error::NoMoveAvailable`] if the position is already won or full;
/// callers are expected to check for termination before asking for a move.
pub fn move_scores(board: &Board, maximizer: Mark) -> Result<Vec<ScoredMove>> {
    if board.is_terminal() {
        return Err(Error::NoMoveAvailable);
    }

    let mut cells = board.cells;
    let to_move = board.to_move;
    let mut candidates = Vec::new();

    for position in 0..9 {
        if cells[position].is_some() {
            continue;
        }
        cells[position] = Some(to_move);
        let score = search(&mut cells, to_move.opponent(), maximizer);
        cells[position] = None;
        candidates.push(ScoredMove { position, score });
    }

    Ok(candidates)
}

/// Pick the optimal move for the side to move on `board`.
///
/// When the side to move is `maximizer` the strictly greatest score wins,
/// otherwise the strictly smallest; ties keep the first-encountered
/// (lowest-index) candidate. The input board is never mutated.
///
/// # Errors
///
/// Returns [`Error::NoMoveAvailable`] if the position is already won or full.
pub fn best_move(board: &Board, maximizer: Mark) -> Result<ScoredMove> {
    let candidates = move_scores(board, maximizer)?;
    let to_move = board.to_move;

    let mut iter = candidates.into_iter();
    let mut best = iter.next().ok_or(Error::NoMoveAvailable)?;
    for candidate in iter {
        if better(to_move, maximizer, candidate.score, best.score) {
            best = candidate;
        }
    }
    Ok(best)
}

fn better(to_move: Mark, maximizer: Mark, candidate: i32, current: i32) -> bool {
    if to_move == maximizer {
        candidate > current
    } else {
        candidate < current
    }
}

/// Recursive minimax over a scratch cell array.
///
/// Terminal checks run at the start of every call, loss before win before
/// draw. Every placement is undone before the next candidate is tried, so
/// the array is back in its entry state when the call returns.
fn search(cells: &mut [Option<Mark>; 9], to_move: Mark, maximizer: Mark) -> i32 {
    if lines::has_line(cells, maximizer.opponent()) {
        return LOSS_SCORE;
    }
    if lines::has_line(cells, maximizer) {
        return WIN_SCORE;
    }

    let mut best: Option<i32> = None;
    for position in 0..9 {
        if cells[position].is_some() {
            continue;
        }
        cells[position] = Some(to_move);
        let score = search(cells, to_move.opponent(), maximizer);
        cells[position] = None;

        best = Some(match best {
            Some(current) if !better(to_move, maximizer, score, current) => current,
            _ => score,
        });
    }

    // No vacant cell means the position is drawn.
    best.unwrap_or(DRAW_SCORE)
}
