//! Winning-line analysis

use crate::board::Mark;

/// The 8 winning lines on the 3x3 board: rows, columns, diagonals
pub const WINNING_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8], // rows
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8], // columns
    [0, 4, 8],
    [2, 4, 6], // diagonals
];

/// Check if `mark` occupies all three cells of at least one winning line.
///
/// Any number of completed lines counts as a single win.
pub fn has_line(cells: &[Option<Mark>; 9], mark: Mark) -> bool {
    WINNING_LINES
        .iter()
        .any(|line| line.iter().all(|&idx| cells[idx] == Some(mark)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_row() {
        let mut cells = [None; 9];
        cells[0] = Some(Mark::X);
        cells[1] = Some(Mark::X);
        cells[2] = Some(Mark::X);

        assert!(has_line(&cells, Mark::X));
        assert!(!has_line(&cells, Mark::O));
    }

    #[test]
    fn detects_column() {
        let mut cells = [None; 9];
        cells[1] = Some(Mark::O);
        cells[4] = Some(Mark::O);
        cells[7] = Some(Mark::O);

        assert!(has_line(&cells, Mark::O));
        assert!(!has_line(&cells, Mark::X));
    }

    #[test]
    fn detects_diagonal() {
        let mut cells = [None; 9];
        cells[2] = Some(Mark::X);
        cells[4] = Some(Mark::X);
        cells[6] = Some(Mark::X);

        assert!(has_line(&cells, Mark::X));
    }

    #[test]
    fn empty_board_has_no_line() {
        let cells = [None; 9];
        assert!(!has_line(&cells, Mark::X));
        assert!(!has_line(&cells, Mark::O));
    }

    #[test]
    fn two_in_a_line_is_not_a_win() {
        let mut cells = [None; 9];
        cells[0] = Some(Mark::X);
        cells[1] = Some(Mark::X);

        assert!(!has_line(&cells, Mark::X));
    }

    #[test]
    fn mixed_line_is_not_a_win() {
        let mut cells = [None; 9];
        cells[0] = Some(Mark::X);
        cells[1] = Some(Mark::O);
        cells[2] = Some(Mark::X);

        assert!(!has_line(&cells, Mark::X));
        assert!(!has_line(&cells, Mark::O));
    }

    #[test]
    fn double_line_still_counts_as_win() {
        // X owns the top row and the left column at once
        let mut cells = [None; 9];
        for idx in [0, 1, 2, 3, 6] {
            cells[idx] = Some(Mark::X);
        }

        assert!(has_line(&cells, Mark::X));
    }
}
