use super::board::Board;
use super::types::{Mark, WinningLine};

/// The 8 ways to win, scanned in this order: rows, columns, diagonals.
/// A legal game completes at most one new line per move, so the first match
/// is the only one.
pub const WINNING_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

pub fn check_win(board: &Board) -> Option<Mark> {
    check_win_with_line(board).map(|line| line.mark)
}

pub fn check_win_with_line(board: &Board) -> Option<WinningLine> {
    for cells in WINNING_LINES {
        let mark = board[cells[0]];
        if mark != Mark::Empty && board[cells[1]] == mark && board[cells[2]] == mark {
            return Some(WinningLine { mark, cells });
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::empty_board;

    fn board_from(marks: &[(usize, Mark)]) -> Board {
        let mut board = empty_board();
        for &(cell, mark) in marks {
            board[cell] = mark;
        }
        board
    }

    #[test]
    fn test_empty_board_has_no_winner() {
        assert_eq!(check_win(&empty_board()), None);
    }

    #[test]
    fn test_every_line_is_detected_for_both_marks() {
        for mark in [Mark::X, Mark::O] {
            for cells in WINNING_LINES {
                let board = board_from(&[(cells[0], mark), (cells[1], mark), (cells[2], mark)]);
                let line = check_win_with_line(&board).unwrap();
                assert_eq!(line.mark, mark);
                assert_eq!(line.cells, cells);
            }
        }
    }

    #[test]
    fn test_two_in_a_line_is_not_a_win() {
        let board = board_from(&[(0, Mark::X), (1, Mark::X)]);
        assert_eq!(check_win(&board), None);
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let board = board_from(&[(0, Mark::X), (1, Mark::O), (2, Mark::X)]);
        assert_eq!(check_win(&board), None);
    }

    #[test]
    fn test_full_board_without_three_in_a_row() {
        // X O X / X O O / O X X
        let board = [
            Mark::X,
            Mark::O,
            Mark::X,
            Mark::X,
            Mark::O,
            Mark::O,
            Mark::O,
            Mark::X,
            Mark::X,
        ];
        assert_eq!(check_win(&board), None);
    }

    #[test]
    fn test_winner_reports_its_line_not_another() {
        // O holds the middle column, X holds scattered cells.
        let board = board_from(&[
            (1, Mark::O),
            (4, Mark::O),
            (7, Mark::O),
            (0, Mark::X),
            (2, Mark::X),
            (3, Mark::X),
        ]);
        let line = check_win_with_line(&board).unwrap();
        assert_eq!(line.mark, Mark::O);
        assert_eq!(line.cells, [1, 4, 7]);
    }
}
