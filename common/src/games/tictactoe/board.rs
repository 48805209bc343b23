use super::types::Mark;

pub const BOARD_CELLS: usize = 9;

/// 3x3 board in row-major order: rows 0-1-2 / 3-4-5 / 6-7-8.
pub type Board = [Mark; BOARD_CELLS];

pub fn empty_board() -> Board {
    [Mark::Empty; BOARD_CELLS]
}

pub fn get_available_moves(board: &Board) -> Vec<usize> {
    board
        .iter()
        .enumerate()
        .filter(|&(_, &cell)| cell == Mark::Empty)
        .map(|(cell, _)| cell)
        .collect()
}

pub fn is_full(board: &Board) -> bool {
    board.iter().all(|&cell| cell != Mark::Empty)
}
