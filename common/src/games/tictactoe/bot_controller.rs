use crate::games::SessionRng;
use super::board::{self, Board};
use super::game_state::TicTacToeGameState;
use super::types::Mark;
use super::win_detector::check_win;

pub const CENTER_CELL: usize = 4;
pub const CORNER_CELLS: [usize; 4] = [0, 2, 6, 8];
pub const EDGE_CELLS: [usize; 4] = [1, 3, 5, 7];

pub struct BotInput {
    pub board: Board,
    pub bot_mark: Mark,
    pub opponent_mark: Mark,
}

impl BotInput {
    pub fn from_game_state(state: &TicTacToeGameState) -> Option<Self> {
        let bot_mark = state.current_mark;
        let opponent_mark = bot_mark.opponent()?;
        Some(Self {
            board: state.board,
            bot_mark,
            opponent_mark,
        })
    }
}

/// Greedy move selection, first matching tier wins: take an immediate win,
/// block the opponent's immediate win, take the center, take a random empty
/// corner, take a random empty edge. No look-ahead beyond one hypothetical
/// placement per candidate cell.
pub fn calculate_move(input: &BotInput, rng: &mut SessionRng) -> Option<usize> {
    let available_moves = board::get_available_moves(&input.board);
    if available_moves.is_empty() {
        return None;
    }

    let mut board = input.board;

    if let Some(cell) = find_winning_move(&mut board, input.bot_mark, &available_moves) {
        return Some(cell);
    }

    if let Some(cell) = find_winning_move(&mut board, input.opponent_mark, &available_moves) {
        return Some(cell);
    }

    if board[CENTER_CELL] == Mark::Empty {
        return Some(CENTER_CELL);
    }

    if let Some(cell) = pick_random_empty(&board, &CORNER_CELLS, rng) {
        return Some(cell);
    }

    if let Some(cell) = pick_random_empty(&board, &EDGE_CELLS, rng) {
        return Some(cell);
    }

    available_moves.first().copied()
}

fn find_winning_move(board: &mut Board, mark: Mark, moves: &[usize]) -> Option<usize> {
    for &cell in moves {
        board[cell] = mark;
        let winner = check_win(board);
        board[cell] = Mark::Empty;

        if winner == Some(mark) {
            return Some(cell);
        }
    }
    None
}

fn pick_random_empty(board: &Board, candidates: &[usize], rng: &mut SessionRng) -> Option<usize> {
    let empty: Vec<usize> = candidates
        .iter()
        .copied()
        .filter(|&cell| board[cell] == Mark::Empty)
        .collect();
    if empty.is_empty() {
        return None;
    }
    Some(empty[rng.random_range(0..empty.len())])
}
