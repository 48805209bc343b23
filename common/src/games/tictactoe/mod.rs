mod board;
mod bot_controller;
mod game_state;
mod session;
mod types;
mod win_detector;

pub use board::{BOARD_CELLS, Board, empty_board, get_available_moves, is_full};
pub use bot_controller::{BotInput, CENTER_CELL, CORNER_CELLS, EDGE_CELLS, calculate_move};
pub use game_state::{BOT_MARK, GameSnapshot, HUMAN_MARK, TicTacToeGameState};
pub use session::{SessionCommand, TicTacToeSession, TicTacToeSessionState};
pub use types::{GameMode, GameStatus, Mark, RoundOutcome, Score, WinningLine};
pub use win_detector::{WINNING_LINES, check_win, check_win_with_line};
