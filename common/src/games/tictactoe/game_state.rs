use super::board::{self, Board};
use super::types::{GameMode, GameStatus, Mark, RoundOutcome, Score, WinningLine};
use super::win_detector::check_win_with_line;

/// The human always plays X and opens every round; the bot, when enabled,
/// always plays O.
pub const HUMAN_MARK: Mark = Mark::X;
pub const BOT_MARK: Mark = Mark::O;

#[derive(Debug)]
pub struct TicTacToeGameState {
    pub board: Board,
    pub current_mark: Mark,
    pub mode: GameMode,
    pub score: Score,
    pub status: GameStatus,
    pub winning_line: Option<WinningLine>,
}

/// Immutable copy of everything the presentation layer renders.
#[derive(Debug, Clone)]
pub struct GameSnapshot {
    pub board: Board,
    pub current_mark: Mark,
    pub mode: GameMode,
    pub score: Score,
    pub status: GameStatus,
    pub status_line: String,
    pub round_active: bool,
    pub winning_line: Option<WinningLine>,
    pub bot_thinking: bool,
}

impl TicTacToeGameState {
    pub fn new(mode: GameMode) -> Self {
        Self {
            board: board::empty_board(),
            current_mark: HUMAN_MARK,
            mode,
            score: Score::default(),
            status: GameStatus::InProgress,
            winning_line: None,
        }
    }

    pub fn round_active(&self) -> bool {
        self.status == GameStatus::InProgress
    }

    pub fn is_bot_turn(&self) -> bool {
        self.mode == GameMode::HumanVsBot && self.round_active() && self.current_mark == BOT_MARK
    }

    /// Placement coming from the presentation layer. In human-vs-bot mode
    /// the bot's turn belongs to the session, so human input is rejected
    /// until the bot has moved.
    pub fn place_human_mark(&mut self, cell: usize) -> Result<(), String> {
        if self.is_bot_turn() {
            return Err("It is the bot's turn".to_string());
        }
        self.place_mark(cell)
    }

    pub fn place_mark(&mut self, cell: usize) -> Result<(), String> {
        if !self.round_active() {
            return Err("Round is already over".to_string());
        }

        if cell >= board::BOARD_CELLS {
            return Err(format!("Cell {} is out of bounds", cell));
        }

        if self.board[cell] != Mark::Empty {
            return Err(format!("Cell {} is already marked", cell));
        }

        self.board[cell] = self.current_mark;

        self.check_round_over();

        if self.round_active() {
            self.switch_turn();
        }

        Ok(())
    }

    fn switch_turn(&mut self) {
        self.current_mark = match self.current_mark {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
            Mark::Empty => unreachable!(),
        };
    }

    fn check_round_over(&mut self) {
        if let Some(line) = check_win_with_line(&self.board) {
            self.status = match line.mark {
                Mark::X => {
                    self.score.x_wins += 1;
                    GameStatus::XWon
                }
                Mark::O => {
                    self.score.o_wins += 1;
                    GameStatus::OWon
                }
                Mark::Empty => unreachable!(),
            };
            self.winning_line = Some(line);
            return;
        }

        if board::is_full(&self.board) {
            self.status = GameStatus::Draw;
            self.score.draws += 1;
        }
    }

    pub fn round_outcome(&self) -> Option<RoundOutcome> {
        match self.status {
            GameStatus::InProgress => None,
            GameStatus::XWon => Some(RoundOutcome::Win(Mark::X)),
            GameStatus::OWon => Some(RoundOutcome::Win(Mark::O)),
            GameStatus::Draw => Some(RoundOutcome::Draw),
        }
    }

    /// Clears the board for the next round. The score persists across
    /// rounds; only `new_game` resets it.
    pub fn restart_round(&mut self) {
        self.board = board::empty_board();
        self.current_mark = HUMAN_MARK;
        self.status = GameStatus::InProgress;
        self.winning_line = None;
    }

    pub fn new_game(&mut self) {
        self.restart_round();
        self.score = Score::default();
    }

    pub fn change_mode(&mut self, mode: GameMode) {
        self.mode = mode;
        self.restart_round();
    }

    pub fn status_line(&self) -> String {
        match self.status {
            GameStatus::InProgress => format!("Turn: {}", self.current_mark),
            GameStatus::XWon => "Winner: X".to_string(),
            GameStatus::OWon => "Winner: O".to_string(),
            GameStatus::Draw => "Draw!".to_string(),
        }
    }

    pub fn snapshot(&self, bot_thinking: bool) -> GameSnapshot {
        GameSnapshot {
            board: self.board,
            current_mark: self.current_mark,
            mode: self.mode,
            score: self.score,
            status: self.status,
            status_line: self.status_line(),
            round_active: self.round_active(),
            winning_line: self.winning_line,
            bot_thinking,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn play(state: &mut TicTacToeGameState, cells: &[usize]) {
        for &cell in cells {
            state.place_mark(cell).unwrap();
        }
    }

    #[test]
    fn test_marks_alternate_starting_with_x() {
        let mut state = TicTacToeGameState::new(GameMode::HumanVsHuman);
        assert_eq!(state.current_mark, Mark::X);

        play(&mut state, &[0, 4]);
        assert_eq!(state.board[0], Mark::X);
        assert_eq!(state.board[4], Mark::O);
        assert_eq!(state.current_mark, Mark::X);
        assert_eq!(state.status_line(), "Turn: X");
    }

    #[test]
    fn test_occupied_cell_is_rejected() {
        let mut state = TicTacToeGameState::new(GameMode::HumanVsHuman);
        play(&mut state, &[0]);

        assert!(state.place_mark(0).is_err());
        // The failed placement must not consume the turn.
        assert_eq!(state.current_mark, Mark::O);
    }

    #[test]
    fn test_out_of_bounds_cell_is_rejected() {
        let mut state = TicTacToeGameState::new(GameMode::HumanVsHuman);
        assert!(state.place_mark(9).is_err());
    }

    #[test]
    fn test_win_ends_round_and_scores() {
        let mut state = TicTacToeGameState::new(GameMode::HumanVsHuman);
        // X: 0, 1, 2 / O: 3, 4
        play(&mut state, &[0, 3, 1, 4, 2]);

        assert_eq!(state.status, GameStatus::XWon);
        assert!(!state.round_active());
        assert_eq!(state.score.x_wins, 1);
        assert_eq!(state.score.o_wins, 0);
        assert_eq!(state.winning_line.unwrap().cells, [0, 1, 2]);
        assert_eq!(state.status_line(), "Winner: X");
    }

    #[test]
    fn test_no_placement_after_round_over() {
        let mut state = TicTacToeGameState::new(GameMode::HumanVsHuman);
        play(&mut state, &[0, 3, 1, 4, 2]);

        assert!(state.place_mark(5).is_err());
        assert_eq!(state.board[5], Mark::Empty);
    }

    #[test]
    fn test_full_board_without_winner_is_a_draw() {
        let mut state = TicTacToeGameState::new(GameMode::HumanVsHuman);
        // X O X / X O O / O X X with X starting: no three in a row.
        play(&mut state, &[0, 1, 2, 4, 3, 5, 7, 6, 8]);

        assert_eq!(state.status, GameStatus::Draw);
        assert!(!state.round_active());
        assert_eq!(state.score.draws, 1);
        assert_eq!(state.status_line(), "Draw!");
    }

    #[test]
    fn test_human_cannot_move_on_bots_turn() {
        let mut state = TicTacToeGameState::new(GameMode::HumanVsBot);
        state.place_human_mark(0).unwrap();

        assert!(state.is_bot_turn());
        assert!(state.place_human_mark(1).is_err());
        assert_eq!(state.board[1], Mark::Empty);

        // The session places the bot's mark directly.
        state.place_mark(4).unwrap();
        assert!(!state.is_bot_turn());
        state.place_human_mark(1).unwrap();
    }

    #[test]
    fn test_restart_round_keeps_score() {
        let mut state = TicTacToeGameState::new(GameMode::HumanVsHuman);
        play(&mut state, &[0, 3, 1, 4, 2]);
        state.restart_round();

        assert_eq!(state.board, board::empty_board());
        assert_eq!(state.current_mark, Mark::X);
        assert!(state.round_active());
        assert_eq!(state.winning_line, None);
        assert_eq!(state.score.x_wins, 1);
    }

    #[test]
    fn test_new_game_zeroes_score() {
        let mut state = TicTacToeGameState::new(GameMode::HumanVsHuman);
        play(&mut state, &[0, 3, 1, 4, 2]);
        state.new_game();

        assert_eq!(state.score, Score::default());
        assert!(state.round_active());
    }

    #[test]
    fn test_change_mode_restarts_round_but_keeps_score() {
        let mut state = TicTacToeGameState::new(GameMode::HumanVsHuman);
        play(&mut state, &[0, 3, 1, 4, 2]);
        state.change_mode(GameMode::HumanVsBot);

        assert_eq!(state.mode, GameMode::HumanVsBot);
        assert_eq!(state.board, board::empty_board());
        assert_eq!(state.score.x_wins, 1);
    }

    #[test]
    fn test_score_tallies_across_rounds() {
        let mut state = TicTacToeGameState::new(GameMode::HumanVsHuman);

        // Round 1: X wins on the top row.
        play(&mut state, &[0, 3, 1, 4, 2]);
        state.restart_round();
        // Round 2: O wins on the middle column.
        play(&mut state, &[0, 1, 2, 4, 3, 7]);
        state.restart_round();
        // Round 3: draw.
        play(&mut state, &[0, 1, 2, 4, 3, 5, 7, 6, 8]);

        assert_eq!(state.score.x_wins, 1);
        assert_eq!(state.score.o_wins, 1);
        assert_eq!(state.score.draws, 1);
    }
}
