use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{Mutex, mpsc};

use crate::games::{GameBroadcaster, SessionRng};
use crate::log;
use super::bot_controller::{BotInput, calculate_move};
use super::game_state::TicTacToeGameState;
use super::types::GameMode;

#[derive(Debug, Clone)]
pub enum SessionCommand {
    PlaceMark { cell: usize },
    ChangeMode(GameMode),
    RestartRound,
    NewGame,
    Quit,
}

#[derive(Clone)]
pub struct TicTacToeSessionState {
    pub game_state: Arc<Mutex<TicTacToeGameState>>,
    pub rng: Arc<Mutex<SessionRng>>,
    pub bot_move_delay: Duration,
}

impl TicTacToeSessionState {
    pub fn create(mode: GameMode, seed: u64, bot_move_delay: Duration) -> Self {
        Self {
            game_state: Arc::new(Mutex::new(TicTacToeGameState::new(mode))),
            rng: Arc::new(Mutex::new(SessionRng::new(seed))),
            bot_move_delay,
        }
    }
}

pub struct TicTacToeSession;

impl TicTacToeSession {
    /// Drives one game session until `Quit` arrives or the command channel
    /// closes. On the bot's turn the move is scheduled behind a fixed
    /// presentation delay; a reset or mode change arriving during the delay
    /// abandons the pending move instead of applying it to the new board.
    pub async fn run(
        state: TicTacToeSessionState,
        broadcaster: impl GameBroadcaster,
        mut command_rx: mpsc::UnboundedReceiver<SessionCommand>,
    ) {
        loop {
            let bot_turn = state.game_state.lock().await.is_bot_turn();

            broadcast_state(&state, &broadcaster, bot_turn).await;

            if bot_turn {
                let delay = tokio::time::sleep(state.bot_move_delay);
                tokio::pin!(delay);

                loop {
                    tokio::select! {
                        _ = &mut delay => {
                            play_bot_turn(&state, &broadcaster).await;
                            break;
                        }
                        command = command_rx.recv() => {
                            let Some(command) = command else { return };
                            if Self::handle_command(&state, &broadcaster, command).await {
                                return;
                            }
                            // A reset or mode change ends the bot's turn;
                            // rejected input leaves the delay running.
                            if !state.game_state.lock().await.is_bot_turn() {
                                break;
                            }
                        }
                    }
                }
            } else {
                let Some(command) = command_rx.recv().await else { return };
                if Self::handle_command(&state, &broadcaster, command).await {
                    return;
                }
            }
        }
    }

    /// Returns true when the session should shut down.
    async fn handle_command(
        state: &TicTacToeSessionState,
        broadcaster: &impl GameBroadcaster,
        command: SessionCommand,
    ) -> bool {
        match command {
            SessionCommand::PlaceMark { cell } => {
                let mut game_state = state.game_state.lock().await;
                match game_state.place_human_mark(cell) {
                    Ok(()) => {
                        if let Some(outcome) = game_state.round_outcome() {
                            drop(game_state);
                            broadcaster.broadcast_round_over(outcome).await;
                        }
                    }
                    Err(e) => {
                        log!("Ignored placement at cell {}: {}", cell, e);
                    }
                }
            }
            SessionCommand::ChangeMode(mode) => {
                state.game_state.lock().await.change_mode(mode);
            }
            SessionCommand::RestartRound => {
                state.game_state.lock().await.restart_round();
            }
            SessionCommand::NewGame => {
                state.game_state.lock().await.new_game();
            }
            SessionCommand::Quit => return true,
        }
        false
    }
}

async fn play_bot_turn(state: &TicTacToeSessionState, broadcaster: &impl GameBroadcaster) {
    let mut game_state = state.game_state.lock().await;

    if !game_state.is_bot_turn() {
        return;
    }

    let Some(bot_input) = BotInput::from_game_state(&game_state) else {
        return;
    };

    let calculated_move = {
        let mut rng = state.rng.lock().await;
        calculate_move(&bot_input, &mut rng)
    };

    let Some(cell) = calculated_move else { return };

    match game_state.place_mark(cell) {
        Ok(()) => {
            if let Some(outcome) = game_state.round_outcome() {
                drop(game_state);
                broadcaster.broadcast_round_over(outcome).await;
            }
        }
        Err(e) => {
            log!("Bot failed to place mark at cell {}: {}", cell, e);
        }
    }
}

async fn broadcast_state(
    state: &TicTacToeSessionState,
    broadcaster: &impl GameBroadcaster,
    bot_thinking: bool,
) {
    let snapshot = state.game_state.lock().await.snapshot(bot_thinking);
    broadcaster.broadcast_state(snapshot).await;
}
