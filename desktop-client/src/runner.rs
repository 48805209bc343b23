use std::time::Duration;

use common::games::tictactoe::{SessionCommand, TicTacToeSession, TicTacToeSessionState};
use common::log;
use tokio::sync::mpsc;

use crate::broadcaster::UiBroadcaster;
use crate::config::ClientConfig;
use crate::state::SharedState;

pub async fn run_session(
    config: ClientConfig,
    seed: u64,
    shared_state: SharedState,
    command_rx: mpsc::UnboundedReceiver<SessionCommand>,
) {
    let state = TicTacToeSessionState::create(
        config.default_mode,
        seed,
        Duration::from_millis(config.bot_move_delay_ms),
    );
    let broadcaster = UiBroadcaster::new(shared_state);

    TicTacToeSession::run(state, broadcaster, command_rx).await;
    log!("Game session finished");
}
