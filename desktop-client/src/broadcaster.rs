use common::games::GameBroadcaster;
use common::games::tictactoe::{GameSnapshot, RoundOutcome};

use crate::state::SharedState;

/// Feeds session output straight into the shared UI state.
#[derive(Clone)]
pub struct UiBroadcaster {
    shared_state: SharedState,
}

impl UiBroadcaster {
    pub fn new(shared_state: SharedState) -> Self {
        Self { shared_state }
    }
}

impl GameBroadcaster for UiBroadcaster {
    async fn broadcast_state(&self, snapshot: GameSnapshot) {
        self.shared_state.set_snapshot(snapshot);
    }

    async fn broadcast_round_over(&self, outcome: RoundOutcome) {
        self.shared_state.add_event(outcome.to_string());
    }
}
