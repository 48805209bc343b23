use std::future::Future;

use super::tictactoe::{GameSnapshot, RoundOutcome};

/// Sink for session output. The session pushes a fresh snapshot after every
/// state change and a separate event when a round ends, so the presentation
/// layer never has to diff snapshots to notice an outcome.
pub trait GameBroadcaster: Send + Sync + Clone + 'static {
    fn broadcast_state(&self, snapshot: GameSnapshot) -> impl Future<Output = ()> + Send;

    fn broadcast_round_over(&self, outcome: RoundOutcome) -> impl Future<Output = ()> + Send;
}
