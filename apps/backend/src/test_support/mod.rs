//! Shared helpers for unit and integration tests.

pub mod sinks;

pub use sinks::RecordingSink;

use std::sync::Arc;
use std::time::Duration;

use crate::adapters::{EloRatingRecorder, StaticProfiles};
use crate::config::GameConfig;
use crate::state::AppState;

/// Config with sweep-friendly short windows for tests.
pub fn test_config() -> GameConfig {
    GameConfig {
        turn_timer: Duration::from_millis(50),
        reconnect_grace: Duration::from_millis(100),
        connectivity_sweep: Duration::from_millis(20),
        turn_sweep: Duration::from_millis(10),
        matchmaking_tick: Duration::from_millis(10),
        ..GameConfig::default()
    }
}

/// App state wired to a recording sink and in-memory collaborators.
pub fn test_state(
    config: GameConfig,
) -> (AppState, Arc<RecordingSink>, Arc<EloRatingRecorder>) {
    let sink = Arc::new(RecordingSink::default());
    let rating = Arc::new(EloRatingRecorder::new());
    let state = AppState::new(
        config,
        sink.clone(),
        Arc::new(StaticProfiles::new()),
        rating.clone(),
    );
    (state, sink, rating)
}
