use std::sync::Arc;

use tokio_util::sync::CancellationToken;
use tracing::info;
use truco_backend::adapters::{EloRatingRecorder, LoggingEventSink, StaticProfiles};
use truco_backend::infra::sweeps::spawn_sweeps;
use truco_backend::services::{GameFlowService, MatchmakingService, RoomService};
use truco_backend::{AppState, GameConfig};

mod telemetry;

#[tokio::main]
async fn main() {
    telemetry::init_tracing();

    // Environment variables must be set by the runtime environment; every
    // tunable falls back to its default.
    let config = GameConfig::from_env();
    info!(?config, "starting truco backend core");

    // The transport surface binds its own event sink and collaborator
    // integrations; this process skeleton runs with the in-process ones.
    let state = AppState::new(
        config.clone(),
        Arc::new(LoggingEventSink),
        Arc::new(StaticProfiles::new()),
        Arc::new(EloRatingRecorder::new()),
    );

    let matchmaking = Arc::new(MatchmakingService::new(&state));
    let rooms = Arc::new(RoomService::new(&state));
    let game_flow = Arc::new(GameFlowService::new(&state));

    let shutdown = CancellationToken::new();
    let handles = spawn_sweeps(
        matchmaking,
        rooms,
        game_flow,
        &config,
        shutdown.clone(),
    );
    info!("sweeps running; press ctrl-c to stop");

    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to listen for shutdown signal");
    }
    shutdown.cancel();
    for handle in handles {
        let _ = handle.await;
    }
    info!("shut down cleanly");
}
