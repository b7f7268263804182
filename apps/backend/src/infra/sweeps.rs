//! Periodic reconciliation sweeps.
//!
//! All timeouts in the core are reconciliation passes, not one-shot timers:
//! each loop re-checks every live room on a fixed cadence and the services
//! decide what (if anything) to do. Cancelling reduces to stopping the
//! loops; a room removed from the registry is simply never visited again.

use std::sync::Arc;
use std::time::Instant;

use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::info;

use crate::config::GameConfig;
use crate::services::{GameFlowService, MatchmakingService, RoomService};

/// Spawn the three background loops: matchmaking grouping, connectivity
/// flagging, and turn-timeout enforcement.
pub fn spawn_sweeps(
    matchmaking: Arc<MatchmakingService>,
    rooms: Arc<RoomService>,
    game_flow: Arc<GameFlowService>,
    config: &GameConfig,
    shutdown: CancellationToken,
) -> Vec<JoinHandle<()>> {
    let mut handles = Vec::with_capacity(3);

    {
        let shutdown = shutdown.clone();
        let period = config.matchmaking_tick;
        handles.push(tokio::spawn(async move {
            let mut ticker = tokio::time::interval(period);
            loop {
                tokio::select! {
                    _ = shutdown.cancelled() => break,
                    _ = ticker.tick() => {
                        matchmaking.tick_build_matches(Instant::now());
                    }
                }
            }
            info!("matchmaking sweep stopped");
        }));
    }

    {
        let shutdown = shutdown.clone();
        let period = config.connectivity_sweep;
        handles.push(tokio::spawn(async move {
            let mut ticker = tokio::time::interval(period);
            loop {
                tokio::select! {
                    _ = shutdown.cancelled() => break,
                    _ = ticker.tick() => {
                        rooms.sweep_connectivity(Instant::now());
                    }
                }
            }
            info!("connectivity sweep stopped");
        }));
    }

    {
        let period = config.turn_sweep;
        handles.push(tokio::spawn(async move {
            let mut ticker = tokio::time::interval(period);
            loop {
                tokio::select! {
                    _ = shutdown.cancelled() => break,
                    _ = ticker.tick() => {
                        game_flow.sweep_turn_timeouts(Instant::now());
                    }
                }
            }
            info!("turn-timeout sweep stopped");
        }));
    }

    handles
}
