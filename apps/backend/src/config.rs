//! Environment-driven tunables with sane defaults.
//!
//! Environment variables must be set by the runtime environment; every
//! value falls back to its default when absent or malformed.

use std::time::Duration;

use tracing::warn;

#[derive(Debug, Clone)]
pub struct GameConfig {
    /// How long the turn holder may think before the fallback play fires.
    pub turn_timer: Duration,
    /// Missing heartbeats for this long flags a seat disconnected.
    pub reconnect_grace: Duration,
    /// Cadence of the connectivity sweep.
    pub connectivity_sweep: Duration,
    /// Cadence of the turn-timeout sweep.
    pub turn_sweep: Duration,
    /// Cadence of the matchmaking grouping pass.
    pub matchmaking_tick: Duration,
    /// Max rating deviation from the window mean for an instant group.
    pub rating_tolerance: i32,
    /// Queue wait that bypasses the rating filter.
    pub queue_wait_cap: Duration,
    /// Per-key game action budget per second.
    pub actions_per_sec: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            turn_timer: Duration::from_secs(20),
            reconnect_grace: Duration::from_secs(30),
            connectivity_sweep: Duration::from_secs(5),
            turn_sweep: Duration::from_secs(1),
            matchmaking_tick: Duration::from_secs(1),
            rating_tolerance: 250,
            queue_wait_cap: Duration::from_secs(10),
            actions_per_sec: 20,
        }
    }
}

impl GameConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            turn_timer: env_secs("TRUCO_TURN_TIMER_SECS", defaults.turn_timer),
            reconnect_grace: env_secs("TRUCO_RECONNECT_GRACE_SECS", defaults.reconnect_grace),
            connectivity_sweep: defaults.connectivity_sweep,
            turn_sweep: defaults.turn_sweep,
            matchmaking_tick: defaults.matchmaking_tick,
            rating_tolerance: env_i32("TRUCO_MM_TOLERANCE", defaults.rating_tolerance),
            queue_wait_cap: env_secs("TRUCO_MM_WAIT_CAP_SECS", defaults.queue_wait_cap),
            actions_per_sec: env_u32("TRUCO_ACTIONS_PER_SEC", defaults.actions_per_sec),
        }
    }
}

fn env_secs(key: &str, default: Duration) -> Duration {
    env_parse::<u64>(key)
        .map(Duration::from_secs)
        .unwrap_or(default)
}

fn env_i32(key: &str, default: i32) -> i32 {
    env_parse::<i32>(key).unwrap_or(default)
}

fn env_u32(key: &str, default: u32) -> u32 {
    env_parse::<u32>(key).unwrap_or(default)
}

fn env_parse<T: std::str::FromStr>(key: &str) -> Option<T> {
    let raw = std::env::var(key).ok()?;
    match raw.parse() {
        Ok(value) => Some(value),
        Err(_) => {
            warn!(key, raw = %raw, "ignoring unparseable config value");
            None
        }
    }
}
