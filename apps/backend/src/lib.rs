#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod adapters;
pub mod config;
pub mod domain;
pub mod errors;
pub mod infra;
pub mod matchmaking;
pub mod protocol;
pub mod services;
pub mod session;
pub mod state;
pub mod test_support;
pub mod utils;

// Re-exports for public API
pub use config::GameConfig;
pub use domain::state::{PlayerIdentity, UserId};
pub use errors::{DomainError, ErrorCode};
pub use protocol::ServerEvent;
pub use services::{GameFlowService, MatchmakingService, RoomService};
pub use session::SessionRegistry;
pub use state::AppState;

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    backend_test_support::logging::init();
}
