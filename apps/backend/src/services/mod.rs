//! Orchestration services bridging the pure domain with rooms and events.

pub mod collaborators;
pub mod events;
pub mod game_flow;
pub mod matchmaking;
pub mod rating;
pub mod rooms;

pub(crate) mod broadcast;

pub use game_flow::GameFlowService;
pub use matchmaking::MatchmakingService;
pub use rooms::RoomService;
