//! Room and seat lifecycle: the mutable state the orchestrator serializes
//! per room.

pub mod registry;
pub mod room;

pub use registry::SessionRegistry;
pub use room::{MatchSlot, Room, RoomSeat, SeatSlot, TurnDeadline};
