//! Delivery seam for outbound events.
//!
//! The transport (out of scope here) implements this to push events to live
//! connections. Delivery must not block: implementations queue or drop.

use crate::domain::state::UserId;
use crate::protocol::ServerEvent;

pub trait EventSink: Send + Sync {
    fn deliver(&self, user: &UserId, event: ServerEvent);
}
