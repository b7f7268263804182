//! Event sink that logs instead of delivering anywhere.

use tracing::debug;

use crate::domain::state::UserId;
use crate::protocol::ServerEvent;
use crate::services::events::EventSink;

/// Stand-in sink for processes without a wired transport. Every event is
/// logged at debug level and dropped.
#[derive(Debug, Default)]
pub struct LoggingEventSink;

impl EventSink for LoggingEventSink {
    fn deliver(&self, user: &UserId, event: ServerEvent) {
        debug!(user = %user, event = ?event, "outbound event");
    }
}
