//! Recording event sink for assertions on outbound traffic.

use parking_lot::Mutex;

use crate::domain::state::UserId;
use crate::protocol::ServerEvent;
use crate::services::events::EventSink;

#[derive(Debug, Default)]
pub struct RecordingSink {
    events: Mutex<Vec<(UserId, ServerEvent)>>,
}

impl RecordingSink {
    pub fn events(&self) -> Vec<(UserId, ServerEvent)> {
        self.events.lock().clone()
    }

    /// Events delivered to one recipient, in order.
    pub fn for_user(&self, user: &UserId) -> Vec<ServerEvent> {
        self.events
            .lock()
            .iter()
            .filter(|(to, _)| to == user)
            .map(|(_, event)| event.clone())
            .collect()
    }

    pub fn clear(&self) {
        self.events.lock().clear();
    }
}

impl EventSink for RecordingSink {
    fn deliver(&self, user: &UserId, event: ServerEvent) {
        self.events.lock().push((user.clone(), event));
    }
}
