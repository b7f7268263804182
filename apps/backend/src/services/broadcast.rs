//! Per-recipient snapshot fan-out.
//!
//! Every state-changing path funnels through [`emit_room`], which also
//! re-arms the turn deadline whenever the turn holder changed. Seats
//! without a live connection receive nothing until they reconnect.

use std::time::Instant;

use crate::config::GameConfig;
use crate::protocol::{RoomSnapshot, ServerEvent};
use crate::services::events::EventSink;
use crate::session::room::Room;

/// Push a redacted snapshot to every connected seat of the room.
pub(crate) fn emit_room(events: &dyn EventSink, config: &GameConfig, room: &mut Room) {
    room.refresh_turn_deadline(config.turn_timer, Instant::now());

    let base = RoomSnapshot::of_room(room);
    for slot in &room.seats {
        let Some(seat) = slot.occupant() else {
            continue;
        };
        if !seat.connected {
            continue;
        }
        let own_hand = room
            .match_slot
            .active()
            .and_then(|state| state.seats.iter().find(|s| s.user_id == seat.user_id))
            .map(|s| s.hand.clone());
        let snapshot = match own_hand {
            Some(hand) => base.clone().personalized(hand),
            None => base.clone(),
        };
        events.deliver(&seat.user_id, ServerEvent::RoomUpdate { room: snapshot });
    }
}

/// Deliver one event to every connected seat of the room.
pub(crate) fn emit_to_room(events: &dyn EventSink, room: &Room, event: &ServerEvent) {
    for slot in &room.seats {
        let Some(seat) = slot.occupant() else {
            continue;
        };
        if !seat.connected {
            continue;
        }
        events.deliver(&seat.user_id, event.clone());
    }
}
