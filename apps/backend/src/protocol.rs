//! Outbound wire types delivered to connected clients.
//!
//! Snapshots are per recipient: the public room/match state is shared, and
//! the orchestrator attaches the recipient's own hand before delivery. No
//! other seat's hand ever appears on the wire.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::cards_types::Card;
use crate::domain::snapshot::MatchPublic;
use crate::domain::state::{SeatIdx, Team};
use crate::errors::ErrorCode;
use crate::session::room::Room;

/// Public view of one room seat slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeatPublic {
    pub user_id: crate::domain::state::UserId,
    pub nickname: String,
    pub avatar: String,
    pub team: Team,
    pub ready: bool,
    pub connected: bool,
}

/// Per-recipient room snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomSnapshot {
    pub id: Uuid,
    pub code: String,
    pub private: bool,
    pub seats: [Option<SeatPublic>; 4],
    #[serde(rename = "match")]
    pub match_public: Option<MatchPublic>,
    /// The recipient's own hand; absent for lobby-only snapshots.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub self_hand: Option<Vec<Card>>,
}

impl RoomSnapshot {
    /// Build the shared (hand-free) snapshot of a room.
    pub fn of_room(room: &Room) -> Self {
        let seats = room.seats.each_ref().map(|slot| {
            slot.occupant().map(|seat| SeatPublic {
                user_id: seat.user_id.clone(),
                nickname: seat.nickname.clone(),
                avatar: seat.avatar.clone(),
                team: seat.team,
                ready: seat.ready,
                connected: seat.connected,
            })
        });
        Self {
            id: room.id,
            code: room.code.clone(),
            private: room.private,
            seats,
            match_public: room.match_slot.active().map(MatchPublic::from_state),
            self_hand: None,
        }
    }

    /// Attach the recipient's own hand.
    pub fn personalized(mut self, hand: Vec<Card>) -> Self {
        self.self_hand = Some(hand);
        self
    }
}

/// Events the core pushes to clients through the event sink.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ServerEvent {
    RoomUpdate {
        room: RoomSnapshot,
    },
    RoomCreated {
        room_id: Uuid,
        code: String,
    },
    QueueStatus {
        queued: bool,
        estimate_secs: u64,
    },
    MatchOver {
        winner_team: Team,
        score: [u16; 2],
    },
    /// A turn-timeout fallback played for an AFK seat.
    AutoPlay {
        seat: SeatIdx,
        nickname: String,
        card: Card,
    },
    ActionRejected {
        code: ErrorCode,
        message: String,
    },
}
