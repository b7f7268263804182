//! A room: four seat slots, an optional live match, and activity tracking.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use time::OffsetDateTime;
use uuid::Uuid;

use crate::domain::state::{team_for_seat, SeatIdx, Team, TrucoState, UserId, SEATS};

/// A seated player. Connectivity is a display/fallback flag; it never
/// removes the seat.
#[derive(Debug, Clone)]
pub struct RoomSeat {
    pub user_id: UserId,
    pub nickname: String,
    pub avatar: String,
    pub team: Team,
    pub ready: bool,
    pub connected: bool,
}

/// A seat slot is either empty or occupied; there is no half-state.
#[derive(Debug, Clone, Default)]
pub enum SeatSlot {
    #[default]
    Empty,
    Occupied(RoomSeat),
}

impl SeatSlot {
    pub fn occupant(&self) -> Option<&RoomSeat> {
        match self {
            SeatSlot::Empty => None,
            SeatSlot::Occupied(seat) => Some(seat),
        }
    }

    pub fn occupant_mut(&mut self) -> Option<&mut RoomSeat> {
        match self {
            SeatSlot::Empty => None,
            SeatSlot::Occupied(seat) => Some(seat),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, SeatSlot::Empty)
    }
}

/// Whether a match is running in the room.
#[derive(Debug, Clone)]
pub enum MatchSlot {
    Idle,
    Active(TrucoState),
}

impl MatchSlot {
    pub fn active(&self) -> Option<&TrucoState> {
        match self {
            MatchSlot::Idle => None,
            MatchSlot::Active(state) => Some(state),
        }
    }

    pub fn active_mut(&mut self) -> Option<&mut TrucoState> {
        match self {
            MatchSlot::Idle => None,
            MatchSlot::Active(state) => Some(state),
        }
    }
}

/// Deadline for the seat currently holding the turn.
#[derive(Debug, Clone, Copy)]
pub struct TurnDeadline {
    pub turn: SeatIdx,
    pub expires_at: Instant,
}

#[derive(Debug)]
pub struct Room {
    pub id: Uuid,
    /// Short join code, stored uppercase; lookups are case-insensitive.
    pub code: String,
    pub private: bool,
    pub seats: [SeatSlot; SEATS],
    pub match_slot: MatchSlot,
    pub last_seen: HashMap<UserId, Instant>,
    pub turn_deadline: Option<TurnDeadline>,
    pub created_at: OffsetDateTime,
}

impl Room {
    pub fn new(id: Uuid, code: String, private: bool) -> Self {
        Self {
            id,
            code,
            private,
            seats: Default::default(),
            match_slot: MatchSlot::Idle,
            last_seen: HashMap::new(),
            turn_deadline: None,
            created_at: OffsetDateTime::now_utc(),
        }
    }

    pub fn seat_of(&self, user: &UserId) -> Option<(SeatIdx, &RoomSeat)> {
        self.seats.iter().enumerate().find_map(|(idx, slot)| {
            slot.occupant()
                .filter(|seat| &seat.user_id == user)
                .map(|seat| (idx as SeatIdx, seat))
        })
    }

    pub fn seat_of_mut(&mut self, user: &UserId) -> Option<&mut RoomSeat> {
        self.seats
            .iter_mut()
            .find_map(|slot| slot.occupant_mut().filter(|seat| &seat.user_id == user))
    }

    pub fn first_empty_seat(&self) -> Option<SeatIdx> {
        self.seats
            .iter()
            .position(SeatSlot::is_empty)
            .map(|i| i as SeatIdx)
    }

    pub fn occupied_count(&self) -> usize {
        self.seats.iter().filter(|s| !s.is_empty()).count()
    }

    /// True when all four seats are occupied and ready.
    pub fn all_ready(&self) -> bool {
        self.seats
            .iter()
            .all(|slot| slot.occupant().is_some_and(|seat| seat.ready))
    }

    /// Seat a player, defaulting the team by seat parity.
    pub fn seat_player(
        &mut self,
        idx: SeatIdx,
        user_id: UserId,
        nickname: String,
        avatar: String,
        ready: bool,
        now: Instant,
    ) {
        self.last_seen.insert(user_id.clone(), now);
        self.seats[idx as usize] = SeatSlot::Occupied(RoomSeat {
            user_id,
            nickname,
            avatar,
            team: team_for_seat(idx),
            ready,
            connected: true,
        });
    }

    /// Refresh the caller's last-activity timestamp.
    pub fn touch(&mut self, user: &UserId, now: Instant) {
        self.last_seen.insert(user.clone(), now);
    }

    /// Arm or re-arm the turn deadline when the turn holder changed; leave
    /// an unexpired deadline for the same holder alone.
    pub fn refresh_turn_deadline(&mut self, timer: Duration, now: Instant) {
        let Some(state) = self.match_slot.active() else {
            self.turn_deadline = None;
            return;
        };
        if state.over {
            self.turn_deadline = None;
            return;
        }
        let holder = state.turn;
        let stale = self
            .turn_deadline
            .is_none_or(|deadline| deadline.turn != holder);
        if stale {
            self.turn_deadline = Some(TurnDeadline {
                turn: holder,
                expires_at: now + timer,
            });
        }
    }

    pub fn clear_turn_deadline(&mut self) {
        self.turn_deadline = None;
    }
}
