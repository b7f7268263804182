//! Room lifecycle: create, join/reconnect, readiness, teams, connectivity.

use std::sync::Arc;
use std::time::Instant;

use tracing::{debug, info};
use uuid::Uuid;

use crate::config::GameConfig;
use crate::domain::state::{
    PlayerIdentity, SeatAssignment, Team, TrucoState, UserId, SEATS,
};
use crate::errors::domain::{ConflictKind, DomainError, NotFoundKind, ValidationKind};
use crate::protocol::ServerEvent;
use crate::services::broadcast::emit_room;
use crate::services::collaborators::ProfileStore;
use crate::services::events::EventSink;
use crate::session::registry::SessionRegistry;
use crate::session::room::{MatchSlot, Room};
use crate::state::AppState;

pub struct RoomService {
    config: GameConfig,
    registry: Arc<SessionRegistry>,
    events: Arc<dyn EventSink>,
    profiles: Arc<dyn ProfileStore>,
}

impl RoomService {
    pub fn new(state: &AppState) -> Self {
        Self {
            config: state.config.clone(),
            registry: state.registry.clone(),
            events: state.events.clone(),
            profiles: state.profiles.clone(),
        }
    }

    /// Allocate an empty room and report id + code to the creator.
    pub fn create_room(&self, actor: &PlayerIdentity, private: bool) -> Uuid {
        let room = self.registry.create_room(private);
        let (id, code) = {
            let room = room.lock();
            (room.id, room.code.clone())
        };
        info!(room_id = %id, private, "room created");
        self.events.deliver(
            &actor.user_id,
            ServerEvent::RoomCreated { room_id: id, code },
        );
        id
    }

    /// Join a room by its (case-insensitive) code. A player already seated
    /// in the room is treated as reconnecting: the seat's connection flag is
    /// rebound without touching seat, team, or ready state.
    pub async fn join_by_code(
        &self,
        actor: &PlayerIdentity,
        code: &str,
    ) -> Result<Uuid, DomainError> {
        // Resolve the avatar before taking any lock.
        let avatar = match self.profiles.profile(&actor.user_id).await {
            Ok(profile) => profile.avatar,
            Err(err) => {
                debug!(user = %actor.user_id, error = %err, "profile lookup failed, using default");
                String::new()
            }
        };

        let room_arc = self
            .registry
            .find_by_code(code)
            .ok_or_else(|| DomainError::not_found(NotFoundKind::Room, "no room with that code"))?;
        let mut room = room_arc.lock();
        let now = Instant::now();

        if room.seat_of(&actor.user_id).is_some() {
            if let Some(seat) = room.seat_of_mut(&actor.user_id) {
                seat.connected = true;
            }
            room.touch(&actor.user_id, now);
            info!(room_id = %room.id, user = %actor.user_id, "player reconnected");
            emit_room(self.events.as_ref(), &self.config, &mut room);
            return Ok(room.id);
        }

        let Some(idx) = room.first_empty_seat() else {
            return Err(DomainError::conflict(ConflictKind::RoomFull, "room is full"));
        };
        room.seat_player(
            idx,
            actor.user_id.clone(),
            actor.nickname.clone(),
            avatar,
            false,
            now,
        );
        info!(room_id = %room.id, user = %actor.user_id, seat = idx, "player seated");
        emit_room(self.events.as_ref(), &self.config, &mut room);
        Ok(room.id)
    }

    /// Toggle the caller's own ready flag; when the fourth seat readies up
    /// the match starts.
    pub fn set_ready(
        &self,
        actor: &UserId,
        room_id: &Uuid,
        ready: bool,
    ) -> Result<(), DomainError> {
        let room_arc = self.require_room(room_id)?;
        let mut room = room_arc.lock();
        let now = Instant::now();

        let seat = room
            .seat_of_mut(actor)
            .ok_or_else(|| DomainError::not_found(NotFoundKind::Seat, "not seated in this room"))?;
        seat.ready = ready;
        room.touch(actor, now);

        if room.all_ready() && room.match_slot.active().is_none() {
            start_match(&mut room, &self.config, now)?;
            info!(room_id = %room.id, "match started");
        }
        emit_room(self.events.as_ref(), &self.config, &mut room);
        Ok(())
    }

    /// Move the caller's own seat to a team. Locked once a match runs.
    pub fn set_team(&self, actor: &UserId, room_id: &Uuid, team: Team) -> Result<(), DomainError> {
        if team > 1 {
            return Err(DomainError::validation_other("team must be 0 or 1"));
        }
        let room_arc = self.require_room(room_id)?;
        let mut room = room_arc.lock();

        if room.match_slot.active().is_some() {
            return Err(DomainError::conflict(
                ConflictKind::MatchActive,
                "teams are locked while a match is running",
            ));
        }
        let seat = room
            .seat_of_mut(actor)
            .ok_or_else(|| DomainError::not_found(NotFoundKind::Seat, "not seated in this room"))?;
        seat.team = team;
        emit_room(self.events.as_ref(), &self.config, &mut room);
        Ok(())
    }

    /// Refresh the caller's last-activity timestamp.
    pub fn heartbeat(&self, actor: &UserId, room_id: &Uuid) -> Result<(), DomainError> {
        let room_arc = self.require_room(room_id)?;
        let mut room = room_arc.lock();
        room.touch(actor, Instant::now());
        Ok(())
    }

    /// Flag every seat held by this identity as disconnected. Seats are not
    /// removed and matches keep running; the turn-timeout fallback covers
    /// the absent player.
    pub fn connection_lost(&self, actor: &UserId) {
        for room_arc in self.registry.rooms() {
            let mut room = room_arc.lock();
            let Some(seat) = room.seat_of_mut(actor) else {
                continue;
            };
            if seat.connected {
                seat.connected = false;
                debug!(room_id = %room.id, user = %actor, "connection lost");
                emit_room(self.events.as_ref(), &self.config, &mut room);
            }
        }
    }

    /// Periodic reconciliation: seats whose heartbeat went silent past the
    /// grace window are flagged disconnected.
    pub fn sweep_connectivity(&self, now: Instant) {
        for room_arc in self.registry.rooms() {
            let mut room = room_arc.lock();
            let mut changed = false;
            let last_seen = room.last_seen.clone();
            for slot in room.seats.iter_mut() {
                let Some(seat) = slot.occupant_mut() else {
                    continue;
                };
                if !seat.connected {
                    continue;
                }
                // A seat with no recorded heartbeat counts as just seen.
                let seen = last_seen.get(&seat.user_id).copied().unwrap_or(now);
                if now.saturating_duration_since(seen) > self.config.reconnect_grace {
                    seat.connected = false;
                    changed = true;
                }
            }
            if changed {
                emit_room(self.events.as_ref(), &self.config, &mut room);
            }
        }
    }

    fn require_room(&self, room_id: &Uuid) -> Result<Arc<parking_lot::Mutex<Room>>, DomainError> {
        self.registry
            .get(room_id)
            .ok_or_else(|| DomainError::not_found(NotFoundKind::Room, "no such room"))
    }
}

/// Hand the four ready seats to the engine and arm the first turn deadline.
///
/// The caller must hold the room lock.
pub(crate) fn start_match(
    room: &mut Room,
    config: &GameConfig,
    now: Instant,
) -> Result<(), DomainError> {
    if room.match_slot.active().is_some() {
        return Err(DomainError::conflict(
            ConflictKind::MatchActive,
            "match already running",
        ));
    }
    if !room.all_ready() {
        return Err(DomainError::validation(
            ValidationKind::RoomNotReady,
            "need four ready seats",
        ));
    }

    let mut assignments = Vec::with_capacity(SEATS);
    for slot in &room.seats {
        let Some(seat) = slot.occupant() else {
            return Err(DomainError::validation(
                ValidationKind::RoomNotReady,
                "need four ready seats",
            ));
        };
        assignments.push(SeatAssignment {
            user_id: seat.user_id.clone(),
            nickname: seat.nickname.clone(),
            team: seat.team,
        });
    }
    let Ok(players) = <[SeatAssignment; SEATS]>::try_from(assignments) else {
        return Err(DomainError::validation(
            ValidationKind::RoomNotReady,
            "need four ready seats",
        ));
    };

    let state = TrucoState::start(room.id, players, rand::random());
    room.match_slot = MatchSlot::Active(state);
    room.refresh_turn_deadline(config.turn_timer, now);
    Ok(())
}
