//! Game actions against a live match, turn-timeout fallback, finalization.
//!
//! Every mutating path locks the room, applies the engine transition, and
//! fans the fresh snapshot out before releasing. Nothing here blocks on
//! external I/O while holding a room lock: the rating collaborator runs in a
//! spawned task over data copied out of the room.

use std::sync::Arc;
use std::time::Instant;

use tracing::{debug, error, info};
use uuid::Uuid;

use crate::config::GameConfig;
use crate::domain::bidding::{answer_truco, request_truco, TrucoAnswer};
use crate::domain::cards_types::Card;
use crate::domain::state::{SeatIdx, TrucoState, UserId, TARGET_SCORE};
use crate::domain::tricks::play_card;
use crate::errors::domain::{DomainError, NotFoundKind};
use crate::errors::ErrorCode;
use crate::protocol::ServerEvent;
use crate::services::broadcast::{emit_room, emit_to_room};
use crate::services::collaborators::{CompletedMatch, RatingStore};
use crate::services::events::EventSink;
use crate::session::registry::SessionRegistry;
use crate::session::room::Room;
use crate::state::AppState;
use crate::utils::rate_limit::ActionLimiter;

pub struct GameFlowService {
    config: GameConfig,
    registry: Arc<SessionRegistry>,
    events: Arc<dyn EventSink>,
    rating: Arc<dyn RatingStore>,
    limiter: ActionLimiter,
}

impl GameFlowService {
    pub fn new(state: &AppState) -> Self {
        Self {
            config: state.config.clone(),
            registry: state.registry.clone(),
            events: state.events.clone(),
            rating: state.rating.clone(),
            limiter: ActionLimiter::new(
                state.config.actions_per_sec,
                std::time::Duration::from_secs(1),
            ),
        }
    }

    /// Play a card in the caller's room.
    pub fn play_card(
        &self,
        actor: &UserId,
        room_id: &Uuid,
        card: Card,
    ) -> Result<(), DomainError> {
        if !self.limiter.allow(&format!("play:{actor}")) {
            debug!(user = %actor, "play action dropped by rate limiter");
            return Ok(());
        }
        self.with_match(actor, room_id, |state, seat| {
            play_card(state, seat, card).map(|outcome| outcome.match_over)
        })
    }

    /// Raise the stakes.
    pub fn request_truco(&self, actor: &UserId, room_id: &Uuid) -> Result<(), DomainError> {
        if !self.limiter.allow(&format!("truco:{actor}")) {
            debug!(user = %actor, "truco action dropped by rate limiter");
            return Ok(());
        }
        self.with_match(actor, room_id, |state, seat| {
            request_truco(state, seat).map(|()| false)
        })
    }

    /// Answer an outstanding truco bid.
    pub fn answer_truco(
        &self,
        actor: &UserId,
        room_id: &Uuid,
        answer: TrucoAnswer,
    ) -> Result<(), DomainError> {
        if !self.limiter.allow(&format!("truco:{actor}")) {
            debug!(user = %actor, "truco action dropped by rate limiter");
            return Ok(());
        }
        self.with_match(actor, room_id, |state, seat| {
            answer_truco(state, seat, answer).map(|outcome| outcome.match_over)
        })
    }

    /// Periodic reconciliation of turn deadlines. An expired deadline for
    /// the seat still holding the turn auto-plays that seat's first held
    /// card; if the state moved on concurrently the attempt is skipped as a
    /// benign race.
    pub fn sweep_turn_timeouts(&self, now: Instant) {
        for room_arc in self.registry.rooms() {
            let mut room = room_arc.lock();

            let holder = room
                .match_slot
                .active()
                .filter(|state| !state.over)
                .map(|state| state.turn);
            let Some(holder) = holder else {
                room.clear_turn_deadline();
                continue;
            };
            let Some(deadline) = room.turn_deadline else {
                room.refresh_turn_deadline(self.config.turn_timer, now);
                continue;
            };
            if deadline.turn != holder {
                // Turn moved since the deadline was armed; re-arm.
                room.refresh_turn_deadline(self.config.turn_timer, now);
                continue;
            }
            if now < deadline.expires_at {
                continue;
            }

            self.auto_play(&mut room, holder);
        }
    }

    fn auto_play(&self, room: &mut Room, seat: SeatIdx) {
        let Some(state) = room.match_slot.active_mut() else {
            return;
        };
        let Some(&card) = state.seats[seat as usize].hand.first() else {
            return;
        };
        let nickname = state.seats[seat as usize].nickname.clone();

        match play_card(state, seat, card) {
            Ok(outcome) => {
                info!(room_id = %room.id, seat, %card, "turn timed out, auto-played");
                emit_to_room(
                    self.events.as_ref(),
                    room,
                    &ServerEvent::AutoPlay {
                        seat,
                        nickname,
                        card,
                    },
                );
                emit_room(self.events.as_ref(), &self.config, room);
                if outcome.match_over {
                    self.finalize(room);
                }
            }
            Err(_) => {
                // State advanced between the deadline check and the play.
            }
        }
    }

    /// Shared action plumbing: resolve room and seat, apply the engine
    /// transition, fan out, finalize when the match just ended. The closure
    /// returns whether the match became terminal.
    fn with_match<F>(&self, actor: &UserId, room_id: &Uuid, apply: F) -> Result<(), DomainError>
    where
        F: FnOnce(&mut TrucoState, SeatIdx) -> Result<bool, DomainError>,
    {
        let room_arc = self
            .registry
            .get(room_id)
            .ok_or_else(|| DomainError::not_found(NotFoundKind::Room, "no such room"))?;
        let mut room = room_arc.lock();

        let result = (|| {
            let state = room.match_slot.active_mut().ok_or_else(|| {
                DomainError::not_found(NotFoundKind::Match, "no active match in this room")
            })?;
            let seat = state.seat_of(actor).ok_or_else(|| {
                DomainError::not_found(NotFoundKind::Seat, "not seated in this match")
            })?;
            apply(state, seat)
        })();

        match result {
            Ok(match_over) => {
                room.touch(actor, Instant::now());
                emit_room(self.events.as_ref(), &self.config, &mut room);
                if match_over {
                    self.finalize(&mut room);
                }
                Ok(())
            }
            Err(err) => {
                self.events.deliver(
                    actor,
                    ServerEvent::ActionRejected {
                        code: ErrorCode::from(&err),
                        message: err.to_string(),
                    },
                );
                Err(err)
            }
        }
    }

    /// Close out a terminal match: notify the room, hand the outcome to the
    /// rating collaborator (fire-and-forget), drop the turn deadline.
    fn finalize(&self, room: &mut Room) {
        let Some(state) = room.match_slot.active() else {
            return;
        };
        if !state.over {
            return;
        }

        let winner_team = if state.score[0] >= TARGET_SCORE { 0 } else { 1 };
        let completed = CompletedMatch {
            match_id: state.id,
            room_id: room.id,
            team_a: seat_ids(state, 0),
            team_b: seat_ids(state, 1),
            players: state.seats.iter().map(|s| s.nickname.clone()).collect(),
            score: state.score,
            winner_team,
            started_at: room.created_at,
            ended_at: time::OffsetDateTime::now_utc(),
            ranked: !room.private,
        };
        info!(
            room_id = %room.id,
            winner_team,
            score = ?completed.score,
            "match finished"
        );

        emit_to_room(
            self.events.as_ref(),
            room,
            &ServerEvent::MatchOver {
                winner_team,
                score: state.score,
            },
        );
        room.clear_turn_deadline();

        // Rating and persistence happen outside the room lock; failures are
        // the collaborator's problem, we log and move on.
        let rating = self.rating.clone();
        tokio::spawn(async move {
            match rating.record_match(&completed).await {
                Ok(ratings) => {
                    debug!(
                        match_id = %completed.match_id,
                        team_a = ratings.team_a,
                        team_b = ratings.team_b,
                        "ratings updated"
                    );
                }
                Err(err) => {
                    error!(match_id = %completed.match_id, error = %err, "rating collaborator failed");
                }
            }
        });
    }
}

fn seat_ids(state: &TrucoState, team: u8) -> Vec<UserId> {
    state
        .seats
        .iter()
        .filter(|s| s.team == team)
        .map(|s| s.user_id.clone())
        .collect()
}
