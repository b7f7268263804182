//! Queue intake and the periodic grouping pass.

use std::sync::Arc;
use std::time::Instant;

use parking_lot::Mutex;
use tracing::{debug, error, info};
use uuid::Uuid;

use crate::config::GameConfig;
use crate::domain::state::{PlayerIdentity, UserId};
use crate::matchmaking::{MatchQueue, QueueEntry};
use crate::protocol::ServerEvent;
use crate::services::broadcast::emit_room;
use crate::services::collaborators::ProfileStore;
use crate::services::events::EventSink;
use crate::services::rooms::start_match;
use crate::session::registry::SessionRegistry;
use crate::state::AppState;

pub struct MatchmakingService {
    config: GameConfig,
    queue: Mutex<MatchQueue>,
    registry: Arc<SessionRegistry>,
    events: Arc<dyn EventSink>,
    profiles: Arc<dyn ProfileStore>,
}

impl MatchmakingService {
    pub fn new(state: &AppState) -> Self {
        Self {
            config: state.config.clone(),
            queue: Mutex::new(MatchQueue::new()),
            registry: state.registry.clone(),
            events: state.events.clone(),
            profiles: state.profiles.clone(),
        }
    }

    /// Enter the queue. Re-joining replaces the earlier entry.
    pub async fn queue_join(&self, actor: &PlayerIdentity, rating: i32) {
        let avatar = match self.profiles.profile(&actor.user_id).await {
            Ok(profile) => profile.avatar,
            Err(err) => {
                debug!(user = %actor.user_id, error = %err, "profile lookup failed, using default");
                String::new()
            }
        };
        self.queue.lock().enqueue(QueueEntry {
            user_id: actor.user_id.clone(),
            nickname: actor.nickname.clone(),
            avatar,
            rating,
            queued_at: Instant::now(),
        });
        debug!(user = %actor.user_id, rating, "queued for matchmaking");
        self.events.deliver(
            &actor.user_id,
            ServerEvent::QueueStatus {
                queued: true,
                estimate_secs: self.config.queue_wait_cap.as_secs(),
            },
        );
    }

    /// Leave the queue; a no-op when absent.
    pub fn queue_cancel(&self, actor: &UserId) {
        self.queue.lock().dequeue(actor);
        self.events.deliver(
            actor,
            ServerEvent::QueueStatus {
                queued: false,
                estimate_secs: 0,
            },
        );
    }

    /// Drop an identity from the queue without any status event, e.g. on
    /// connection loss.
    pub fn drop_from_queue(&self, actor: &UserId) {
        self.queue.lock().dequeue(actor);
    }

    pub fn queue_len(&self) -> usize {
        self.queue.lock().len()
    }

    /// Periodic grouping pass: form rooms from compatible windows, seat the
    /// four players auto-ready (teams by seat parity), and start the match.
    /// Returns the new room ids so transport sessions can be bound to them.
    pub fn tick_build_matches(&self, now: Instant) -> Vec<Uuid> {
        let groups = self.queue.lock().take_groups(
            now,
            self.config.rating_tolerance,
            self.config.queue_wait_cap,
        );

        let mut room_ids = Vec::with_capacity(groups.len());
        for group in groups {
            let room_arc = self.registry.create_room(false);
            let mut room = room_arc.lock();
            for (idx, entry) in group.into_iter().enumerate() {
                room.seat_player(
                    idx as u8,
                    entry.user_id,
                    entry.nickname,
                    entry.avatar,
                    true,
                    now,
                );
            }
            match start_match(&mut room, &self.config, now) {
                Ok(()) => {
                    info!(room_id = %room.id, "matchmade room started");
                    emit_room(self.events.as_ref(), &self.config, &mut room);
                    room_ids.push(room.id);
                }
                Err(err) => {
                    // Unreachable with four auto-ready seats; keep the room
                    // visible rather than dropping the players.
                    error!(room_id = %room.id, error = %err, "failed to start matchmade room");
                    emit_room(self.events.as_ref(), &self.config, &mut room);
                }
            }
        }
        room_ids
    }
}
