//! Shared fixtures for integration tests.
#![allow(dead_code)]

use std::time::Duration;

use truco_backend::services::RoomService;
use truco_backend::{AppState, PlayerIdentity, UserId};
use uuid::Uuid;

#[ctor::ctor]
fn init_logging() {
    backend_test_support::logging::init();
}

pub fn identity(name: &str) -> PlayerIdentity {
    PlayerIdentity {
        user_id: UserId::from(name),
        nickname: name.to_string(),
    }
}

/// Create a private room and seat four ready players; the match starts on
/// the fourth ready. Returns the room id and the seated identities in seat
/// order.
pub async fn fill_room(state: &AppState, rooms: &RoomService) -> (Uuid, Vec<PlayerIdentity>) {
    let players: Vec<PlayerIdentity> = ["ana", "bia", "caio", "duda"]
        .iter()
        .map(|n| identity(n))
        .collect();

    let room_id = rooms.create_room(&players[0], true);
    let code = {
        let room_arc = state.registry.get(&room_id).expect("room exists");
        let code = room_arc.lock().code.clone();
        code
    };
    for player in &players {
        rooms
            .join_by_code(player, &code)
            .await
            .expect("seat available");
    }
    for player in &players {
        rooms
            .set_ready(&player.user_id, &room_id, true)
            .expect("seated player can ready");
    }
    (room_id, players)
}

/// Poll until `check` passes or the timeout elapses.
pub async fn wait_until(check: impl Fn() -> bool) {
    let deadline = tokio::time::Instant::now() + Duration::from_secs(2);
    while !check() {
        assert!(
            tokio::time::Instant::now() < deadline,
            "condition not reached in time"
        );
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
}
