//! Owned registry of live rooms, keyed by id with a join-code index.
//!
//! No ambient singletons: one registry is built at process start and
//! injected into every service that needs it. Each room sits behind its own
//! mutex, so operations against different rooms run fully in parallel while
//! a single room sees strictly serialized mutation.

use std::sync::Arc;

use dashmap::DashMap;
use parking_lot::Mutex;
use uuid::Uuid;

use super::room::Room;
use crate::utils::join_code::{generate_join_code, normalize};

#[derive(Debug, Default)]
pub struct SessionRegistry {
    rooms: DashMap<Uuid, Arc<Mutex<Room>>>,
    codes: DashMap<String, Uuid>,
}

impl SessionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate a room with four empty seats and a fresh id + join code.
    pub fn create_room(&self, private: bool) -> Arc<Mutex<Room>> {
        let id = Uuid::new_v4();
        // Codes collide rarely (32^6 space); retry until one is free.
        let code = loop {
            let candidate = generate_join_code();
            if !self.codes.contains_key(&candidate) {
                break candidate;
            }
        };
        self.codes.insert(code.clone(), id);
        let room = Arc::new(Mutex::new(Room::new(id, code, private)));
        self.rooms.insert(id, room.clone());
        room
    }

    pub fn get(&self, id: &Uuid) -> Option<Arc<Mutex<Room>>> {
        self.rooms.get(id).map(|r| r.value().clone())
    }

    /// Case-insensitive lookup by join code.
    pub fn find_by_code(&self, code: &str) -> Option<Arc<Mutex<Room>>> {
        let id = *self.codes.get(&normalize(code))?.value();
        self.get(&id)
    }

    /// Drop a room and its code index entry. Sweeps stop touching a room
    /// once it is gone from here.
    pub fn remove(&self, id: &Uuid) {
        if let Some((_, room)) = self.rooms.remove(id) {
            let code = room.lock().code.clone();
            self.codes.remove(&code);
        }
    }

    /// Snapshot of all live rooms, for the periodic sweeps.
    pub fn rooms(&self) -> Vec<Arc<Mutex<Room>>> {
        self.rooms.iter().map(|r| r.value().clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }
}
