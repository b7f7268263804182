//! In-memory profile store.

use std::collections::HashMap;

use async_trait::async_trait;
use parking_lot::RwLock;

use crate::domain::state::UserId;
use crate::services::collaborators::{CollabError, PlayerProfile, ProfileStore};

pub const DEFAULT_RATING: i32 = 1000;

/// Map-backed profiles with a fallback for unknown identities.
pub struct StaticProfiles {
    entries: RwLock<HashMap<UserId, PlayerProfile>>,
    fallback: PlayerProfile,
}

impl Default for StaticProfiles {
    fn default() -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            fallback: PlayerProfile {
                avatar: String::new(),
                rating: DEFAULT_RATING,
            },
        }
    }
}

impl StaticProfiles {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, user: UserId, profile: PlayerProfile) {
        self.entries.write().insert(user, profile);
    }
}

#[async_trait]
impl ProfileStore for StaticProfiles {
    async fn profile(&self, user: &UserId) -> Result<PlayerProfile, CollabError> {
        Ok(self
            .entries
            .read()
            .get(user)
            .cloned()
            .unwrap_or_else(|| self.fallback.clone()))
    }
}
