//! Application state containing shared resources.
//!
//! Built once at process start and injected into every service; there are
//! no ambient singletons. Collaborator implementations (event sink, profile
//! store, rating store) are provided by the embedding process.

use std::sync::Arc;

use crate::config::GameConfig;
use crate::services::collaborators::{ProfileStore, RatingStore};
use crate::services::events::EventSink;
use crate::session::registry::SessionRegistry;

#[derive(Clone)]
pub struct AppState {
    pub config: GameConfig,
    pub registry: Arc<SessionRegistry>,
    pub events: Arc<dyn EventSink>,
    pub profiles: Arc<dyn ProfileStore>,
    pub rating: Arc<dyn RatingStore>,
}

impl AppState {
    pub fn new(
        config: GameConfig,
        events: Arc<dyn EventSink>,
        profiles: Arc<dyn ProfileStore>,
        rating: Arc<dyn RatingStore>,
    ) -> Self {
        Self {
            config,
            registry: Arc::new(SessionRegistry::new()),
            events,
            profiles,
            rating,
        }
    }
}
