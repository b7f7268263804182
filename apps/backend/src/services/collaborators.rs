//! Contracts consumed from external collaborators.
//!
//! Identity/auth issuance stays outside the core: every inbound action
//! already carries an authenticated identity. These traits cover the two
//! collaborators the core actively calls.

use async_trait::async_trait;
use thiserror::Error;
use time::OffsetDateTime;
use uuid::Uuid;

use crate::domain::state::{Team, UserId};

#[derive(Debug, Error)]
pub enum CollabError {
    #[error("profile lookup failed: {0}")]
    Profile(String),
    #[error("rating update failed: {0}")]
    Rating(String),
}

/// Display data and current skill rating for an identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerProfile {
    pub avatar: String,
    pub rating: i32,
}

#[async_trait]
pub trait ProfileStore: Send + Sync {
    async fn profile(&self, user: &UserId) -> Result<PlayerProfile, CollabError>;
}

/// Everything the rating/persistence collaborator needs about a finished
/// match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletedMatch {
    pub match_id: Uuid,
    pub room_id: Uuid,
    pub team_a: Vec<UserId>,
    pub team_b: Vec<UserId>,
    pub players: Vec<String>,
    pub score: [u16; 2],
    pub winner_team: Team,
    pub started_at: OffsetDateTime,
    pub ended_at: OffsetDateTime,
    pub ranked: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TeamRatings {
    pub team_a: i32,
    pub team_b: i32,
}

/// Adjusts ratings and durably records the match. The core calls this
/// exactly once per completed match and does not retry on failure.
#[async_trait]
pub trait RatingStore: Send + Sync {
    async fn record_match(&self, outcome: &CompletedMatch) -> Result<TeamRatings, CollabError>;
}
