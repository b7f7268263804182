//! In-memory rating collaborator: Elo over team averages, matches kept in a
//! buffer instead of a durable store.

use std::collections::HashMap;

use async_trait::async_trait;
use parking_lot::Mutex;
use tracing::info;

use crate::domain::state::UserId;
use crate::services::collaborators::{CollabError, CompletedMatch, RatingStore, TeamRatings};
use crate::services::rating::updated_ratings;

use super::profiles::DEFAULT_RATING;

#[derive(Default)]
pub struct EloRatingRecorder {
    ratings: Mutex<HashMap<UserId, i32>>,
    recorded: Mutex<Vec<CompletedMatch>>,
}

impl EloRatingRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rating_of(&self, user: &UserId) -> i32 {
        self.ratings
            .lock()
            .get(user)
            .copied()
            .unwrap_or(DEFAULT_RATING)
    }

    /// Matches recorded so far, in completion order.
    pub fn recorded(&self) -> Vec<CompletedMatch> {
        self.recorded.lock().clone()
    }

    fn team_average(&self, team: &[UserId]) -> f64 {
        if team.is_empty() {
            return f64::from(DEFAULT_RATING);
        }
        let sum: i32 = team.iter().map(|u| self.rating_of(u)).sum();
        f64::from(sum) / team.len() as f64
    }
}

#[async_trait]
impl RatingStore for EloRatingRecorder {
    async fn record_match(&self, outcome: &CompletedMatch) -> Result<TeamRatings, CollabError> {
        let avg_a = self.team_average(&outcome.team_a);
        let avg_b = self.team_average(&outcome.team_b);
        let (new_a, new_b) = updated_ratings(avg_a, avg_b, outcome.winner_team);

        // Shift every member by their team's average delta, as the upstream
        // ladder does.
        let delta_a = f64::from(new_a) - avg_a;
        let delta_b = f64::from(new_b) - avg_b;
        {
            let mut ratings = self.ratings.lock();
            for user in &outcome.team_a {
                let current = ratings.get(user).copied().unwrap_or(DEFAULT_RATING);
                ratings.insert(user.clone(), current + delta_a.round() as i32);
            }
            for user in &outcome.team_b {
                let current = ratings.get(user).copied().unwrap_or(DEFAULT_RATING);
                ratings.insert(user.clone(), current + delta_b.round() as i32);
            }
        }

        info!(
            match_id = %outcome.match_id,
            winner_team = outcome.winner_team,
            ranked = outcome.ranked,
            "match recorded"
        );
        self.recorded.lock().push(outcome.clone());
        Ok(TeamRatings {
            team_a: new_a,
            team_b: new_b,
        })
    }
}
