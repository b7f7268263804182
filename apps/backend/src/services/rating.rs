//! Elo-style rating update applied to team-average ratings.

use crate::domain::state::Team;

pub const K_FACTOR: f64 = 32.0;

/// Expected score of side A against side B under the logistic Elo curve.
pub fn expected_score(rating_a: f64, rating_b: f64) -> f64 {
    1.0 / (1.0 + 10f64.powf((rating_b - rating_a) / 400.0))
}

/// New team-average ratings after a match, rounded to integers.
pub fn updated_ratings(avg_a: f64, avg_b: f64, winner: Team) -> (i32, i32) {
    let score_a = if winner == 0 { 1.0 } else { 0.0 };
    let expected_a = expected_score(avg_a, avg_b);
    let new_a = (avg_a + K_FACTOR * (score_a - expected_a)).round() as i32;
    let new_b = (avg_b + K_FACTOR * ((1.0 - score_a) - (1.0 - expected_a))).round() as i32;
    (new_a, new_b)
}
