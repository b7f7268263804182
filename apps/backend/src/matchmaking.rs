//! Skill-bucketed matchmaking queue with a fairness escape hatch.
//!
//! The queue stays sorted by enqueue time. The grouping pass scans windows
//! of four consecutive entries left to right: a window forms a room when its
//! ratings sit within tolerance of their mean, or when its oldest entry has
//! waited past the fairness cap (which bypasses the rating filter entirely).

use std::time::{Duration, Instant};

use crate::domain::state::UserId;

/// A waiting player. Created on queue-join; removed on cancel, disconnect,
/// or successful grouping.
#[derive(Debug, Clone)]
pub struct QueueEntry {
    pub user_id: UserId,
    pub nickname: String,
    pub avatar: String,
    pub rating: i32,
    pub queued_at: Instant,
}

pub const GROUP_SIZE: usize = 4;

#[derive(Debug, Default)]
pub struct MatchQueue {
    entries: Vec<QueueEntry>,
}

impl MatchQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a player, replacing any earlier entry for the same identity —
    /// an identity may not queue twice.
    pub fn enqueue(&mut self, entry: QueueEntry) {
        self.entries.retain(|e| e.user_id != entry.user_id);
        self.entries.push(entry);
    }

    /// Idempotent removal.
    pub fn dequeue(&mut self, user: &UserId) {
        self.entries.retain(|e| &e.user_id != user);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, user: &UserId) -> bool {
        self.entries.iter().any(|e| &e.user_id == user)
    }

    /// Greedy left-to-right grouping pass.
    ///
    /// Well-matched windows group immediately (low latency); the wait cap on
    /// the window's oldest entry guarantees nobody queues indefinitely.
    pub fn take_groups(
        &mut self,
        now: Instant,
        tolerance: i32,
        wait_cap: Duration,
    ) -> Vec<[QueueEntry; GROUP_SIZE]> {
        self.entries.sort_by_key(|e| e.queued_at);

        let mut groups = Vec::new();
        let mut i = 0;
        while i + GROUP_SIZE <= self.entries.len() {
            let window = &self.entries[i..i + GROUP_SIZE];
            let mean =
                window.iter().map(|e| f64::from(e.rating)).sum::<f64>() / GROUP_SIZE as f64;
            let max_deviation = window
                .iter()
                .map(|e| (f64::from(e.rating) - mean).abs())
                .fold(0.0, f64::max);
            let oldest_wait = now.saturating_duration_since(window[0].queued_at);

            if max_deviation <= f64::from(tolerance) || oldest_wait > wait_cap {
                let taken: Vec<QueueEntry> = self.entries.drain(i..i + GROUP_SIZE).collect();
                if let Ok(group) = <[QueueEntry; GROUP_SIZE]>::try_from(taken) {
                    groups.push(group);
                }
                // Do not advance: the next window now starts at this index.
            } else {
                i += 1;
            }
        }
        groups
    }
}
