//! Fixed-window per-key action limiter.
//!
//! Guards the hot game actions (play, truco) against client floods. Actions
//! over budget are dropped, not errored, mirroring how the transport treats
//! them as noise rather than a caller mistake.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use parking_lot::Mutex;

#[derive(Debug)]
struct Window {
    count: u32,
    started: Instant,
}

#[derive(Debug)]
pub struct ActionLimiter {
    max_per_window: u32,
    window: Duration,
    buckets: Mutex<HashMap<String, Window>>,
}

impl ActionLimiter {
    pub fn new(max_per_window: u32, window: Duration) -> Self {
        Self {
            max_per_window,
            window,
            buckets: Mutex::new(HashMap::new()),
        }
    }

    pub fn allow(&self, key: &str) -> bool {
        self.allow_at(key, Instant::now())
    }

    pub fn allow_at(&self, key: &str, now: Instant) -> bool {
        let mut buckets = self.buckets.lock();
        match buckets.get_mut(key) {
            Some(window) if now.saturating_duration_since(window.started) <= self.window => {
                window.count += 1;
                window.count <= self.max_per_window
            }
            _ => {
                buckets.insert(
                    key.to_string(),
                    Window {
                        count: 1,
                        started: now,
                    },
                );
                true
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn allows_up_to_the_window_budget() {
        let limiter = ActionLimiter::new(20, Duration::from_secs(1));
        let now = Instant::now();
        for _ in 0..20 {
            assert!(limiter.allow_at("play:ana", now));
        }
        assert!(!limiter.allow_at("play:ana", now));
    }

    #[test]
    fn a_new_window_resets_the_budget() {
        let limiter = ActionLimiter::new(2, Duration::from_secs(1));
        let now = Instant::now();
        assert!(limiter.allow_at("truco:ana", now));
        assert!(limiter.allow_at("truco:ana", now));
        assert!(!limiter.allow_at("truco:ana", now));
        assert!(limiter.allow_at("truco:ana", now + Duration::from_millis(1100)));
    }

    #[test]
    fn keys_are_isolated() {
        let limiter = ActionLimiter::new(1, Duration::from_secs(1));
        let now = Instant::now();
        assert!(limiter.allow_at("play:ana", now));
        assert!(limiter.allow_at("play:bia", now));
    }
}
