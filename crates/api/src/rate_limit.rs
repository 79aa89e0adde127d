use std::collections::{HashMap, VecDeque};
use std::sync::Arc;
use std::time::{Duration, Instant};

use parking_lot::Mutex;

/// Sliding-window limiter keyed by client address.
#[derive(Debug, Clone)]
pub struct IpRateLimiter {
    inner: Arc<Mutex<LimiterState>>,
    window: Duration,
    max_requests: usize,
}

#[derive(Debug, Default)]
struct LimiterState {
    buckets: HashMap<String, VecDeque<Instant>>,
    last_sweep: Option<Instant>,
}

impl IpRateLimiter {
    pub fn new(window: Duration, max_requests: usize) -> Self {
        Self {
            inner: Arc::new(Mutex::new(LimiterState::default())),
            window,
            max_requests,
        }
    }

    pub fn allow(&self, key: &str) -> bool {
        self.allow_at(key, Instant::now())
    }

    fn allow_at(&self, key: &str, now: Instant) -> bool {
        let mut state = self.inner.lock();
        self.sweep_idle(&mut state, now);

        let queue = state.buckets.entry(key.to_string()).or_default();
        while let Some(front) = queue.front() {
            if now.duration_since(*front) >= self.window {
                queue.pop_front();
            } else {
                break;
            }
        }

        if queue.len() >= self.max_requests {
            return false;
        }

        queue.push_back(now);
        true
    }

    /// Drops clients with no request inside the window, at most once per window.
    fn sweep_idle(&self, state: &mut LimiterState, now: Instant) {
        let due = state
            .last_sweep
            .map_or(true, |last| now.duration_since(last) >= self.window);
        if !due {
            return;
        }

        let window = self.window;
        state.buckets.retain(|_, queue| {
            queue
                .back()
                .is_some_and(|latest| now.duration_since(*latest) < window)
        });
        state.last_sweep = Some(now);
    }
}
