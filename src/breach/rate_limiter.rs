// src/breach/rate_limiter.rs
use std::collections::VecDeque;
use std::sync::Mutex;
use std::time::{Duration, Instant};

pub const DEFAULT_MAX_REQUESTS: usize = 1;
pub const DEFAULT_WINDOW: Duration = Duration::from_millis(1500);

/// Sliding window gate for outbound breach lookups, shared by every request.
#[derive(Debug)]
pub struct RateLimiter {
    max_requests: usize,
    window: Duration,
    log: Mutex<VecDeque<Instant>>,
}

impl Default for RateLimiter {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_REQUESTS, DEFAULT_WINDOW)
    }
}

impl RateLimiter {
    pub fn new(max_requests: usize, window: Duration) -> Self {
        Self {
            max_requests,
            window,
            log: Mutex::new(VecDeque::with_capacity(max_requests)),
        }
    }

    pub fn window(&self) -> Duration {
        self.window
    }

    pub fn max_requests(&self) -> usize {
        self.max_requests
    }

    pub fn admit(&self) -> bool {
        self.admit_at(Instant::now())
    }

    /// Purge, check, and record under a single lock so two concurrent callers
    /// can never both take the last slot.
    pub fn admit_at(&self, now: Instant) -> bool {
        let mut log = self.log.lock().unwrap_or_else(|poisoned| poisoned.into_inner());

        while let Some(oldest) = log.front() {
            if now.saturating_duration_since(*oldest) >= self.window {
                log.pop_front();
            } else {
                break;
            }
        }

        if log.len() < self.max_requests {
            log.push_back(now);
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Barrier};
    use std::thread;

    #[test]
    fn second_call_inside_window_is_denied() {
        let limiter = RateLimiter::default();
        let start = Instant::now();
        assert!(limiter.admit_at(start));
        assert!(!limiter.admit_at(start + Duration::from_secs_f64(1.0)));
    }

    #[test]
    fn second_call_after_window_is_admitted() {
        let limiter = RateLimiter::default();
        let start = Instant::now();
        assert!(limiter.admit_at(start));
        assert!(limiter.admit_at(start + Duration::from_secs_f64(2.0)));
    }

    #[test]
    fn denied_calls_do_not_extend_the_window() {
        let limiter = RateLimiter::default();
        let start = Instant::now();
        assert!(limiter.admit_at(start));
        assert!(!limiter.admit_at(start + Duration::from_millis(1000)));
        assert!(limiter.admit_at(start + Duration::from_millis(1500)));
    }

    #[test]
    fn quota_above_one() {
        let limiter = RateLimiter::new(3, Duration::from_secs(10));
        let start = Instant::now();
        assert!(limiter.admit_at(start));
        assert!(limiter.admit_at(start + Duration::from_secs(1)));
        assert!(limiter.admit_at(start + Duration::from_secs(2)));
        assert!(!limiter.admit_at(start + Duration::from_secs(3)));
        assert!(limiter.admit_at(start + Duration::from_secs(11)));
    }

    #[test]
    fn concurrent_callers_share_one_slot() {
        let limiter = Arc::new(RateLimiter::new(1, Duration::from_secs(60)));
        let barrier = Arc::new(Barrier::new(16));

        let handles: Vec<_> = (0..16)
            .map(|_| {
                let limiter = Arc::clone(&limiter);
                let barrier = Arc::clone(&barrier);
                thread::spawn(move || {
                    barrier.wait();
                    limiter.admit()
                })
            })
            .collect();

        let admitted = handles
            .into_iter()
            .map(|h| h.join().expect("thread panicked"))
            .filter(|admitted| *admitted)
            .count();
        assert_eq!(admitted, 1);
    }
}
