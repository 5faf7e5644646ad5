//! Rate Limiting Infrastructure
//!
//! Common rate limiting abstractions and implementations.
//!
//! [`RateWindow`] is a sliding-window counter: it retains the timestamps of
//! recent consumptions and prunes expired ones before every check. A
//! timestamp exactly one window old counts as expired (the retained
//! interval is a strict less-than).

use std::time::Duration;

/// Rate limit configuration
#[derive(Debug, Clone)]
pub struct RateLimitConfig {
    /// Maximum requests allowed in the window
    pub max_requests: u32,
    /// Time window duration
    pub window: Duration,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            max_requests: 10,
            window: Duration::from_secs(60),
        }
    }
}

impl RateLimitConfig {
    pub fn new(max_requests: u32, window_secs: u64) -> Self {
        Self {
            max_requests,
            window: Duration::from_secs(window_secs),
        }
    }

    pub fn from_millis(max_requests: u32, window_ms: u64) -> Self {
        Self {
            max_requests,
            window: Duration::from_millis(window_ms),
        }
    }

    pub fn window_ms(&self) -> i64 {
        self.window.as_millis() as i64
    }
}

/// Rate limit check result
#[derive(Debug, Clone)]
pub struct RateLimitResult {
    pub allowed: bool,
    pub remaining: u32,
    pub reset_at_ms: i64,
}

/// Sliding-window counter over unix-millisecond timestamps
///
/// Insertion order is chronological. The window never resets wholesale;
/// slots free up only by pruning.
#[derive(Debug, Clone, Default)]
pub struct RateWindow {
    timestamps: Vec<i64>,
}

impl RateWindow {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check and consume one slot at instant `now_ms`.
    ///
    /// 1. Prune every timestamp `t` with `now_ms - t >= window`.
    /// 2. If the retained count has reached the maximum, deny without
    ///    recording anything.
    /// 3. Otherwise record `now_ms` and allow.
    pub fn try_consume(&mut self, config: &RateLimitConfig, now_ms: i64) -> RateLimitResult {
        let window_ms = config.window_ms();
        self.timestamps.retain(|&t| now_ms - t < window_ms);

        if self.timestamps.len() as u32 >= config.max_requests {
            let reset_at_ms = self
                .timestamps
                .first()
                .map(|&t| t + window_ms)
                .unwrap_or(now_ms);
            return RateLimitResult {
                allowed: false,
                remaining: 0,
                reset_at_ms,
            };
        }

        self.timestamps.push(now_ms);
        let remaining = config.max_requests - self.timestamps.len() as u32;
        let reset_at_ms = self
            .timestamps
            .first()
            .map(|&t| t + window_ms)
            .unwrap_or(now_ms);
        RateLimitResult {
            allowed: true,
            remaining,
            reset_at_ms,
        }
    }

    /// Number of retained (possibly stale) timestamps
    pub fn len(&self) -> usize {
        self.timestamps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.timestamps.is_empty()
    }
}
