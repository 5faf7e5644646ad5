//! Violation Tracker Entity
//!
//! Accumulates security violations and locks the session once the
//! threshold is reached.
//!
//! ## State machine
//! `Normal` → `Warned(count)` → ... → `Locked`
//!
//! `Locked` is terminal: there is no timeout-based unlock, only an
//! explicit `reset()` from the re-authentication collaborator. How long a
//! warning stays on screen is the consumer's concern; this entity only
//! exposes the current state.

use serde::{Deserialize, Serialize};

/// Observable state of a violation tracker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE", tag = "state", content = "count")]
pub enum ViolationStatus {
    /// No violations recorded
    Normal,
    /// Some violations, below the threshold
    Warned(u32),
    /// Threshold reached; all gated mutations are blocked
    Locked,
}

impl ViolationStatus {
    #[inline]
    pub const fn is_locked(&self) -> bool {
        matches!(self, Self::Locked)
    }
}

/// Per-session violation bookkeeping
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ViolationTracker {
    count: u32,
    threshold: u32,
    locked: bool,
    last_reason: Option<String>,
    last_violation_at_ms: Option<i64>,
}

impl ViolationTracker {
    /// Default violations before lockout
    pub const DEFAULT_THRESHOLD: u32 = 3;

    /// Create a tracker; a threshold of zero is treated as one.
    pub fn new(threshold: u32) -> Self {
        Self {
            count: 0,
            threshold: threshold.max(1),
            locked: false,
            last_reason: None,
            last_violation_at_ms: None,
        }
    }

    /// Current state
    pub fn status(&self) -> ViolationStatus {
        if self.locked {
            ViolationStatus::Locked
        } else if self.count == 0 {
            ViolationStatus::Normal
        } else {
            ViolationStatus::Warned(self.count)
        }
    }

    #[inline]
    pub fn is_locked(&self) -> bool {
        self.locked
    }

    #[inline]
    pub fn count(&self) -> u32 {
        self.count
    }

    pub fn last_reason(&self) -> Option<&str> {
        self.last_reason.as_deref()
    }

    pub fn last_violation_at_ms(&self) -> Option<i64> {
        self.last_violation_at_ms
    }

    /// Record one violation and return the resulting state.
    ///
    /// Reaching the threshold flips `locked`; it never flips back here.
    pub fn record(&mut self, reason: impl Into<String>, now_ms: i64) -> ViolationStatus {
        self.count += 1;
        self.last_reason = Some(reason.into());
        self.last_violation_at_ms = Some(now_ms);
        if self.count >= self.threshold {
            self.locked = true;
        }
        self.status()
    }

    /// Clear all state. Reserved for the logout / re-authenticate path.
    pub fn reset(&mut self) {
        self.count = 0;
        self.locked = false;
        self.last_reason = None;
        self.last_violation_at_ms = None;
    }
}

impl Default for ViolationTracker {
    fn default() -> Self {
        Self::new(Self::DEFAULT_THRESHOLD)
    }
}
