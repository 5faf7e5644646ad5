//! Gate Session Entity
//!
//! Per-identity gate state: one rate window per action category plus the
//! violation tracker. Sessions are owned by the caller and passed into the
//! gate by `&mut`, so access to one identity's state is serialized by
//! construction. Multi-tenant callers keep one session per identity.

use std::collections::HashMap;

use kernel::id::UserId;
use platform::rate_limit::RateWindow;

use crate::domain::entity::violation::{ViolationStatus, ViolationTracker};
use crate::domain::value_object::action_category::ActionCategory;

/// Mutable gate state for one authenticated identity
#[derive(Debug)]
pub struct GateSession {
    user_id: UserId,
    windows: HashMap<ActionCategory, RateWindow>,
    violations: ViolationTracker,
}

impl GateSession {
    pub fn new(user_id: UserId, violation_threshold: u32) -> Self {
        Self {
            user_id,
            windows: HashMap::new(),
            violations: ViolationTracker::new(violation_threshold),
        }
    }

    #[inline]
    pub fn user_id(&self) -> UserId {
        self.user_id
    }

    #[inline]
    pub fn is_locked(&self) -> bool {
        self.violations.is_locked()
    }

    pub fn violation_status(&self) -> ViolationStatus {
        self.violations.status()
    }

    pub fn violation_count(&self) -> u32 {
        self.violations.count()
    }

    /// Clear violation state. Reserved for the logout / re-authenticate
    /// collaborator; rate windows are left alone (slots free by pruning).
    pub fn reset_violations(&mut self) {
        self.violations.reset();
    }

    pub(crate) fn window_mut(&mut self, category: ActionCategory) -> &mut RateWindow {
        self.windows.entry(category).or_default()
    }

    pub(crate) fn violations_mut(&mut self) -> &mut ViolationTracker {
        &mut self.violations
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kernel::id::Id;

    #[test]
    fn test_new_session_is_clean() {
        let session = GateSession::new(Id::new(), 3);
        assert!(!session.is_locked());
        assert_eq!(session.violation_status(), ViolationStatus::Normal);
        assert_eq!(session.violation_count(), 0);
    }

    #[test]
    fn test_windows_are_per_category() {
        let mut session = GateSession::new(Id::new(), 3);
        let cfg = platform::rate_limit::RateLimitConfig::from_millis(1, 10_000);
        assert!(session.window_mut(ActionCategory::Post).try_consume(&cfg, 0).allowed);
        // The POST window is full, but LIKE has its own window
        assert!(!session.window_mut(ActionCategory::Post).try_consume(&cfg, 1).allowed);
        assert!(session.window_mut(ActionCategory::Like).try_consume(&cfg, 1).allowed);
    }

    #[test]
    fn test_reset_clears_violations() {
        let mut session = GateSession::new(Id::new(), 1);
        session.violations_mut().record("rate-limit:POST", 5);
        assert!(session.is_locked());
        session.reset_violations();
        assert!(!session.is_locked());
    }
}
