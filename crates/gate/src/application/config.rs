//! Gate Configuration
//!
//! Everything the gate needs is supplied at construction: the per-category
//! limits table, the input length bound and the violation threshold. No
//! environment coupling.

use platform::rate_limit::RateLimitConfig;
use platform::sanitize::DEFAULT_MAX_CHARS;

use crate::domain::entity::violation::ViolationTracker;
use crate::domain::value_object::action_category::ActionCategory;

/// Policy-gate configuration
#[derive(Debug, Clone)]
pub struct GateConfig {
    /// Rate limit for creating posts
    pub post_limit: RateLimitConfig,
    /// Rate limit for likes/unlikes
    pub like_limit: RateLimitConfig,
    /// Rate limit for chat messages
    pub message_limit: RateLimitConfig,
    /// Rate limit for comments
    pub comment_limit: RateLimitConfig,
    /// Maximum input length in characters
    pub max_input_length: usize,
    /// Violations before lockout
    pub violation_threshold: u32,
}

impl Default for GateConfig {
    fn default() -> Self {
        Self {
            post_limit: RateLimitConfig::from_millis(3, 60_000),
            like_limit: RateLimitConfig::from_millis(10, 10_000),
            message_limit: RateLimitConfig::from_millis(15, 60_000),
            comment_limit: RateLimitConfig::from_millis(5, 30_000),
            max_input_length: DEFAULT_MAX_CHARS,
            violation_threshold: ViolationTracker::DEFAULT_THRESHOLD,
        }
    }
}

impl GateConfig {
    /// The limits-table entry for a category
    pub fn limit(&self, category: ActionCategory) -> &RateLimitConfig {
        match category {
            ActionCategory::Post => &self.post_limit,
            ActionCategory::Like => &self.like_limit,
            ActionCategory::Message => &self.message_limit,
            ActionCategory::Comment => &self.comment_limit,
        }
    }

    /// Replace one category's limit
    pub fn with_limit(mut self, category: ActionCategory, limit: RateLimitConfig) -> Self {
        match category {
            ActionCategory::Post => self.post_limit = limit,
            ActionCategory::Like => self.like_limit = limit,
            ActionCategory::Message => self.message_limit = limit,
            ActionCategory::Comment => self.comment_limit = limit,
        }
        self
    }
}
