//! Moderation Verdict Value Object
//!
//! Produced fresh per classification call and attached to the content
//! entity it evaluated. Never persisted on its own.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

/// Outcome of classifying a piece of text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModerationVerdict {
    /// Whether any policy rule matched
    pub flagged: bool,
    /// Name of the first matching rule, if any
    pub reason: Option<Cow<'static, str>>,
}

impl ModerationVerdict {
    /// Verdict for content that matched no rule
    #[inline]
    pub fn clean() -> Self {
        Self {
            flagged: false,
            reason: None,
        }
    }

    /// Verdict for content that matched a rule
    #[inline]
    pub fn flag(reason: impl Into<Cow<'static, str>>) -> Self {
        Self {
            flagged: true,
            reason: Some(reason.into()),
        }
    }

    #[inline]
    pub fn is_clean(&self) -> bool {
        !self.flagged
    }

    #[inline]
    pub fn reason(&self) -> Option<&str> {
        self.reason.as_deref()
    }
}

impl Default for ModerationVerdict {
    fn default() -> Self {
        Self::clean()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean() {
        let verdict = ModerationVerdict::clean();
        assert!(verdict.is_clean());
        assert!(verdict.reason().is_none());
    }

    #[test]
    fn test_flag() {
        let verdict = ModerationVerdict::flag("excessive capitalization");
        assert!(verdict.flagged);
        assert_eq!(verdict.reason(), Some("excessive capitalization"));
    }

    #[test]
    fn test_default_is_clean() {
        assert!(ModerationVerdict::default().is_clean());
    }
}
