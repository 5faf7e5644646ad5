//! Action Category Value Object
//!
//! Every gated mutation declares exactly one category before evaluation.
//! Each category maps to its own rate-limit window.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Category of a user-generated mutation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ActionCategory {
    /// Creating a post
    Post,
    /// Liking or unliking content
    Like,
    /// Sending a chat message
    Message,
    /// Commenting on a post
    Comment,
}

impl ActionCategory {
    /// All categories, for iterating limit tables
    pub const ALL: [ActionCategory; 4] = [
        ActionCategory::Post,
        ActionCategory::Like,
        ActionCategory::Message,
        ActionCategory::Comment,
    ];

    /// Get string code for serialization/API
    #[inline]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Post => "POST",
            Self::Like => "LIKE",
            Self::Message => "MESSAGE",
            Self::Comment => "COMMENT",
        }
    }

    /// Create from string code
    #[inline]
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "POST" => Some(Self::Post),
            "LIKE" => Some(Self::Like),
            "MESSAGE" => Some(Self::Message),
            "COMMENT" => Some(Self::Comment),
            _ => None,
        }
    }

    /// Whether an accepted action of this category produces a content entity
    ///
    /// Likes are pure engagement: they are rate limited but create nothing.
    #[inline]
    pub const fn produces_content(&self) -> bool {
        !matches!(self, Self::Like)
    }
}

impl fmt::Display for ActionCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
