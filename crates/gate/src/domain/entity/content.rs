//! Content Entity
//!
//! One abstraction over posts, comments and messages: everything the gate
//! produces. Only the gate constructs these (submission time), so every
//! instance starts with a fresh time-ordered id, zero engagement counters
//! and the verdict of the classification that just ran.

use chrono::{DateTime, Utc};
use kernel::id::{ContentId, Id, UserId};
use serde::{Deserialize, Serialize};

use crate::domain::value_object::{
    action_category::ActionCategory, draft::Attachment, verdict::ModerationVerdict,
    viewer::Viewer,
};

/// Popularity delta applied per like/unlike
const LIKE_SCORE_DELTA: i64 = 10;

/// A gated piece of user-generated content
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Content {
    /// Time-ordered identifier (string form sorts chronologically)
    pub id: ContentId,
    /// Author identity
    pub author_id: UserId,
    /// Category the submission was gated under
    pub category: ActionCategory,
    /// Sanitized body text (empty for pure media/audio content)
    pub text: String,
    /// Optional media/audio payload
    pub attachment: Option<Attachment>,
    /// Creation instant (injected at submission)
    pub created_at_ms: i64,
    /// Engagement counters
    pub likes: u32,
    pub comments_count: u32,
    pub shares: u32,
    pub views: u32,
    /// Feed popularity score, adjusted by engagement
    pub popularity_score: i64,
    /// Verdict attached at creation; cleared only by moderator action
    pub moderation: ModerationVerdict,
    /// Hidden from regular feeds (flagged at creation, or author banned)
    pub hidden: bool,
}

impl Content {
    /// Create a new content entity. Gate-internal: content only comes into
    /// existence through an accepted submission.
    pub(crate) fn new(
        author_id: UserId,
        category: ActionCategory,
        text: String,
        attachment: Option<Attachment>,
        moderation: ModerationVerdict,
        now_ms: i64,
    ) -> Self {
        let hidden = moderation.flagged;
        Self {
            id: Id::at(now_ms),
            author_id,
            category,
            text,
            attachment,
            created_at_ms: now_ms,
            likes: 0,
            comments_count: 0,
            shares: 0,
            views: 0,
            popularity_score: 0,
            moderation,
            hidden,
        }
    }

    /// Creation instant as a UTC datetime
    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp_millis(self.created_at_ms)
    }

    #[inline]
    pub fn is_flagged(&self) -> bool {
        self.moderation.flagged
    }

    pub fn flag_reason(&self) -> Option<&str> {
        self.moderation.reason()
    }

    /// Visibility: shown unless hidden, except to elevated roles and the
    /// author (any one condition suffices).
    pub fn is_visible_to(&self, viewer: &Viewer) -> bool {
        if !self.hidden {
            return true;
        }
        if viewer.can_view_hidden() {
            return true;
        }
        self.author_id == viewer.id
    }

    /// Apply a like (`true`) or unlike (`false`) to the counters.
    pub fn record_like(&mut self, liked: bool) {
        if liked {
            self.likes += 1;
            self.popularity_score += LIKE_SCORE_DELTA;
        } else {
            self.likes = self.likes.saturating_sub(1);
            self.popularity_score -= LIKE_SCORE_DELTA;
        }
    }

    pub fn record_view(&mut self) {
        self.views += 1;
    }

    pub fn record_share(&mut self) {
        self.shares += 1;
    }

    pub fn record_comment(&mut self) {
        self.comments_count += 1;
    }

    /// Clear the verdict and unhide. Moderator action only.
    pub(crate) fn clear_flags(&mut self) {
        self.moderation = ModerationVerdict::clean();
        self.hidden = false;
    }

    /// Force visibility, e.g. when the author is banned or reinstated.
    pub(crate) fn set_hidden(&mut self, hidden: bool) {
        self.hidden = hidden;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_object::user_role::UserRole;

    fn sample(verdict: ModerationVerdict) -> Content {
        Content::new(
            Id::new(),
            ActionCategory::Post,
            "hello world".to_string(),
            None,
            verdict,
            1_000,
        )
    }

    #[test]
    fn test_new_content_starts_at_zero() {
        let content = sample(ModerationVerdict::clean());
        assert_eq!(content.likes, 0);
        assert_eq!(content.comments_count, 0);
        assert_eq!(content.shares, 0);
        assert_eq!(content.views, 0);
        assert_eq!(content.popularity_score, 0);
        assert!(!content.hidden);
    }

    #[test]
    fn test_flagged_content_is_hidden_at_creation() {
        let content = sample(ModerationVerdict::flag("repeated character spam"));
        assert!(content.is_flagged());
        assert!(content.hidden);
        assert_eq!(content.flag_reason(), Some("repeated character spam"));
    }

    #[test]
    fn test_visibility_three_way_or() {
        let mut content = sample(ModerationVerdict::flag("repeated character spam"));
        let author = content.author_id;

        let stranger = Viewer::user(Id::new());
        let moderator = Viewer::new(Id::new(), UserRole::Moderator);
        let owner = Viewer::user(author);

        assert!(!content.is_visible_to(&stranger));
        assert!(content.is_visible_to(&moderator));
        assert!(content.is_visible_to(&owner));

        // Visible to everyone once unhidden
        content.clear_flags();
        assert!(content.is_visible_to(&stranger));
    }

    #[test]
    fn test_like_and_unlike_adjust_score() {
        let mut content = sample(ModerationVerdict::clean());
        content.record_like(true);
        content.record_like(true);
        assert_eq!(content.likes, 2);
        assert_eq!(content.popularity_score, 20);
        content.record_like(false);
        assert_eq!(content.likes, 1);
        assert_eq!(content.popularity_score, 10);
    }

    #[test]
    fn test_unlike_floors_likes_at_zero() {
        let mut content = sample(ModerationVerdict::clean());
        content.record_like(false);
        assert_eq!(content.likes, 0);
    }

    #[test]
    fn test_created_at_conversion() {
        let content = sample(ModerationVerdict::clean());
        let created = content.created_at().unwrap();
        assert_eq!(created.timestamp_millis(), 1_000);
    }
}
