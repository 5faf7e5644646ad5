//! Draft Value Object
//!
//! Unsanitized submission payload handed to the mutation gate. Text drafts
//! go through the sanitizer and classifier; pure media/audio drafts bypass
//! both.

use serde::{Deserialize, Serialize};

/// Non-text payload carried by a post or message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE", tag = "kind")]
pub enum Attachment {
    /// Image or video by URL
    Media { url: String },
    /// Voice clip with its duration
    Audio { duration_secs: u32 },
}

/// Raw submission payload (pre-sanitization)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Draft {
    text: String,
    attachment: Option<Attachment>,
}

impl Draft {
    /// Plain text draft
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            attachment: None,
        }
    }

    /// Media draft with no caption
    pub fn media(url: impl Into<String>) -> Self {
        Self {
            text: String::new(),
            attachment: Some(Attachment::Media { url: url.into() }),
        }
    }

    /// Audio draft with no caption
    pub fn audio(duration_secs: u32) -> Self {
        Self {
            text: String::new(),
            attachment: Some(Attachment::Audio { duration_secs }),
        }
    }

    /// Attach or replace the caption text
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    #[inline]
    pub fn raw_text(&self) -> &str {
        &self.text
    }

    #[inline]
    pub fn attachment(&self) -> Option<&Attachment> {
        self.attachment.as_ref()
    }

    #[inline]
    pub fn has_attachment(&self) -> bool {
        self.attachment.is_some()
    }

    /// Whether there is any text to sanitize
    #[inline]
    pub fn has_text(&self) -> bool {
        !self.text.trim().is_empty()
    }

    pub(crate) fn into_attachment(self) -> Option<Attachment> {
        self.attachment
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_draft() {
        let draft = Draft::text("hello");
        assert!(draft.has_text());
        assert!(!draft.has_attachment());
    }

    #[test]
    fn test_media_draft_has_no_text() {
        let draft = Draft::media("https://cdn.example/pic.png");
        assert!(!draft.has_text());
        assert!(draft.has_attachment());
    }

    #[test]
    fn test_media_with_caption() {
        let draft = Draft::media("https://cdn.example/pic.png").with_text("look at this");
        assert!(draft.has_text());
        assert!(draft.has_attachment());
    }

    #[test]
    fn test_whitespace_text_counts_as_empty() {
        let draft = Draft::audio(12).with_text("   ");
        assert!(!draft.has_text());
    }
}
