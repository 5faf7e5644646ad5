//! Input Sanitization
//!
//! Normalizes and bounds free-text input before it enters any mutation.
//!
//! ## Processing order
//! 1. NFKC normalize, then trim surrounding whitespace
//! 2. Reject empty input
//! 3. Reject input over the character limit (checked before tag removal)
//! 4. Strip markup-like tag sequences (`<...>`)
//!
//! Tag removal is a defensive strip, not HTML sanitization: everything from
//! a `<` up to and including the next `>` (or end of input) is dropped.

use std::fmt;

use thiserror::Error;
use unicode_normalization::UnicodeNormalization;

/// Default maximum input length (in characters)
pub const DEFAULT_MAX_CHARS: usize = 500;

/// Error returned when sanitization rejects the input
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SanitizeError {
    /// Input is empty after normalization (or was nothing but markup)
    #[error("Input is empty")]
    Empty,

    /// Input exceeds the configured character limit
    #[error("Input is too long ({length} chars, maximum {max})")]
    TooLong { length: usize, max: usize },
}

/// Validated, normalized free-text input
///
/// # Invariants
/// - Non-empty after normalization and tag stripping
/// - At most the configured number of characters (pre-strip)
/// - Contains no `<...>` tag sequences
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SanitizedText {
    text: String,
}

impl SanitizedText {
    /// Sanitize raw input against a character limit.
    ///
    /// Pure function over its input; callers decide how to surface
    /// rejection.
    pub fn new(input: impl AsRef<str>, max_chars: usize) -> Result<Self, SanitizeError> {
        let normalized: String = input.as_ref().nfkc().collect();
        let trimmed = normalized.trim();

        if trimmed.is_empty() {
            return Err(SanitizeError::Empty);
        }

        let length = trimmed.chars().count();
        if length > max_chars {
            return Err(SanitizeError::TooLong {
                length,
                max: max_chars,
            });
        }

        let stripped = strip_tags(trimmed);
        let stripped = stripped.trim();
        if stripped.is_empty() {
            return Err(SanitizeError::Empty);
        }

        Ok(Self {
            text: stripped.to_string(),
        })
    }

    /// Sanitize with the default character limit
    pub fn with_default_limit(input: impl AsRef<str>) -> Result<Self, SanitizeError> {
        Self::new(input, DEFAULT_MAX_CHARS)
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    #[inline]
    pub fn into_inner(self) -> String {
        self.text
    }
}

impl fmt::Display for SanitizedText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl AsRef<str> for SanitizedText {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

/// Drop every `<...>` sequence; an unterminated `<` swallows the rest.
fn strip_tags(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut chars = input.chars();
    while let Some(c) = chars.next() {
        if c == '<' {
            for c in chars.by_ref() {
                if c == '>' {
                    break;
                }
            }
        } else {
            out.push(c);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trims_whitespace() {
        let text = SanitizedText::with_default_limit("  hello  ").unwrap();
        assert_eq!(text.as_str(), "hello");
    }

    #[test]
    fn test_empty_rejected() {
        assert_eq!(
            SanitizedText::with_default_limit(""),
            Err(SanitizeError::Empty)
        );
    }

    #[test]
    fn test_whitespace_only_rejected() {
        assert_eq!(
            SanitizedText::with_default_limit("  "),
            Err(SanitizeError::Empty)
        );
    }

    #[test]
    fn test_max_length_allowed() {
        let input = "a".repeat(DEFAULT_MAX_CHARS);
        assert!(SanitizedText::with_default_limit(&input).is_ok());
    }

    #[test]
    fn test_over_max_rejected() {
        let input = "a".repeat(DEFAULT_MAX_CHARS + 1);
        assert_eq!(
            SanitizedText::with_default_limit(&input),
            Err(SanitizeError::TooLong {
                length: 501,
                max: 500
            })
        );
    }

    #[test]
    fn test_custom_limit() {
        assert!(SanitizedText::new("abcde", 5).is_ok());
        assert!(matches!(
            SanitizedText::new("abcdef", 5),
            Err(SanitizeError::TooLong { length: 6, max: 5 })
        ));
    }

    #[test]
    fn test_strips_tags() {
        let text = SanitizedText::with_default_limit("<b>hi</b>").unwrap();
        assert_eq!(text.as_str(), "hi");
    }

    #[test]
    fn test_strips_nested_angle_run() {
        // `<a<b>` is a single malformed sequence up to the first `>`
        let text = SanitizedText::with_default_limit("x<a<b>y").unwrap();
        assert_eq!(text.as_str(), "xy");
    }

    #[test]
    fn test_unterminated_tag_swallows_rest() {
        let text = SanitizedText::with_default_limit("a < b").unwrap();
        assert_eq!(text.as_str(), "a");
    }

    #[test]
    fn test_lone_closing_bracket_kept() {
        let text = SanitizedText::with_default_limit("a > b").unwrap();
        assert_eq!(text.as_str(), "a > b");
    }

    #[test]
    fn test_tags_only_is_empty() {
        assert_eq!(
            SanitizedText::with_default_limit("<b></b>"),
            Err(SanitizeError::Empty)
        );
    }

    #[test]
    fn test_nfkc_normalization() {
        // Full-width characters become ASCII after NFKC
        let text = SanitizedText::with_default_limit("ｈｅｌｌｏ").unwrap();
        assert_eq!(text.as_str(), "hello");
    }

    #[test]
    fn test_script_content_not_neutralized_beyond_tags() {
        // Only the tag markers are removed, the inner text stays
        let text = SanitizedText::with_default_limit("<script>alert(1)</script>").unwrap();
        assert_eq!(text.as_str(), "alert(1)");
    }
}
