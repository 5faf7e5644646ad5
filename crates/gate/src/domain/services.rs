//! Domain Services
//!
//! Pure content-classification logic. The classifier is deterministic and
//! synchronous: the same text always yields the same verdict, and it never
//! fails — at worst the verdict is clean.

use crate::domain::value_object::verdict::ModerationVerdict;

/// Capability interface for content classification
///
/// The gate only depends on this trait, so a hosted or ML-backed
/// classifier can replace [`RuleClassifier`] without touching gate control
/// flow.
pub trait ContentClassifier {
    fn classify(&self, text: &str) -> ModerationVerdict;
}

/// Terms that flag content outright (matched case-insensitively)
const BANNED_TERMS: &[&str] = &[
    "free money",
    "get rich quick",
    "crypto giveaway",
    "guaranteed returns",
    "double your money",
    "click this link to claim",
    "dm me to earn",
    "hot singles",
];

/// Minimum letters before the capitalization rule applies
const CAPS_MIN_LETTERS: usize = 12;

/// Fraction of uppercase letters considered shouting
const CAPS_RATIO: f64 = 0.7;

/// Identical consecutive characters considered spam
const REPEAT_RUN: usize = 6;

/// Fixed-rule classifier
///
/// Rules are checked in order; the first match names the verdict:
/// 1. banned term
/// 2. excessive capitalization
/// 3. repeated-character spam
#[derive(Debug, Clone, Default)]
pub struct RuleClassifier {
    extra_terms: Vec<String>,
}

impl RuleClassifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Extend the banned-term list with platform-specific entries
    pub fn with_terms(terms: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            extra_terms: terms
                .into_iter()
                .map(|t| t.into().to_lowercase())
                .collect(),
        }
    }
}

impl ContentClassifier for RuleClassifier {
    fn classify(&self, text: &str) -> ModerationVerdict {
        let lower = text.to_lowercase();

        if let Some(term) = BANNED_TERMS.iter().find(|t| lower.contains(**t)) {
            return ModerationVerdict::flag(format!("contains banned term \"{term}\""));
        }
        if let Some(term) = self.extra_terms.iter().find(|t| lower.contains(t.as_str())) {
            return ModerationVerdict::flag(format!("contains banned term \"{term}\""));
        }
        if is_shouting(text) {
            return ModerationVerdict::flag("excessive capitalization");
        }
        if has_repeated_run(text, REPEAT_RUN) {
            return ModerationVerdict::flag("repeated character spam");
        }
        ModerationVerdict::clean()
    }
}

/// True when at least `CAPS_RATIO` of the letters are uppercase, over a
/// minimum letter count (short exclamations are fine).
fn is_shouting(text: &str) -> bool {
    let letters = text.chars().filter(|c| c.is_alphabetic()).count();
    if letters < CAPS_MIN_LETTERS {
        return false;
    }
    let upper = text.chars().filter(|c| c.is_uppercase()).count();
    upper as f64 / letters as f64 >= CAPS_RATIO
}

/// True when any non-whitespace character repeats `run` or more times in a
/// row.
fn has_repeated_run(text: &str, run: usize) -> bool {
    let mut prev: Option<char> = None;
    let mut count = 0usize;
    for c in text.chars() {
        if c.is_whitespace() {
            prev = None;
            count = 0;
            continue;
        }
        if Some(c) == prev {
            count += 1;
            if count >= run {
                return true;
            }
        } else {
            prev = Some(c);
            count = 1;
        }
    }
    false
}
