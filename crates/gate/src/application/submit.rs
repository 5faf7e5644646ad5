//! Submit Use Case
//!
//! The mutation gate: every content-producing action is evaluated in a
//! fixed order, short-circuiting on the first failure:
//!
//! 1. lockout check
//! 2. rate limit (denial records a violation)
//! 3. sanitization (oversized input records a violation; empty input is a
//!    user slip and does not)
//! 4. classification (a flag never rejects - the content is created hidden)
//!
//! Time is injected into every call as unix milliseconds.

use platform::sanitize::{SanitizeError, SanitizedText};

use crate::application::config::GateConfig;
use crate::domain::entity::content::Content;
use crate::domain::entity::session::GateSession;
use crate::domain::services::{ContentClassifier, RuleClassifier};
use crate::domain::value_object::action_category::ActionCategory;
use crate::domain::value_object::draft::Draft;
use crate::domain::value_object::verdict::ModerationVerdict;
use crate::error::{GateError, GateResult};
use kernel::id::UserId;

/// The policy gate for user-generated mutations
pub struct MutationGate<C = RuleClassifier>
where
    C: ContentClassifier,
{
    config: GateConfig,
    classifier: C,
}

impl MutationGate<RuleClassifier> {
    /// Gate with the built-in rule classifier
    pub fn new(config: GateConfig) -> Self {
        Self {
            config,
            classifier: RuleClassifier::new(),
        }
    }
}

impl<C> MutationGate<C>
where
    C: ContentClassifier,
{
    /// Gate with a custom classifier implementation
    pub fn with_classifier(config: GateConfig, classifier: C) -> Self {
        Self { config, classifier }
    }

    pub fn config(&self) -> &GateConfig {
        &self.config
    }

    /// Start a session for one authenticated identity
    pub fn new_session(&self, user_id: UserId) -> GateSession {
        GateSession::new(user_id, self.config.violation_threshold)
    }

    /// Steps 1-2 only: lockout and rate limit.
    ///
    /// Used directly for engagement actions (likes) that produce no
    /// content entity.
    pub fn authorize(
        &self,
        session: &mut GateSession,
        category: ActionCategory,
        now_ms: i64,
    ) -> GateResult<()> {
        if session.is_locked() {
            let err = GateError::Locked;
            err.log();
            return Err(err);
        }

        let result = session
            .window_mut(category)
            .try_consume(self.config.limit(category), now_ms);
        if !result.allowed {
            let status = session
                .violations_mut()
                .record(format!("rate-limit:{category}"), now_ms);
            tracing::warn!(
                user_id = %session.user_id(),
                category = %category,
                violations = session.violation_count(),
                reset_at_ms = result.reset_at_ms,
                "Rate limit exceeded"
            );
            if status.is_locked() {
                tracing::warn!(
                    user_id = %session.user_id(),
                    "Session locked after repeated violations"
                );
            }
            return Err(GateError::RateLimited { category });
        }

        Ok(())
    }

    /// Full gate evaluation producing a content entity.
    pub fn submit(
        &self,
        session: &mut GateSession,
        category: ActionCategory,
        draft: Draft,
        now_ms: i64,
    ) -> GateResult<Content> {
        self.authorize(session, category, now_ms)?;

        let text = match self.sanitize_draft(session, &draft, now_ms)? {
            Some(clean) => clean.into_inner(),
            None => String::new(),
        };

        let verdict = if text.is_empty() {
            ModerationVerdict::clean()
        } else {
            self.classifier.classify(&text)
        };
        if verdict.flagged {
            tracing::warn!(
                user_id = %session.user_id(),
                category = %category,
                reason = verdict.reason().unwrap_or(""),
                "Content flagged by moderation, creating hidden"
            );
        }

        let content = Content::new(
            session.user_id(),
            category,
            text,
            draft.into_attachment(),
            verdict,
            now_ms,
        );
        tracing::info!(
            content_id = %content.id,
            user_id = %content.author_id,
            category = %category,
            flagged = content.is_flagged(),
            "Content accepted"
        );
        Ok(content)
    }

    /// Step 3. `None` means a pure media/audio payload with nothing to
    /// sanitize or classify.
    fn sanitize_draft(
        &self,
        session: &mut GateSession,
        draft: &Draft,
        now_ms: i64,
    ) -> GateResult<Option<SanitizedText>> {
        if !draft.has_text() {
            if draft.has_attachment() {
                return Ok(None);
            }
            let err = GateError::EmptyInput;
            err.log();
            return Err(err);
        }

        match SanitizedText::new(draft.raw_text(), self.config.max_input_length) {
            Ok(clean) => Ok(Some(clean)),
            Err(SanitizeError::TooLong { length, max }) => {
                let status = session.violations_mut().record("input-too-long", now_ms);
                tracing::warn!(
                    user_id = %session.user_id(),
                    length,
                    max,
                    violations = session.violation_count(),
                    "Oversized input rejected"
                );
                if status.is_locked() {
                    tracing::warn!(
                        user_id = %session.user_id(),
                        "Session locked after repeated violations"
                    );
                }
                Err(GateError::InputTooLong { length, max })
            }
            Err(SanitizeError::Empty) => {
                // Stripped down to nothing (e.g. markup only)
                if draft.has_attachment() {
                    Ok(None)
                } else {
                    let err = GateError::EmptyInput;
                    err.log();
                    Err(err)
                }
            }
        }
    }
}
