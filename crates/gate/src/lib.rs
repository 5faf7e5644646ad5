//! Gate (Policy Gate) Module
//!
//! Clean Architecture structure:
//! - `domain/` - Business logic, entities, value objects, classifier rules
//! - `application/` - Use cases (submit, feed, moderation) and configuration
//!
//! ## Features
//! - Sliding-window rate limits per action category (post, like, message, comment)
//! - Violation tracking with lockout after repeated abuse
//! - Input sanitization and rule-based content moderation
//! - Visibility-filtered, reverse-chronological feed ranking
//!
//! ## Security Model
//! - Every content-producing action passes the gate in a fixed order:
//!   lockout check, rate limit, sanitization, classification
//! - Rate-limit and input-length violations escalate toward lockout;
//!   empty submits do not
//! - Lockout is terminal until an explicit reset (re-authentication)
//! - Moderation flags degrade visibility, they never block authorship
//! - Time is injected into every call; the gate never reads a clock

pub mod application;
pub mod domain;
pub mod error;

// Re-exports for convenience
pub use application::config::GateConfig;
pub use application::feed::visible_feed;
pub use application::moderation::{dismiss_flags, set_author_hidden};
pub use application::submit::MutationGate;
pub use domain::entity::content::Content;
pub use domain::entity::session::GateSession;
pub use domain::entity::violation::{ViolationStatus, ViolationTracker};
pub use domain::services::{ContentClassifier, RuleClassifier};
pub use domain::value_object::action_category::ActionCategory;
pub use domain::value_object::draft::{Attachment, Draft};
pub use domain::value_object::user_role::UserRole;
pub use domain::value_object::verdict::ModerationVerdict;
pub use domain::value_object::viewer::Viewer;
pub use error::{GateError, GateResult};

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult, OptionExt, ResultExt},
    kind::ErrorKind,
};

// Convenience re-exports
pub mod config {
    pub use crate::application::config::*;
}

pub mod models {
    pub use crate::domain::entity::*;
    pub use crate::domain::value_object::*;
}
