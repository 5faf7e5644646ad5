//! Gate Error Types
//!
//! This module provides gate-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

use crate::domain::value_object::action_category::ActionCategory;

/// Gate-specific result type alias
pub type GateResult<T> = Result<T, GateError>;

/// Gate-specific error variants
///
/// Every denial is a typed result, never a fault. `RateLimited` and
/// `InputTooLong` escalate the violation counter; `EmptyInput` does not.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GateError {
    /// Submitted content is empty
    #[error("Content cannot be empty")]
    EmptyInput,

    /// Submitted content exceeds the configured length limit
    #[error("Input too long ({length} chars, maximum {max})")]
    InputTooLong { length: usize, max: usize },

    /// Too many actions of this category inside the window
    #[error("Rate limit exceeded for {category}. Please slow down.")]
    RateLimited { category: ActionCategory },

    /// Session is locked after repeated violations
    #[error("Account is locked due to repeated security violations")]
    Locked,

    /// Action requires an elevated role
    #[error("This action requires moderator privileges")]
    Forbidden,
}

impl GateError {
    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            GateError::EmptyInput => ErrorKind::EmptyInput,
            GateError::InputTooLong { .. } => ErrorKind::TooLong,
            GateError::RateLimited { .. } => ErrorKind::RateLimited,
            GateError::Locked => ErrorKind::Locked,
            GateError::Forbidden => ErrorKind::Forbidden,
        }
    }

    /// Whether this denial escalates the violation counter
    pub fn counts_as_violation(&self) -> bool {
        self.kind().counts_as_violation()
    }

    /// Convert to AppError, attaching the recovery action where one exists
    pub fn to_app_error(&self) -> AppError {
        let err = AppError::new(self.kind(), self.to_string());
        match self {
            GateError::Locked => err.with_action("Sign out and sign back in to continue"),
            GateError::RateLimited { .. } => err.with_action("Wait a moment before retrying"),
            _ => err,
        }
    }

    /// Log the error with appropriate level
    pub fn log(&self) {
        match self {
            GateError::Locked => {
                tracing::warn!("Gated action attempted on locked session");
            }
            GateError::RateLimited { category } => {
                tracing::warn!(category = %category, "Rate limit exceeded");
            }
            GateError::InputTooLong { length, max } => {
                tracing::warn!(length, max, "Oversized input rejected");
            }
            _ => {
                tracing::debug!(error = %self, "Gate denial");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_mapping() {
        assert_eq!(GateError::EmptyInput.kind(), ErrorKind::EmptyInput);
        assert_eq!(
            GateError::InputTooLong {
                length: 600,
                max: 500
            }
            .kind(),
            ErrorKind::TooLong
        );
        assert_eq!(
            GateError::RateLimited {
                category: ActionCategory::Post
            }
            .kind(),
            ErrorKind::RateLimited
        );
        assert_eq!(GateError::Locked.kind(), ErrorKind::Locked);
        assert_eq!(GateError::Forbidden.kind(), ErrorKind::Forbidden);
    }

    #[test]
    fn test_violation_escalation() {
        assert!(
            GateError::RateLimited {
                category: ActionCategory::Like
            }
            .counts_as_violation()
        );
        assert!(
            GateError::InputTooLong {
                length: 501,
                max: 500
            }
            .counts_as_violation()
        );
        assert!(!GateError::EmptyInput.counts_as_violation());
        assert!(!GateError::Locked.counts_as_violation());
        assert!(!GateError::Forbidden.counts_as_violation());
    }

    #[test]
    fn test_locked_app_error_has_action() {
        let err = GateError::Locked.to_app_error();
        assert_eq!(err.kind(), ErrorKind::Locked);
        assert!(err.action().is_some());
        assert!(err.is_terminal());
    }

    #[test]
    fn test_display_names_category() {
        let err = GateError::RateLimited {
            category: ActionCategory::Comment,
        };
        assert!(err.to_string().contains("COMMENT"));
    }
}
