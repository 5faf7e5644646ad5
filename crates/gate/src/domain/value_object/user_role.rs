use serde::{Deserialize, Serialize};
use std::fmt;

/// User role on the platform
///
/// `Moderator` and `Admin` are elevated: they see hidden content and may
/// perform moderation actions. `Creator` is a display distinction only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserRole {
    #[default]
    User,
    Moderator,
    Admin,
    Creator,
}

impl UserRole {
    /// Get string code for serialization/API
    #[inline]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::User => "USER",
            Self::Moderator => "MODERATOR",
            Self::Admin => "ADMIN",
            Self::Creator => "CREATOR",
        }
    }

    /// Create from string code
    #[inline]
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "USER" => Some(Self::User),
            "MODERATOR" => Some(Self::Moderator),
            "ADMIN" => Some(Self::Admin),
            "CREATOR" => Some(Self::Creator),
            _ => None,
        }
    }

    /// Whether this role sees hidden (flagged) content in feeds
    #[inline]
    pub const fn can_view_hidden(&self) -> bool {
        matches!(self, Self::Moderator | Self::Admin)
    }

    /// Whether this role may perform moderation actions
    /// (dismiss flags, hide an author's content)
    #[inline]
    pub const fn can_moderate(&self) -> bool {
        matches!(self, Self::Moderator | Self::Admin)
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        assert_eq!(UserRole::default(), UserRole::User);
    }

    #[test]
    fn test_code_round_trip() {
        for role in [
            UserRole::User,
            UserRole::Moderator,
            UserRole::Admin,
            UserRole::Creator,
        ] {
            assert_eq!(UserRole::from_code(role.code()), Some(role));
        }
        assert_eq!(UserRole::from_code("SUPERADMIN"), None);
    }

    #[test]
    fn test_can_view_hidden() {
        assert!(UserRole::Moderator.can_view_hidden());
        assert!(UserRole::Admin.can_view_hidden());
        assert!(!UserRole::User.can_view_hidden());
        // Creator is a badge, not a privilege
        assert!(!UserRole::Creator.can_view_hidden());
    }

    #[test]
    fn test_can_moderate() {
        assert!(UserRole::Moderator.can_moderate());
        assert!(UserRole::Admin.can_moderate());
        assert!(!UserRole::User.can_moderate());
        assert!(!UserRole::Creator.can_moderate());
    }
}
