//! Viewer Value Object
//!
//! Identity and role of whoever is looking at a feed or performing a
//! moderation action.

use kernel::id::UserId;
use serde::{Deserialize, Serialize};

use super::user_role::UserRole;

/// A viewing identity: user id plus role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewer {
    pub id: UserId,
    pub role: UserRole,
}

impl Viewer {
    pub fn new(id: UserId, role: UserRole) -> Self {
        Self { id, role }
    }

    /// Regular user with no elevated privileges
    pub fn user(id: UserId) -> Self {
        Self::new(id, UserRole::User)
    }

    #[inline]
    pub fn can_view_hidden(&self) -> bool {
        self.role.can_view_hidden()
    }

    #[inline]
    pub fn can_moderate(&self) -> bool {
        self.role.can_moderate()
    }
}
