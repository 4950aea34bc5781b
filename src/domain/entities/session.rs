//! In-memory authentication status.

use super::User;

/// Current authentication state of the process.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    user: Option<User>,
}

impl Session {
    /// Creates an anonymous session.
    #[must_use]
    pub const fn anonymous() -> Self {
        Self { user: None }
    }

    /// Creates a session for an authenticated user.
    #[must_use]
    pub const fn authenticated(user: User) -> Self {
        Self { user: Some(user) }
    }

    /// Returns whether a user is signed in.
    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    /// Returns signed-in user.
    #[must_use]
    pub const fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }
}
