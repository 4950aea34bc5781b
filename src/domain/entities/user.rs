//! Authenticated user entity.

use serde::{Deserialize, Serialize};

/// User returned by the identity provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    id: String,
    email: String,
    display_name: Option<String>,
}

impl User {
    /// Creates new user.
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        email: impl Into<String>,
        display_name: Option<String>,
    ) -> Self {
        Self {
            id: id.into(),
            email: email.into(),
            display_name,
        }
    }

    /// Returns provider-assigned id.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns email address.
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Returns display name, falling back to the email's local part.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.display_name
            .as_deref()
            .filter(|name| !name.trim().is_empty())
            .unwrap_or_else(|| self.email.split('@').next().unwrap_or(&self.email))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_name_fallback() {
        let user = User::new("1", "tester@tester.com", None);
        assert_eq!(user.display_name(), "tester");

        let named = User::new("1", "tester@tester.com", Some("Tester".to_string()));
        assert_eq!(named.display_name(), "Tester");
    }
}
