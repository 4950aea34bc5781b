//! Email/password credentials value object.

use std::fmt;

use zeroize::{Zeroize, ZeroizeOnDrop};

/// Credentials submitted from the auth form. The password is wiped on drop.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct Credentials {
    email: String,
    password: String,
}

impl Credentials {
    /// Creates credentials. The email is trimmed; the password is kept verbatim.
    #[must_use]
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into().trim().to_string(),
            password: password.into(),
        }
    }

    /// Returns email.
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Returns password.
    #[must_use]
    pub fn password(&self) -> &str {
        &self.password
    }

    /// Returns email normalized for account lookups.
    #[must_use]
    pub fn normalized_email(&self) -> String {
        self.email.to_lowercase()
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"***")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_masks_password() {
        let creds = Credentials::new("admin@admin.com", "111111");
        let debug = format!("{creds:?}");
        assert!(debug.contains("admin@admin.com"));
        assert!(!debug.contains("111111"));
    }

    #[test]
    fn test_debug_hides_password_length() {
        let short = format!("{:?}", Credentials::new("a@b.co", "123456"));
        let long = format!("{:?}", Credentials::new("a@b.co", "a much longer passphrase"));
        assert_eq!(short, long);
        assert!(short.contains(r#"password: "***""#));
    }

    #[test]
    fn test_email_trimmed() {
        let creds = Credentials::new("  Admin@Admin.com ", "pw");
        assert_eq!(creds.email(), "Admin@Admin.com");
        assert_eq!(creds.normalized_email(), "admin@admin.com");
    }
}
