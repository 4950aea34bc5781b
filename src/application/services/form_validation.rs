//! Auth form field rules.

use std::sync::OnceLock;

use regex::Regex;

use crate::domain::errors::ValidationError;

/// Minimum accepted password length, in characters.
pub const MIN_PASSWORD_LEN: usize = 6;

/// Validates an email address: required, `local@domain.tld` shape.
///
/// # Errors
/// Returns `Required` for blank input and `Format` for anything else that does not match.
///
/// # Panics
///
/// Panics if the internal regex is invalid.
pub fn validate_email(value: &str) -> Result<(), ValidationError> {
    static RE: OnceLock<Regex> = OnceLock::new();
    let re = RE.get_or_init(|| {
        Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("Invalid regex")
    });

    let value = value.trim();
    if value.is_empty() {
        return Err(ValidationError::Required);
    }
    if !re.is_match(value) {
        return Err(ValidationError::Format);
    }
    Ok(())
}

/// Validates a password: required, at least [`MIN_PASSWORD_LEN`] characters.
///
/// # Errors
/// Returns `Required` for empty input and `TooShort` below the minimum.
pub fn validate_password(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(ValidationError::Required);
    }
    if value.chars().count() < MIN_PASSWORD_LEN {
        return Err(ValidationError::TooShort {
            min: MIN_PASSWORD_LEN,
        });
    }
    Ok(())
}

/// Inline message for an email error.
#[must_use]
pub const fn email_message(error: ValidationError) -> &'static str {
    match error {
        ValidationError::Required => "El correo electrónico es obligatorio",
        ValidationError::Format | ValidationError::TooShort { .. } => {
            "Correo electrónico inválido"
        }
    }
}

/// Inline message for a password error.
#[must_use]
pub const fn password_message(error: ValidationError) -> &'static str {
    match error {
        ValidationError::Required => "La contraseña es obligatoria",
        ValidationError::Format | ValidationError::TooShort { .. } => {
            "La contraseña debe tener al menos 6 dígitos"
        }
    }
}

/// Validation result for the whole form.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FieldErrors {
    /// Email error, if any.
    pub email: Option<ValidationError>,
    /// Password error, if any.
    pub password: Option<ValidationError>,
}

impl FieldErrors {
    /// Validates both fields.
    #[must_use]
    pub fn check(email: &str, password: &str) -> Self {
        Self {
            email: validate_email(email).err(),
            password: validate_password(password).err(),
        }
    }

    /// Returns whether both fields passed.
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.email.is_none() && self.password.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("admin@admin.com" ; "simple")]
    #[test_case("  padded@example.org " ; "surrounding whitespace")]
    #[test_case("first.last+tag@sub.domain.es" ; "dots and plus")]
    fn test_valid_emails(input: &str) {
        assert_eq!(validate_email(input), Ok(()));
    }

    #[test_case("", ValidationError::Required ; "empty")]
    #[test_case("   ", ValidationError::Required ; "blank")]
    #[test_case("bad-email", ValidationError::Format ; "no at sign")]
    #[test_case("a@b", ValidationError::Format ; "no tld")]
    #[test_case("a b@c.com", ValidationError::Format ; "inner space")]
    fn test_invalid_emails(input: &str, expected: ValidationError) {
        assert_eq!(validate_email(input), Err(expected));
    }

    #[test_case("", Err(ValidationError::Required) ; "empty")]
    #[test_case("123", Err(ValidationError::TooShort { min: 6 }) ; "short")]
    #[test_case("12345", Err(ValidationError::TooShort { min: 6 }) ; "one below")]
    #[test_case("123456", Ok(()) ; "exact minimum")]
    #[test_case("ñandú!", Ok(()) ; "counts characters not bytes")]
    fn test_passwords(input: &str, expected: Result<(), ValidationError>) {
        assert_eq!(validate_password(input), expected);
    }

    #[test]
    fn test_bad_email_and_short_password() {
        let errors = FieldErrors::check("bad-email", "123");
        assert_eq!(errors.email, Some(ValidationError::Format));
        assert_eq!(errors.password, Some(ValidationError::TooShort { min: 6 }));
        assert!(!errors.is_valid());
    }

    #[test]
    fn test_demo_accounts_pass_validation() {
        for account in crate::domain::entities::DEMO_ACCOUNTS {
            assert!(FieldErrors::check(account.email, account.password).is_valid(), "{}", account.name);
        }
    }

    #[test]
    fn test_messages() {
        assert_eq!(
            email_message(ValidationError::Format),
            "Correo electrónico inválido"
        );
        assert_eq!(
            password_message(ValidationError::Required),
            "La contraseña es obligatoria"
        );
    }
}
