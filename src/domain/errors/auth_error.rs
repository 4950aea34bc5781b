//! Authentication error types.

use thiserror::Error;

/// Shown for anything the mapping below does not recognize.
pub const GENERIC_AUTH_MESSAGE: &str = "Ocurrió un error inesperado. Inténtalo de nuevo.";

/// Authentication error variants.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[allow(missing_docs)]
pub enum AuthError {
    #[error("invalid email or password")]
    InvalidCredentials,

    #[error("email already registered")]
    EmailAlreadyInUse,

    #[error("network error during authentication: {message}")]
    NetworkFailure { message: String },

    #[error("unexpected authentication error: {message}")]
    Unknown { message: String },
}

impl AuthError {
    /// Creates network error.
    #[must_use]
    pub fn network(message: impl Into<String>) -> Self {
        Self::NetworkFailure {
            message: message.into(),
        }
    }

    /// Creates unknown error.
    #[must_use]
    pub fn unknown(message: impl Into<String>) -> Self {
        Self::Unknown {
            message: message.into(),
        }
    }

    /// Returns the fixed message shown to the user in a toast.
    #[must_use]
    pub const fn user_message(&self) -> &'static str {
        match self {
            Self::InvalidCredentials => "Correo electrónico o contraseña incorrectos.",
            Self::EmailAlreadyInUse => "El correo electrónico ya está en uso.",
            Self::NetworkFailure { .. } => "Error de conexión. Revisa tu red e inténtalo de nuevo.",
            Self::Unknown { .. } => GENERIC_AUTH_MESSAGE,
        }
    }

    /// Returns whether error is network related.
    #[must_use]
    pub const fn is_network_error(&self) -> bool {
        matches!(self, Self::NetworkFailure { .. })
    }
}
