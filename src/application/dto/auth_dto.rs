//! Authentication DTOs.

use crate::domain::entities::Credentials;

/// Which operation the auth form dispatches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AuthMode {
    /// Sign in to an existing account.
    #[default]
    Login,
    /// Create a new account.
    Register,
}

impl AuthMode {
    /// Returns the other mode.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Login => Self::Register,
            Self::Register => Self::Login,
        }
    }

    /// Header spelled out in coloured blocks.
    #[must_use]
    pub const fn header(self) -> &'static str {
        match self {
            Self::Login => "LOGIN",
            Self::Register => "REGISTRO",
        }
    }

    /// Submit button caption.
    #[must_use]
    pub const fn submit_label(self) -> &'static str {
        match self {
            Self::Login => "Iniciar sesión",
            Self::Register => "Registrarse",
        }
    }

    /// Prompt and link text for switching to the other mode.
    #[must_use]
    pub const fn switch_prompt(self) -> (&'static str, &'static str) {
        match self {
            Self::Login => ("¿No tienes cuenta?", "Regístrate!"),
            Self::Register => ("¿Ya tienes una cuenta?", "Inicia sesión!"),
        }
    }
}

impl std::fmt::Display for AuthMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Login => write!(f, "login"),
            Self::Register => write!(f, "register"),
        }
    }
}

/// Auth form submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthRequest {
    /// Operation to perform.
    pub mode: AuthMode,
    /// Submitted credentials.
    pub credentials: Credentials,
}

impl AuthRequest {
    /// Creates new request.
    #[must_use]
    pub fn new(mode: AuthMode, credentials: Credentials) -> Self {
        Self { mode, credentials }
    }

    /// Creates login request.
    #[must_use]
    pub fn login(credentials: Credentials) -> Self {
        Self::new(AuthMode::Login, credentials)
    }

    /// Creates register request.
    #[must_use]
    pub fn register(credentials: Credentials) -> Self {
        Self::new(AuthMode::Register, credentials)
    }
}
