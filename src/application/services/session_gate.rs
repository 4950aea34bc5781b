//! Process-wide authentication gate.

use std::sync::Arc;
use std::time::Duration;

use parking_lot::RwLock;
use tracing::{debug, info, warn};

use crate::application::dto::AuthRequest;
use crate::application::use_cases::AuthenticateUseCase;
use crate::domain::entities::{Credentials, Session};
use crate::domain::errors::AuthError;
use crate::domain::ports::IdentityPort;

/// Default pause before a logout clears the session.
pub const DEFAULT_LOGOUT_DELAY: Duration = Duration::from_secs(2);

/// Holds the session and drives its transitions.
///
/// Cheap to clone; clones share the same session. Starts anonymous.
#[derive(Clone)]
pub struct SessionGate {
    authenticate: AuthenticateUseCase,
    session: Arc<RwLock<Session>>,
    logout_delay: Duration,
}

impl SessionGate {
    #[must_use]
    pub fn new(identity_port: Arc<dyn IdentityPort>) -> Self {
        Self {
            authenticate: AuthenticateUseCase::new(identity_port),
            session: Arc::new(RwLock::new(Session::anonymous())),
            logout_delay: DEFAULT_LOGOUT_DELAY,
        }
    }

    /// Sets the pause applied by [`Self::logout`]. `Duration::ZERO` disables it.
    #[must_use]
    pub const fn with_logout_delay(mut self, delay: Duration) -> Self {
        self.logout_delay = delay;
        self
    }

    #[must_use]
    pub const fn logout_delay(&self) -> Duration {
        self.logout_delay
    }

    /// Snapshot of the current session.
    #[must_use]
    pub fn session(&self) -> Session {
        self.session.read().clone()
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.session.read().is_authenticated()
    }

    /// Signs in. On success the shared session becomes authenticated.
    ///
    /// # Errors
    /// Returns `InvalidCredentials`, `NetworkFailure` or `Unknown` from the provider.
    pub async fn login(&self, credentials: Credentials) -> Result<Session, AuthError> {
        self.submit(AuthRequest::login(credentials)).await
    }

    /// Creates an account. On success the shared session becomes authenticated.
    ///
    /// # Errors
    /// As [`Self::login`], plus `EmailAlreadyInUse`.
    pub async fn register(&self, credentials: Credentials) -> Result<Session, AuthError> {
        self.submit(AuthRequest::register(credentials)).await
    }

    /// Runs a form submission in whichever mode it carries.
    ///
    /// # Errors
    /// Returns the provider's error; the session is left untouched.
    pub async fn submit(&self, request: AuthRequest) -> Result<Session, AuthError> {
        let user = self.authenticate.execute(&request).await?;
        let session = Session::authenticated(user);
        *self.session.write() = session.clone();
        Ok(session)
    }

    /// Waits the logout delay, signs out on the provider and clears the session.
    /// Never fails; provider errors are logged.
    pub async fn logout(&self) {
        if !self.logout_delay.is_zero() {
            debug!(delay_ms = self.logout_delay.as_millis(), "Delaying logout");
            tokio::time::sleep(self.logout_delay).await;
        }

        if let Err(e) = self.authenticate.sign_out().await {
            warn!(error = %e, "Provider sign-out failed, clearing session anyway");
        }

        *self.session.write() = Session::anonymous();
        info!("Session cleared");
    }
}
