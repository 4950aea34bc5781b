//! Login/registration use case implementation.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::application::dto::{AuthMode, AuthRequest};
use crate::domain::entities::User;
use crate::domain::errors::AuthError;
use crate::domain::ports::IdentityPort;

/// Dispatches an auth form submission to the identity provider.
#[derive(Clone)]
pub struct AuthenticateUseCase {
    identity_port: Arc<dyn IdentityPort>,
}

impl AuthenticateUseCase {
    /// Creates new use case.
    #[must_use]
    pub const fn new(identity_port: Arc<dyn IdentityPort>) -> Self {
        Self { identity_port }
    }

    /// Executes login or registration depending on the request mode.
    ///
    /// # Errors
    /// Returns the provider's error unchanged.
    pub async fn execute(&self, request: &AuthRequest) -> Result<User, AuthError> {
        let email = request.credentials.email();
        debug!(mode = %request.mode, email = %email, "Attempting authentication");

        let result = match request.mode {
            AuthMode::Login => self.identity_port.login(&request.credentials).await,
            AuthMode::Register => self.identity_port.register(&request.credentials).await,
        };

        match result {
            Ok(user) => {
                info!(
                    mode = %request.mode,
                    user_id = %user.id(),
                    email = %user.email(),
                    "Successfully authenticated"
                );
                Ok(user)
            }
            Err(e) => {
                warn!(mode = %request.mode, error = %e, "Authentication failed");
                Err(e)
            }
        }
    }

    /// Signs out on the provider side.
    ///
    /// # Errors
    /// Returns the provider's error unchanged.
    pub async fn sign_out(&self) -> Result<(), AuthError> {
        self.identity_port.logout().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::Credentials;
    use crate::domain::ports::MockIdentityPort;
    use mockall::predicate::always;

    fn admin() -> Credentials {
        Credentials::new("admin@admin.com", "111111")
    }

    #[tokio::test]
    async fn test_login_mode_calls_login_once() {
        let mut identity = MockIdentityPort::new();
        identity
            .expect_login()
            .withf(|c| c.email() == "admin@admin.com" && c.password() == "111111")
            .times(1)
            .returning(|c| Ok(User::new("1", c.email(), None)));
        identity.expect_register().never();

        let use_case = AuthenticateUseCase::new(Arc::new(identity));
        let user = use_case.execute(&AuthRequest::login(admin())).await;

        tokio_test::assert_ok!(&user);
        assert_eq!(user.unwrap().email(), "admin@admin.com");
    }

    #[tokio::test]
    async fn test_register_mode_calls_register() {
        let mut identity = MockIdentityPort::new();
        identity.expect_login().never();
        identity
            .expect_register()
            .with(always())
            .times(1)
            .returning(|_| Err(AuthError::EmailAlreadyInUse));

        let use_case = AuthenticateUseCase::new(Arc::new(identity));
        let result = use_case.execute(&AuthRequest::register(admin())).await;

        assert_eq!(result, Err(AuthError::EmailAlreadyInUse));
    }
}
