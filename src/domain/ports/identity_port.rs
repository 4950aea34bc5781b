//! Identity provider port definition.

use async_trait::async_trait;

use crate::domain::entities::{Credentials, User};
use crate::domain::errors::AuthError;

/// Port for the external identity provider.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait IdentityPort: Send + Sync {
    /// Signs in an existing account.
    async fn login(&self, credentials: &Credentials) -> Result<User, AuthError>;

    /// Creates an account and signs it in.
    async fn register(&self, credentials: &Credentials) -> Result<User, AuthError>;

    /// Signs out on the provider side.
    async fn logout(&self) -> Result<(), AuthError> {
        Ok(())
    }
}
