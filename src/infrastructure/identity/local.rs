//! In-process identity provider.

use std::collections::HashMap;
use std::path::PathBuf;

use async_trait::async_trait;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use tracing::{debug, error, info};

use crate::domain::entities::{Credentials, DEMO_ACCOUNTS, User};
use crate::domain::errors::AuthError;
use crate::domain::ports::IdentityPort;
use crate::infrastructure::config::storage::save_to_file;

#[derive(Debug, Clone, Serialize, Deserialize)]
struct StoredAccount {
    id: String,
    email: String,
    #[serde(default)]
    display_name: Option<String>,
    password_sha256: String,
}

impl StoredAccount {
    fn new(credentials: &Credentials, display_name: Option<String>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            email: credentials.normalized_email(),
            display_name,
            password_sha256: password_digest(credentials),
        }
    }

    fn to_user(&self) -> User {
        User::new(&self.id, &self.email, self.display_name.clone())
    }
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct AccountsFile {
    #[serde(default)]
    accounts: Vec<StoredAccount>,
}

fn password_digest(credentials: &Credentials) -> String {
    let mut hasher = Sha256::new();
    hasher.update(credentials.normalized_email().as_bytes());
    hasher.update(b":");
    hasher.update(credentials.password().as_bytes());
    hex::encode(hasher.finalize())
}

/// Account registry living in the process, seeded with the demo accounts.
///
/// Registered accounts are written to the accounts file when one is set.
pub struct LocalIdentityProvider {
    accounts: RwLock<HashMap<String, StoredAccount>>,
    store_path: Option<PathBuf>,
}

impl LocalIdentityProvider {
    /// Creates a provider holding only the demo accounts.
    #[must_use]
    pub fn new() -> Self {
        let accounts = DEMO_ACCOUNTS
            .iter()
            .map(|demo| {
                let account =
                    StoredAccount::new(&demo.credentials(), Some(demo.name.to_string()));
                (account.email.clone(), account)
            })
            .collect();

        Self {
            accounts: RwLock::new(accounts),
            store_path: None,
        }
    }

    /// Creates a provider that also loads and persists accounts at `path`.
    ///
    /// # Errors
    /// Returns `Unknown` if an existing file cannot be read or parsed.
    pub fn with_store(path: impl Into<PathBuf>) -> Result<Self, AuthError> {
        let path = path.into();
        let mut provider = Self::new();

        if path.exists() {
            let content = std::fs::read_to_string(&path)
                .map_err(|e| AuthError::unknown(format!("failed to read accounts: {e}")))?;
            let file: AccountsFile = toml::from_str(&content)
                .map_err(|e| AuthError::unknown(format!("failed to parse accounts: {e}")))?;

            debug!(count = file.accounts.len(), path = %path.display(), "Loaded stored accounts");
            let mut accounts = provider.accounts.write();
            for account in file.accounts {
                accounts.insert(account.email.clone(), account);
            }
        }

        provider.store_path = Some(path);
        Ok(provider)
    }

    /// Number of known accounts.
    #[must_use]
    pub fn account_count(&self) -> usize {
        self.accounts.read().len()
    }

    fn persist(&self) {
        let Some(ref path) = self.store_path else {
            return;
        };

        let seeded: Vec<String> = DEMO_ACCOUNTS
            .iter()
            .map(|demo| demo.email.to_lowercase())
            .collect();
        let file = AccountsFile {
            accounts: self
                .accounts
                .read()
                .values()
                .filter(|account| !seeded.contains(&account.email))
                .cloned()
                .collect(),
        };

        if let Err(e) = save_to_file(path, &file) {
            error!(error = %e, path = %path.display(), "Failed to persist accounts");
        }
    }
}

impl Default for LocalIdentityProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl IdentityPort for LocalIdentityProvider {
    async fn login(&self, credentials: &Credentials) -> Result<User, AuthError> {
        let accounts = self.accounts.read();
        let account = accounts
            .get(&credentials.normalized_email())
            .ok_or(AuthError::InvalidCredentials)?;

        if account.password_sha256 != password_digest(credentials) {
            debug!(email = %account.email, "Password mismatch");
            return Err(AuthError::InvalidCredentials);
        }

        Ok(account.to_user())
    }

    async fn register(&self, credentials: &Credentials) -> Result<User, AuthError> {
        let user = {
            let mut accounts = self.accounts.write();
            let email = credentials.normalized_email();
            if accounts.contains_key(&email) {
                return Err(AuthError::EmailAlreadyInUse);
            }

            let account = StoredAccount::new(credentials, None);
            let user = account.to_user();
            accounts.insert(email, account);
            user
        };

        info!(email = %user.email(), "Registered local account");
        self.persist();
        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_demo_account_login() {
        let provider = LocalIdentityProvider::new();

        let user = provider
            .login(&Credentials::new("Admin@Admin.com", "111111"))
            .await
            .unwrap();

        assert_eq!(user.email(), "admin@admin.com");
        assert_eq!(user.display_name(), "Admin");
    }

    #[tokio::test]
    async fn test_wrong_password_and_unknown_email() {
        let provider = LocalIdentityProvider::new();

        let wrong = provider
            .login(&Credentials::new("admin@admin.com", "222222"))
            .await;
        let unknown = provider
            .login(&Credentials::new("nobody@nowhere.com", "111111"))
            .await;

        assert_eq!(wrong, Err(AuthError::InvalidCredentials));
        assert_eq!(unknown, Err(AuthError::InvalidCredentials));
    }

    #[tokio::test]
    async fn test_register_then_login() {
        let provider = LocalIdentityProvider::new();
        let creds = Credentials::new("nuevo@escuela.com", "secreto");

        let registered = provider.register(&creds).await.unwrap();
        let logged_in = provider.login(&creds).await.unwrap();

        assert_eq!(registered.id(), logged_in.id());
    }

    #[tokio::test]
    async fn test_register_existing_email() {
        let provider = LocalIdentityProvider::new();

        let result = provider
            .register(&Credentials::new("tester@tester.com", "whatever"))
            .await;

        assert_eq!(result, Err(AuthError::EmailAlreadyInUse));
    }

    #[tokio::test]
    async fn test_registrations_survive_reload() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("accounts.toml");

        let provider = LocalIdentityProvider::with_store(&path).unwrap();
        provider
            .register(&Credentials::new("maestra@escuela.com", "pizarra"))
            .await
            .unwrap();
        assert!(path.exists());

        let reloaded = LocalIdentityProvider::with_store(&path).unwrap();
        assert_eq!(reloaded.account_count(), DEMO_ACCOUNTS.len() + 1);
        assert!(
            reloaded
                .login(&Credentials::new("maestra@escuela.com", "pizarra"))
                .await
                .is_ok()
        );

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(!content.contains("pizarra"));
        assert!(!content.contains("admin@admin.com"));
    }
}
