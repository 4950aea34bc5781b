//! REST identity provider client.

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, StatusCode};
use tracing::{debug, warn};

use super::dto::{AccountResponse, ErrorEnvelope, PasswordRequest};
use crate::domain::entities::{Credentials, User};
use crate::domain::errors::AuthError;
use crate::domain::ports::IdentityPort;

const DEFAULT_ENDPOINT: &str = "https://identitytoolkit.googleapis.com/v1";
const SIGN_IN_PATH: &str = "accounts:signInWithPassword";
const SIGN_UP_PATH: &str = "accounts:signUp";
const API_KEY_HEADER: &str = "x-goog-api-key";

/// Client for an Identity-Toolkit-compatible email/password service.
pub struct RestIdentityClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl RestIdentityClient {
    /// Creates new client against the default endpoint.
    ///
    /// # Errors
    /// Returns error if HTTP client creation fails.
    pub fn new(api_key: impl Into<String>) -> Result<Self, AuthError> {
        Self::with_base_url(DEFAULT_ENDPOINT, api_key)
    }

    /// Creates client with custom base URL.
    ///
    /// # Errors
    /// Returns error if HTTP client creation fails.
    pub fn with_base_url(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Result<Self, AuthError> {
        let client = Client::builder()
            .user_agent(concat!("lingotiles/", env!("CARGO_PKG_VERSION")))
            .timeout(std::time::Duration::from_secs(15))
            .build()
            .map_err(|e| AuthError::unknown(format!("failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{path}", self.base_url)
    }

    /// Keeps the API key out of the URL.
    fn request(&self, path: &str) -> RequestBuilder {
        self.client
            .post(self.url(path))
            .header(API_KEY_HEADER, &self.api_key)
    }

    async fn password_call(&self, path: &str, credentials: &Credentials) -> Result<User, AuthError> {
        let body = PasswordRequest {
            email: credentials.email(),
            password: credentials.password(),
            return_secure_token: true,
        };

        debug!(endpoint = %path, "Calling identity provider");

        let response = self
            .request(path)
            .json(&body)
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(Self::handle_error_response(status, response).await);
        }

        let account: AccountResponse = response.json().await.map_err(|e| {
            let e = e.without_url();
            warn!(error = %e, "Failed to parse account response");
            AuthError::unknown(format!("failed to parse response: {e}"))
        })?;

        Ok(User::new(account.local_id, account.email, account.display_name))
    }

    async fn handle_error_response(status: StatusCode, response: reqwest::Response) -> AuthError {
        let body = response.text().await.unwrap_or_default();

        match serde_json::from_str::<ErrorEnvelope>(&body) {
            Ok(envelope) => {
                debug!(code = envelope.error.code, message = %envelope.error.message, "Provider rejected request");
                map_provider_error(&envelope.error.message)
            }
            Err(_) => match status {
                StatusCode::SERVICE_UNAVAILABLE
                | StatusCode::GATEWAY_TIMEOUT
                | StatusCode::BAD_GATEWAY => {
                    AuthError::network("identity provider is temporarily unavailable")
                }
                _ => AuthError::unknown(format!("unexpected response: {status}")),
            },
        }
    }
}

fn transport_error(e: reqwest::Error) -> AuthError {
    let e = e.without_url();
    warn!(error = %e, "Failed to reach identity provider");

    if e.is_timeout() {
        AuthError::network("request timed out")
    } else if e.is_connect() {
        AuthError::network("failed to connect to identity provider")
    } else {
        AuthError::network(e.to_string())
    }
}

/// Maps a provider error code onto the auth taxonomy. Codes may carry a
/// ` : detail` suffix, which is ignored.
fn map_provider_error(message: &str) -> AuthError {
    let code = message.split(':').next().unwrap_or(message).trim();

    match code {
        "EMAIL_NOT_FOUND"
        | "INVALID_PASSWORD"
        | "INVALID_LOGIN_CREDENTIALS"
        | "INVALID_EMAIL"
        | "USER_DISABLED" => AuthError::InvalidCredentials,
        "EMAIL_EXISTS" => AuthError::EmailAlreadyInUse,
        "TOO_MANY_ATTEMPTS_TRY_LATER" => AuthError::network("too many attempts, try later"),
        other => AuthError::unknown(other.to_string()),
    }
}

#[async_trait]
impl IdentityPort for RestIdentityClient {
    async fn login(&self, credentials: &Credentials) -> Result<User, AuthError> {
        self.password_call(SIGN_IN_PATH, credentials).await
    }

    async fn register(&self, credentials: &Credentials) -> Result<User, AuthError> {
        self.password_call(SIGN_UP_PATH, credentials).await
    }
}
