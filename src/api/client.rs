//! Authentication client.

use std::future::Future;
use std::time::Duration;

use reqwest::StatusCode;
use serde::Serialize;
use thiserror::Error;

use crate::config::ApiConfig;
use crate::features::session::User;

/// Message shown when the server refuses the credentials.
const INVALID_CREDENTIALS_MESSAGE: &str = "Incorrect username or password";

/// Username/password pair submitted by the login form.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

/// Errors a login attempt can settle with.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("invalid credentials")]
    InvalidCredentials,

    #[error("unexpected status {status}")]
    UnexpectedStatus { status: u16 },

    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("{0}")]
    Other(String),
}

impl AuthError {
    /// Text for the inline error under the login form.
    pub fn user_message(&self) -> String {
        match self {
            Self::InvalidCredentials => INVALID_CREDENTIALS_MESSAGE.to_string(),
            other => format!("Login failed: {other}"),
        }
    }
}

/// Performs the login call. Settles exactly once, fulfilled or rejected.
pub trait AuthClient: Send + Sync {
    fn login(
        &self,
        credentials: &Credentials,
    ) -> impl Future<Output = Result<User, AuthError>> + Send;
}

/// Auth client talking to `POST <base_url>/login`.
#[derive(Clone)]
pub struct HttpAuthClient {
    client: reqwest::Client,
    login_url: String,
}

impl HttpAuthClient {
    pub fn new(config: &ApiConfig) -> Result<Self, AuthError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds as u64))
            .build()?;
        Ok(Self {
            client,
            login_url: format!("{}/login", config.base_url.trim_end_matches('/')),
        })
    }

    pub fn login_url(&self) -> &str {
        &self.login_url
    }
}

impl AuthClient for HttpAuthClient {
    async fn login(&self, credentials: &Credentials) -> Result<User, AuthError> {
        tracing::debug!(url = %self.login_url, username = %credentials.username, "Login request");
        let response = self
            .client
            .post(&self.login_url)
            .json(credentials)
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            return Ok(response.json::<User>().await?);
        }
        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return Err(AuthError::InvalidCredentials);
        }
        Err(AuthError::UnexpectedStatus {
            status: status.as_u16(),
        })
    }
}
