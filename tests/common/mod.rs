//! Shared test utilities and stub collaborators.

#![allow(dead_code, unused_imports)]

pub mod mock_auth;

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use articlehub::api::{AuthClient, AuthError, Credentials};
use articlehub::features::session::{SessionState, User};
use articlehub::storage::{MemoryStorage, PreferenceStorage};

pub const CORRECT_PASSWORD: &str = "correct";

pub fn alice() -> User {
    User {
        id: "1".to_string(),
        username: "alice".to_string(),
        avatar: None,
    }
}

pub fn anonymous_session() -> SessionState {
    SessionState {
        auth_data: None,
        inited: true,
    }
}

pub fn alice_session() -> SessionState {
    SessionState {
        auth_data: Some(alice()),
        inited: true,
    }
}

pub fn memory_storage() -> Arc<dyn PreferenceStorage> {
    Arc::new(MemoryStorage::new())
}

/// Auth client that fulfils only for [`CORRECT_PASSWORD`].
#[derive(Default)]
pub struct StubAuthClient {
    calls: AtomicUsize,
}

impl StubAuthClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl AuthClient for StubAuthClient {
    async fn login(&self, credentials: &Credentials) -> Result<User, AuthError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if credentials.password == CORRECT_PASSWORD {
            Ok(User {
                id: "1".to_string(),
                username: credentials.username.clone(),
                avatar: None,
            })
        } else {
            Err(AuthError::InvalidCredentials)
        }
    }
}

/// Auth client whose calls fail at the transport level.
pub struct UnreachableAuthClient;

impl AuthClient for UnreachableAuthClient {
    async fn login(&self, _credentials: &Credentials) -> Result<User, AuthError> {
        Err(AuthError::Other("connection refused".to_string()))
    }
}
