use serde::{Deserialize, Serialize};

use crate::mvi::ViewState;

/// Authenticated user as returned by the auth endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub username: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

/// Session slice state.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SessionState {
    pub auth_data: Option<User>,
    /// Set once the persisted session has been read at boot. Until then the
    /// guard cannot decide and navigation stays in the checking state.
    pub inited: bool,
}

impl ViewState for SessionState {}

impl SessionState {
    pub fn is_authenticated(&self) -> bool {
        self.auth_data.is_some()
    }

    pub fn user(&self) -> Option<&User> {
        self.auth_data.as_ref()
    }
}
