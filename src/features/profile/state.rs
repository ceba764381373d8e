use serde::{Deserialize, Serialize};

use crate::features::session::User;
use crate::mvi::ViewState;

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Profile {
    pub username: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub avatar: Option<String>,
}

impl From<&User> for Profile {
    fn from(user: &User) -> Self {
        Self {
            username: user.username.clone(),
            avatar: user.avatar.clone(),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProfileState {
    /// Last saved profile.
    pub data: Option<Profile>,
    /// Working copy edited by the form.
    pub form: Option<Profile>,
    pub readonly: bool,
}

impl Default for ProfileState {
    fn default() -> Self {
        Self {
            data: None,
            form: None,
            readonly: true,
        }
    }
}

impl ViewState for ProfileState {}

impl ProfileState {
    /// True when the form differs from the saved profile.
    pub fn is_dirty(&self) -> bool {
        self.form != self.data
    }
}
