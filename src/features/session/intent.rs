use super::state::User;
use crate::mvi::Intent;

#[derive(Debug, Clone)]
pub enum SessionIntent {
    /// Boot-time restore finished; `None` when no session was persisted.
    InitAuthData(Option<User>),
    /// Login succeeded.
    SetAuthData(User),
    Logout,
}

impl Intent for SessionIntent {}
