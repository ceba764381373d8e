use crate::mvi::ViewState;

/// Login form slice state.
#[derive(Clone, PartialEq, Default)]
pub struct LoginFormState {
    pub username: String,
    pub password: String,
    /// True while a submission is in flight; the submit control is disabled.
    pub is_loading: bool,
    /// User-visible message from the last rejected submission.
    pub error: Option<String>,
}

impl ViewState for LoginFormState {}

impl LoginFormState {
    pub fn can_submit(&self) -> bool {
        !self.is_loading
    }
}

impl std::fmt::Debug for LoginFormState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginFormState")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .field("is_loading", &self.is_loading)
            .field("error", &self.error)
            .finish()
    }
}
