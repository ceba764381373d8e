use crate::mvi::Intent;

/// Intents that can be dispatched to the login slice.
#[derive(Clone)]
pub enum LoginIntent {
    SetUsername(String),
    SetPassword(String),

    /// Submission started.
    Pending,

    /// Credentials accepted.
    Fulfilled,

    /// Credentials refused or the request failed.
    Rejected {
        /// Message shown inline under the form.
        message: String,
    },
}

impl Intent for LoginIntent {}

// Dispatched actions are traced; keep the password out of the logs.
impl std::fmt::Debug for LoginIntent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::SetUsername(username) => f.debug_tuple("SetUsername").field(username).finish(),
            Self::SetPassword(_) => f.debug_tuple("SetPassword").field(&"[REDACTED]").finish(),
            Self::Pending => f.write_str("Pending"),
            Self::Fulfilled => f.write_str("Fulfilled"),
            Self::Rejected { message } => f
                .debug_struct("Rejected")
                .field("message", message)
                .finish(),
        }
    }
}
