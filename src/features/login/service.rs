//! Async login submission.

use thiserror::Error;

use super::intent::LoginIntent;
use crate::api::{AuthClient, AuthError, Credentials};
use crate::features::session::{persist_user, SessionIntent, User};
use crate::storage::PreferenceStorage;
use crate::store::{Store, StoreError};

#[derive(Debug, Error)]
pub enum LoginError {
    /// The call settled as rejected; the slice already carries the message.
    #[error("login rejected: {0}")]
    Rejected(#[from] AuthError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Submit `credentials` and record the outcome in the store.
///
/// Marks the login slice as loading, awaits `client`, then applies exactly
/// one continuation: on success the session slice receives the user (who is
/// also persisted), on failure the login slice receives a user-visible
/// error. There is no retry.
///
/// Overlapping submissions are not sequenced: whichever settles last writes
/// the final loading/error state.
pub async fn login_by_username<C: AuthClient>(
    store: &Store,
    storage: &dyn PreferenceStorage,
    client: &C,
    credentials: Credentials,
) -> Result<User, LoginError> {
    store.dispatch(LoginIntent::Pending)?;

    match client.login(&credentials).await {
        Ok(user) => {
            persist_user(storage, &user);
            store.dispatch(SessionIntent::SetAuthData(user.clone()))?;
            store.dispatch(LoginIntent::Fulfilled)?;
            tracing::info!(username = %user.username, "Login fulfilled");
            Ok(user)
        }
        Err(e) => {
            tracing::warn!(username = %credentials.username, error = %e, "Login rejected");
            store.dispatch(LoginIntent::Rejected {
                message: e.user_message(),
            })?;
            Err(LoginError::Rejected(e))
        }
    }
}
