//! Persisting the logged-in user across restarts.

use super::intent::SessionIntent;
use super::state::User;
use crate::storage::PreferenceStorage;
use crate::store::{Store, StoreError};

/// Storage key holding the JSON-encoded [`User`].
pub const USER_STORAGE_KEY: &str = "user";

/// Read the persisted user and initialise the session slice.
///
/// Unreadable or corrupt entries are logged and treated as "no session";
/// the slice is marked inited either way so guarded routes can resolve.
pub fn restore_session(
    store: &Store,
    storage: &dyn PreferenceStorage,
) -> Result<Option<User>, StoreError> {
    let user = match storage.read(USER_STORAGE_KEY) {
        Ok(Some(raw)) => match serde_json::from_str::<User>(&raw) {
            Ok(user) => Some(user),
            Err(e) => {
                tracing::warn!(error = %e, "Discarding corrupt persisted session");
                None
            }
        },
        Ok(None) => None,
        Err(e) => {
            tracing::warn!(error = %e, "Failed to read persisted session");
            None
        }
    };

    tracing::info!(
        authenticated = user.is_some(),
        "Session restored"
    );
    store.dispatch(SessionIntent::InitAuthData(user.clone()))?;
    Ok(user)
}

/// Persist `user` so the next boot restores the session.
pub fn persist_user(storage: &dyn PreferenceStorage, user: &User) {
    let raw = match serde_json::to_string(user) {
        Ok(raw) => raw,
        Err(e) => {
            tracing::warn!(error = %e, "Failed to encode session");
            return;
        }
    };
    if let Err(e) = storage.write(USER_STORAGE_KEY, &raw) {
        tracing::warn!(error = %e, "Failed to persist session");
    }
}

pub fn clear_user(storage: &dyn PreferenceStorage) {
    if let Err(e) = storage.remove(USER_STORAGE_KEY) {
        tracing::warn!(error = %e, "Failed to clear persisted session");
    }
}
