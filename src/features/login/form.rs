//! Login form controller.

use super::intent::LoginIntent;
use super::reducer::LoginReducer;
use super::service::{login_by_username, LoginError};
use super::state::LoginFormState;
use crate::api::{AuthClient, Credentials};
use crate::features::session::User;
use crate::storage::PreferenceStorage;
use crate::store::{slice, ScopedSlices, Store, StoreError};

/// How a submit click settled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Fulfilled(User),
    /// Error message is in the slice.
    Rejected,
    /// A submission is already in flight; the submit control is disabled.
    Busy,
}

/// Controller for the login form.
///
/// The `login` slice is acquired with `remove_after_unmount = false`, so
/// typed fields survive closing and reopening the form within a session.
pub struct LoginForm {
    store: Store,
    slices: ScopedSlices,
}

impl LoginForm {
    pub fn open(store: &Store) -> Self {
        let slices = ScopedSlices::acquire(store, [slice::<LoginReducer>()], false);
        Self {
            store: store.clone(),
            slices,
        }
    }

    pub fn state(&self) -> LoginFormState {
        self.store.state().login().cloned().unwrap_or_default()
    }

    pub fn set_username(&self, username: impl Into<String>) -> Result<(), StoreError> {
        self.store.dispatch(LoginIntent::SetUsername(username.into()))
    }

    pub fn set_password(&self, password: impl Into<String>) -> Result<(), StoreError> {
        self.store.dispatch(LoginIntent::SetPassword(password.into()))
    }

    /// Submit the current fields.
    ///
    /// `on_success` runs once when the login is fulfilled and never on
    /// rejection.
    pub async fn submit<C, F>(
        &self,
        client: &C,
        storage: &dyn PreferenceStorage,
        on_success: F,
    ) -> Result<SubmitOutcome, StoreError>
    where
        C: AuthClient,
        F: FnOnce(&User),
    {
        let state = self.state();
        if !state.can_submit() {
            return Ok(SubmitOutcome::Busy);
        }

        let credentials = Credentials::new(state.username, state.password);
        match login_by_username(&self.store, storage, client, credentials).await {
            Ok(user) => {
                on_success(&user);
                Ok(SubmitOutcome::Fulfilled(user))
            }
            Err(LoginError::Rejected(_)) => Ok(SubmitOutcome::Rejected),
            Err(LoginError::Store(e)) => Err(e),
        }
    }

    /// Close the form. The slice stays live.
    pub fn close(self) {
        self.slices.release();
    }
}
