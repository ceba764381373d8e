//! Root state: the combination of every registered slice.

use std::collections::BTreeMap;

use super::slice::{SliceKey, SliceState};
use crate::features::login::LoginFormState;
use crate::features::profile::ProfileState;
use crate::features::session::SessionState;

/// Snapshot of all live slices.
///
/// Slices that are not registered are simply absent; there are no
/// placeholder values.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RootState {
    slices: BTreeMap<SliceKey, SliceState>,
}

impl RootState {
    pub fn get(&self, key: SliceKey) -> Option<&SliceState> {
        self.slices.get(&key)
    }

    pub fn contains(&self, key: SliceKey) -> bool {
        self.slices.contains_key(&key)
    }

    /// Keys of the slices present, in key order.
    pub fn keys(&self) -> Vec<SliceKey> {
        self.slices.keys().copied().collect()
    }

    pub fn session(&self) -> Option<&SessionState> {
        match self.slices.get(&SliceKey::User) {
            Some(SliceState::User(state)) => Some(state),
            _ => None,
        }
    }

    pub fn login(&self) -> Option<&LoginFormState> {
        match self.slices.get(&SliceKey::Login) {
            Some(SliceState::Login(state)) => Some(state),
            _ => None,
        }
    }

    pub fn profile(&self) -> Option<&ProfileState> {
        match self.slices.get(&SliceKey::Profile) {
            Some(SliceState::Profile(state)) => Some(state),
            _ => None,
        }
    }

    pub(crate) fn insert(&mut self, key: SliceKey, state: SliceState) {
        self.slices.insert(key, state);
    }

    pub(crate) fn remove(&mut self, key: SliceKey) -> Option<SliceState> {
        self.slices.remove(&key)
    }
}
