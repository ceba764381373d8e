//! Reducer registry: the mutable mapping from slice key to reducer.

use std::collections::BTreeMap;
use std::sync::Arc;

use super::root::RootState;
use super::slice::{Action, SliceKey, SliceReducer};
use super::StoreError;

/// What happens to a slice when its owner releases it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RetainPolicy {
    /// Unregister the reducer and drop the slice state.
    #[default]
    RemoveOnRelease,
    /// Keep reducer and state alive until explicit teardown or reset.
    Retain,
}

struct Registration {
    reducer: Arc<dyn SliceReducer>,
    policy: RetainPolicy,
}

/// At most one reducer per key; registering under an existing key replaces
/// the previous reducer (last writer wins).
#[derive(Default)]
pub struct ReducerRegistry {
    entries: BTreeMap<SliceKey, Registration>,
}

impl ReducerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach `reducer` under its key. Returns `true` if a reducer was replaced.
    pub fn register(&mut self, reducer: Arc<dyn SliceReducer>, policy: RetainPolicy) -> bool {
        let key = reducer.key();
        self.entries
            .insert(key, Registration { reducer, policy })
            .is_some()
    }

    /// Detach the reducer under `key` unless it was registered with
    /// [`RetainPolicy::Retain`]. Returns `true` if the mapping changed.
    pub fn unregister(&mut self, key: SliceKey) -> bool {
        match self.entries.get(&key) {
            Some(entry) if entry.policy == RetainPolicy::Retain => false,
            Some(_) => self.entries.remove(&key).is_some(),
            None => false,
        }
    }

    /// Detach the reducer under `key` regardless of its policy.
    pub fn remove(&mut self, key: SliceKey) -> bool {
        self.entries.remove(&key).is_some()
    }

    pub fn contains(&self, key: SliceKey) -> bool {
        self.entries.contains_key(&key)
    }

    pub fn policy(&self, key: SliceKey) -> Option<RetainPolicy> {
        self.entries.get(&key).map(|entry| entry.policy)
    }

    pub fn keys(&self) -> Vec<SliceKey> {
        self.entries.keys().copied().collect()
    }

    /// Combined reducer: fold `action` over every registered slice.
    ///
    /// Each reducer sees only its own slice. A reducer that leaves a state
    /// of another slice behind is reported as [`StoreError::MalformedSlice`]
    /// and the input state is not modified.
    pub fn combine(&self, state: &RootState, action: &Action) -> Result<RootState, StoreError> {
        let mut next = state.clone();
        for (&key, entry) in &self.entries {
            let current = match next.remove(key) {
                Some(current) => current,
                None => entry.reducer.initial(),
            };
            let reduced = entry.reducer.reduce(current, action);
            let produced = reduced.key();
            if produced != key {
                return Err(StoreError::MalformedSlice { key, produced });
            }
            next.insert(key, reduced);
        }
        Ok(next)
    }
}
