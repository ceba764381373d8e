//! Centralized state store with lazily injected feature slices.
//!
//! The store owns the [`ReducerRegistry`] and the current [`RootState`].
//! Always-on slices are seeded at construction; feature slices are attached
//! and detached at runtime, usually through [`ScopedSlices`].

mod loader;
mod registry;
mod root;
mod slice;

pub use loader::ScopedSlices;
pub use registry::{ReducerRegistry, RetainPolicy};
pub use root::RootState;
pub use slice::{slice, Action, FeatureSlice, SliceKey, SliceReducer, SliceState};

use std::sync::Arc;

use parking_lot::Mutex;
use thiserror::Error;
use tokio::sync::watch;

/// Errors surfaced by the store.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// A reducer produced state for a different slice than the one it owns.
    #[error("reducer for slice '{key}' produced state for slice '{produced}'")]
    MalformedSlice { key: SliceKey, produced: SliceKey },
}

/// Shared handle to the application store.
///
/// Cloning is cheap; every clone talks to the same state. All mutations are
/// serialized behind one lock, so dispatches apply atomically and in order.
#[derive(Clone)]
pub struct Store {
    inner: Arc<Mutex<StoreInner>>,
}

struct StoreInner {
    registry: ReducerRegistry,
    state: Arc<RootState>,
    /// Always-on reducers, re-seeded on [`Store::reset`].
    seed: Vec<Arc<dyn SliceReducer>>,
    updates: watch::Sender<Arc<RootState>>,
}

impl StoreInner {
    fn publish(&mut self, state: RootState) {
        let state = Arc::new(state);
        self.state = Arc::clone(&state);
        self.updates.send_replace(state);
    }
}

impl Store {
    /// Create a store seeded with the given always-on slices.
    pub fn new(always_on: Vec<Arc<dyn SliceReducer>>) -> Self {
        let (registry, state) = seeded(&always_on);
        let state = Arc::new(state);
        let (updates, _) = watch::channel(Arc::clone(&state));
        Self {
            inner: Arc::new(Mutex::new(StoreInner {
                registry,
                state,
                seed: always_on,
                updates,
            })),
        }
    }

    /// Current root state.
    pub fn state(&self) -> Arc<RootState> {
        Arc::clone(&self.inner.lock().state)
    }

    /// Subscribe to root state changes.
    ///
    /// Every successful dispatch and every change of the slice mapping
    /// publishes a new snapshot. Dropping the receiver unsubscribes.
    pub fn subscribe(&self) -> watch::Receiver<Arc<RootState>> {
        self.inner.lock().updates.subscribe()
    }

    /// Apply `action` to every registered slice.
    ///
    /// On error the state is left untouched.
    pub fn dispatch(&self, action: impl Into<Action>) -> Result<(), StoreError> {
        let action = action.into();
        let mut inner = self.inner.lock();
        let next = inner.registry.combine(&inner.state, &action)?;
        tracing::trace!(?action, "Action dispatched");
        inner.publish(next);
        Ok(())
    }

    /// Attach a reducer under its key.
    ///
    /// If the slice is already live its state is kept and only the reducer
    /// (and policy) is replaced. Otherwise the slice starts from
    /// `initial_state` or, when absent, the reducer's default state.
    pub fn register(
        &self,
        reducer: Arc<dyn SliceReducer>,
        initial_state: Option<SliceState>,
        policy: RetainPolicy,
    ) {
        let key = reducer.key();
        let mut inner = self.inner.lock();
        let seed = initial_state.unwrap_or_else(|| reducer.initial());
        let replaced = inner.registry.register(reducer, policy);

        if inner.state.contains(key) {
            tracing::debug!(slice = %key, replaced, ?policy, "Reducer attached to live slice");
            return;
        }

        let mut next = RootState::clone(&inner.state);
        next.insert(key, seed);
        tracing::debug!(slice = %key, replaced, ?policy, "Slice registered");
        inner.publish(next);
    }

    /// Detach the reducer under `key` and drop its slice.
    ///
    /// No-op for slices registered with [`RetainPolicy::Retain`].
    pub fn unregister(&self, key: SliceKey) {
        let mut inner = self.inner.lock();
        if !inner.registry.unregister(key) {
            tracing::trace!(slice = %key, "Unregister skipped");
            return;
        }
        let mut next = RootState::clone(&inner.state);
        next.remove(key);
        tracing::debug!(slice = %key, "Slice unregistered");
        inner.publish(next);
    }

    /// Detach the reducer under `key` and drop its slice regardless of policy.
    pub fn teardown(&self, key: SliceKey) {
        let mut inner = self.inner.lock();
        let removed = inner.registry.remove(key);
        if !removed && !inner.state.contains(key) {
            return;
        }
        let mut next = RootState::clone(&inner.state);
        next.remove(key);
        tracing::debug!(slice = %key, "Slice torn down");
        inner.publish(next);
    }

    /// Return to the boot state: only always-on slices, at their defaults.
    pub fn reset(&self) {
        let mut inner = self.inner.lock();
        let (registry, state) = seeded(&inner.seed);
        inner.registry = registry;
        tracing::info!("Store reset");
        inner.publish(state);
    }

    /// Keys currently present in the reducer mapping.
    pub fn registered_keys(&self) -> Vec<SliceKey> {
        self.inner.lock().registry.keys()
    }

    pub fn policy(&self, key: SliceKey) -> Option<RetainPolicy> {
        self.inner.lock().registry.policy(key)
    }
}

fn seeded(always_on: &[Arc<dyn SliceReducer>]) -> (ReducerRegistry, RootState) {
    let mut registry = ReducerRegistry::new();
    let mut state = RootState::default();
    for reducer in always_on {
        state.insert(reducer.key(), reducer.initial());
        registry.register(Arc::clone(reducer), RetainPolicy::Retain);
    }
    (registry, state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::login::{LoginFormState, LoginIntent, LoginReducer};
    use crate::features::session::SessionReducer;

    /// Login slice whose username accumulates every `SetUsername` value.
    struct AppendingReducer;

    impl SliceReducer for AppendingReducer {
        fn key(&self) -> SliceKey {
            SliceKey::Login
        }

        fn initial(&self) -> SliceState {
            SliceState::Login(LoginFormState::default())
        }

        fn reduce(&self, state: SliceState, action: &Action) -> SliceState {
            match (state, action) {
                (SliceState::Login(mut login), Action::Login(LoginIntent::SetUsername(part))) => {
                    login.username.push_str(part);
                    SliceState::Login(login)
                }
                (other, _) => other,
            }
        }
    }

    fn store() -> Store {
        Store::new(vec![slice::<SessionReducer>()])
    }

    #[test]
    fn seeded_slices_are_present_and_retained() {
        let store = store();
        assert_eq!(store.state().keys(), vec![SliceKey::User]);
        assert_eq!(store.policy(SliceKey::User), Some(RetainPolicy::Retain));

        store.unregister(SliceKey::User);
        assert!(store.state().contains(SliceKey::User));
    }

    #[test]
    fn subscribers_see_dispatch_immediately() {
        let store = store();
        store.register(slice::<LoginReducer>(), None, RetainPolicy::RemoveOnRelease);
        let rx = store.subscribe();

        store
            .dispatch(LoginIntent::SetUsername("alice".into()))
            .unwrap();

        let state = rx.borrow().clone();
        assert_eq!(state.login().unwrap().username, "alice");
    }

    #[test]
    fn reset_drops_feature_slices() {
        let store = store();
        store.register(slice::<LoginReducer>(), None, RetainPolicy::Retain);
        store.reset();
        assert_eq!(store.registered_keys(), vec![SliceKey::User]);
        assert!(!store.state().contains(SliceKey::Login));
    }

    #[test]
    fn concurrent_dispatches_apply_atomically_in_order() {
        const THREADS: usize = 8;
        const PER_THREAD: usize = 100;

        let store = store();
        store.register(Arc::new(AppendingReducer), None, RetainPolicy::RemoveOnRelease);
        let rx = store.subscribe();

        std::thread::scope(|scope| {
            for t in 0..THREADS {
                let store = store.clone();
                scope.spawn(move || {
                    let tag = char::from(b'a' + t as u8);
                    for _ in 0..PER_THREAD {
                        store.dispatch(LoginIntent::SetUsername(tag.to_string())).unwrap();
                    }
                });
            }

            // Every snapshot seen mid-run is the result of whole dispatches.
            let mut seen = 0;
            while seen < THREADS * PER_THREAD {
                let len = rx.borrow().login().map_or(0, |login| login.username.len());
                assert!(len >= seen, "published state went backwards");
                seen = len;
                std::thread::yield_now();
            }
        });

        let username = store.state().login().unwrap().username.clone();
        assert_eq!(username.len(), THREADS * PER_THREAD);
        for t in 0..THREADS {
            let tag = char::from(b'a' + t as u8);
            assert_eq!(username.chars().filter(|&c| c == tag).count(), PER_THREAD);
        }
    }
}
