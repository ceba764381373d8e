//! Scoped slice acquisition: attach feature reducers when a view is entered
//! and detach them when it is left.

use std::sync::Arc;

use super::registry::RetainPolicy;
use super::slice::{SliceKey, SliceReducer};
use super::Store;

/// Guard owning the slices a view registered.
///
/// Dropping the guard (or calling [`ScopedSlices::release`]) unregisters
/// every slice unless it was acquired with `remove_after_unmount = false`,
/// in which case the slices stay live until teardown or store reset.
pub struct ScopedSlices {
    store: Store,
    keys: Vec<SliceKey>,
    remove_after_unmount: bool,
    released: bool,
}

impl ScopedSlices {
    /// Register every reducer in `reducers` into `store`.
    ///
    /// A slice that is still live from an earlier retained acquisition keeps
    /// its state; only the reducer is re-attached.
    pub fn acquire(
        store: &Store,
        reducers: impl IntoIterator<Item = Arc<dyn SliceReducer>>,
        remove_after_unmount: bool,
    ) -> Self {
        let policy = if remove_after_unmount {
            RetainPolicy::RemoveOnRelease
        } else {
            RetainPolicy::Retain
        };

        let mut keys = Vec::new();
        for reducer in reducers {
            keys.push(reducer.key());
            store.register(reducer, None, policy);
        }

        Self {
            store: store.clone(),
            keys,
            remove_after_unmount,
            released: false,
        }
    }

    pub fn keys(&self) -> &[SliceKey] {
        &self.keys
    }

    pub fn removes_after_unmount(&self) -> bool {
        self.remove_after_unmount
    }

    /// Release the slices now instead of at drop.
    pub fn release(mut self) {
        self.release_slices();
    }

    fn release_slices(&mut self) {
        if self.released {
            return;
        }
        self.released = true;
        if !self.remove_after_unmount {
            return;
        }
        for key in &self.keys {
            self.store.unregister(*key);
        }
    }
}

impl Drop for ScopedSlices {
    fn drop(&mut self) {
        self.release_slices();
    }
}

impl std::fmt::Debug for ScopedSlices {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScopedSlices")
            .field("keys", &self.keys)
            .field("remove_after_unmount", &self.remove_after_unmount)
            .finish_non_exhaustive()
    }
}
