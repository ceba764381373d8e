//! Current location tracking.

use parking_lot::Mutex;
use tokio::sync::watch;

use super::guard::{Navigation, Router};
use crate::store::Store;

/// Holds the current [`Navigation`].
///
/// Re-resolving on session changes is driven by
/// [`AppShell::watch_session`](crate::shell::AppShell::watch_session).
pub struct Navigator {
    router: Router,
    store: Store,
    current: watch::Sender<Navigation>,
    /// Serializes resolve-and-publish so a refresh never republishes a
    /// location that a concurrent navigation already replaced.
    lock: Mutex<()>,
}

impl Navigator {
    /// Start at `initial_path`, resolved against the current session.
    pub fn new(router: Router, store: Store, initial_path: &str) -> Self {
        let navigation = router.navigate(initial_path, store.state().session());
        let (current, _) = watch::channel(navigation);
        Self {
            router,
            store,
            current,
            lock: Mutex::new(()),
        }
    }

    pub fn router(&self) -> &Router {
        &self.router
    }

    /// Navigate to `path` and publish the result.
    pub fn navigate(&self, path: &str) -> Navigation {
        let _guard = self.lock.lock();
        let state = self.store.state();
        let navigation = self.router.navigate(path, state.session());
        tracing::info!(
            path = %path,
            location = %navigation.location,
            route = %navigation.route,
            guard = ?navigation.guard,
            "Navigated"
        );
        self.publish(navigation)
    }

    /// Re-run the guard for the current location.
    pub fn refresh(&self) -> Navigation {
        let _guard = self.lock.lock();
        let location = self.current.borrow().location.clone();
        let state = self.store.state();
        let navigation = self.router.navigate(&location, state.session());
        self.publish(navigation)
    }

    pub fn current(&self) -> Navigation {
        self.current.borrow().clone()
    }

    /// Subscribe to navigation changes. Dropping the receiver unsubscribes.
    pub fn subscribe(&self) -> watch::Receiver<Navigation> {
        self.current.subscribe()
    }

    fn publish(&self, navigation: Navigation) -> Navigation {
        self.current.send_if_modified(|current| {
            if *current == navigation {
                return false;
            }
            *current = navigation.clone();
            true
        });
        navigation
    }
}
