//! Observable theme value with persistence.

use std::sync::Arc;

use tokio::sync::watch;

use super::Theme;
use crate::storage::PreferenceStorage;

/// Storage key holding the theme's [`Theme::as_str`] value.
pub const THEME_STORAGE_KEY: &str = "theme";

/// Current theme, shared by every view that needs it.
///
/// Passed around explicitly; cloning shares the same value. Changes are
/// broadcast synchronously: a receiver observes the new theme as soon as
/// [`ThemeState::set`] returns.
#[derive(Clone)]
pub struct ThemeState {
    current: Arc<watch::Sender<Option<Theme>>>,
    storage: Arc<dyn PreferenceStorage>,
}

impl ThemeState {
    /// Load the stored theme. Missing, unreadable or unknown values leave
    /// the theme unset, which reads as Light.
    pub fn load(storage: Arc<dyn PreferenceStorage>) -> Self {
        let stored = match storage.read(THEME_STORAGE_KEY) {
            Ok(Some(raw)) => {
                let parsed = Theme::parse(&raw);
                if parsed.is_none() {
                    tracing::warn!(value = %raw, "Ignoring unknown stored theme");
                }
                parsed
            }
            Ok(None) => None,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to read stored theme");
                None
            }
        };
        tracing::debug!(theme = ?stored, "Theme loaded");

        let (current, _) = watch::channel(stored);
        Self {
            current: Arc::new(current),
            storage,
        }
    }

    pub fn get(&self) -> Theme {
        self.current.borrow().unwrap_or_default()
    }

    /// Set, broadcast and persist `theme`.
    ///
    /// A failed write is logged; the in-memory theme still changes.
    pub fn set(&self, theme: Theme) {
        self.current.send_replace(Some(theme));
        if let Err(e) = self.storage.write(THEME_STORAGE_KEY, theme.as_str()) {
            tracing::warn!(theme = %theme, error = %e, "Failed to persist theme");
        }
    }

    /// Advance to the next theme in the cycle and return it.
    pub fn cycle(&self) -> Theme {
        let next = Theme::after(*self.current.borrow());
        self.set(next);
        tracing::info!(theme = %next, "Theme switched");
        next
    }

    /// Subscribe to theme changes. Dropping the watcher unsubscribes.
    pub fn subscribe(&self) -> ThemeWatcher {
        ThemeWatcher {
            rx: self.current.subscribe(),
        }
    }
}

/// Receiving side of [`ThemeState`].
pub struct ThemeWatcher {
    rx: watch::Receiver<Option<Theme>>,
}

impl ThemeWatcher {
    pub fn current(&self) -> Theme {
        self.rx.borrow().unwrap_or_default()
    }

    /// Wait for the next change. Returns `None` once the state is gone.
    pub async fn changed(&mut self) -> Option<Theme> {
        self.rx.changed().await.ok()?;
        Some(self.rx.borrow_and_update().unwrap_or_default())
    }
}
