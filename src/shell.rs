//! Application shell: wires storage, theme, store, routes and features.

use std::sync::Arc;

use parking_lot::Mutex;
use thiserror::Error;
use tokio::task::JoinHandle;

use crate::api::AuthClient;
use crate::config::AppConfig;
use crate::features::login::{LoginForm, SubmitOutcome};
use crate::features::profile::{Profile, ProfileIntent, ProfileReducer};
use crate::features::session::{clear_user, restore_session, SessionIntent, SessionReducer};
use crate::routes::{Navigation, Navigator, Rendered, RouteTable, RouteTableError, Router, View};
use crate::storage::PreferenceStorage;
use crate::store::{slice, ScopedSlices, SliceReducer, Store, StoreError};
use crate::theme::ThemeState;

#[derive(Debug, Error)]
pub enum ShellError {
    #[error("Route configuration error: {0}")]
    Routes(#[from] RouteTableError),

    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}

/// The page currently shown and the slices it holds.
struct ActivePage {
    view: View,
    slices: ScopedSlices,
}

pub struct AppShell {
    storage: Arc<dyn PreferenceStorage>,
    theme: ThemeState,
    store: Store,
    navigator: Arc<Navigator>,
    page: Mutex<Option<ActivePage>>,
}

impl AppShell {
    /// Boot sequence: seed the store with the session slice, restore the
    /// persisted session and theme, build the router and open the start page.
    pub fn boot(config: &AppConfig, storage: Arc<dyn PreferenceStorage>) -> Result<Self, ShellError> {
        let store = Store::new(vec![slice::<SessionReducer>()]);
        restore_session(&store, storage.as_ref())?;
        let theme = ThemeState::load(Arc::clone(&storage));

        let router = Router::new(
            RouteTable::app_routes()?,
            &config.routing.unauthenticated_redirect,
        )?;
        let navigator = Arc::new(Navigator::new(
            router,
            store.clone(),
            &config.routing.start_path,
        ));

        let shell = Self {
            storage,
            theme,
            store,
            navigator,
            page: Mutex::new(None),
        };
        shell.sync_page(&mut shell.page.lock(), &shell.navigator.current())?;
        tracing::info!(theme = %shell.theme.get(), "Shell booted");
        Ok(shell)
    }

    pub fn theme(&self) -> &ThemeState {
        &self.theme
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    pub fn navigator(&self) -> &Arc<Navigator> {
        &self.navigator
    }

    pub fn storage(&self) -> &dyn PreferenceStorage {
        self.storage.as_ref()
    }

    pub fn current(&self) -> Navigation {
        self.navigator.current()
    }

    /// Navigate to `path` and swap the page's feature slices.
    pub fn open(&self, path: &str) -> Result<Navigation, StoreError> {
        let mut page = self.page.lock();
        let navigation = self.navigator.navigate(path);
        self.sync_page(&mut page, &navigation)?;
        Ok(navigation)
    }

    /// Re-run the guard for the current location.
    pub fn refresh(&self) -> Result<Navigation, StoreError> {
        let mut page = self.page.lock();
        let navigation = self.navigator.refresh();
        self.sync_page(&mut page, &navigation)?;
        Ok(navigation)
    }

    /// Spawn a task that refreshes the current page on every session change.
    ///
    /// Changes to other slices are ignored. A page the guard now denies is
    /// left, and its slices are released. The task runs until aborted.
    pub fn watch_session(self: &Arc<Self>) -> JoinHandle<()> {
        let shell = Arc::clone(self);
        let mut updates = self.store.subscribe();
        let mut last = updates.borrow_and_update().session().cloned();
        tokio::spawn(async move {
            while updates.changed().await.is_ok() {
                let session = updates.borrow_and_update().session().cloned();
                if session == last {
                    continue;
                }
                last = session;
                match shell.refresh() {
                    Ok(navigation) => {
                        tracing::debug!(location = %navigation.location, "Session changed, route re-evaluated")
                    }
                    Err(e) => tracing::warn!(error = %e, "Failed to re-evaluate route"),
                }
            }
        })
    }

    pub fn login_form(&self) -> LoginForm {
        LoginForm::open(&self.store)
    }

    /// Fill the login form and submit it.
    pub async fn login<C: AuthClient>(
        &self,
        client: &C,
        username: &str,
        password: &str,
    ) -> Result<SubmitOutcome, StoreError> {
        let form = self.login_form();
        form.set_username(username)?;
        form.set_password(password)?;
        let outcome = form
            .submit(client, self.storage.as_ref(), |user| {
                tracing::debug!(username = %user.username, "Login form closed");
            })
            .await?;
        form.close();
        self.refresh()?;
        Ok(outcome)
    }

    pub fn logout(&self) -> Result<Navigation, StoreError> {
        self.store.dispatch(SessionIntent::Logout)?;
        clear_user(self.storage.as_ref());
        tracing::info!("Logged out");
        self.refresh()
    }

    fn sync_page(
        &self,
        page: &mut Option<ActivePage>,
        navigation: &Navigation,
    ) -> Result<(), StoreError> {
        let view = match navigation.rendered() {
            Rendered::View(view) => Some(view),
            Rendered::Loading | Rendered::Redirect(_) => None,
        };

        if page.as_ref().map(|active| active.view) == view {
            return Ok(());
        }
        if let Some(previous) = page.take() {
            previous.slices.release();
        }
        let Some(view) = view else {
            return Ok(());
        };

        let slices = ScopedSlices::acquire(&self.store, page_slices(view), true);
        if view == View::Profile {
            if let Some(user) = self.store.state().session().and_then(|s| s.user()) {
                self.store.dispatch(ProfileIntent::Load(Profile::from(user)))?;
            }
        }
        *page = Some(ActivePage { view, slices });
        Ok(())
    }
}

/// Feature slices a page injects while it is shown.
fn page_slices(view: View) -> Vec<Arc<dyn SliceReducer>> {
    match view {
        View::Profile => vec![slice::<ProfileReducer>()],
        View::Home
        | View::About
        | View::ArticlesList
        | View::ArticleDetails
        | View::NotFound => Vec::new(),
    }
}
