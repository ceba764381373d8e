//! Route resolution with the authentication guard.

use super::pattern::RouteParams;
use super::table::{AppRoute, RouteEntry, RouteTable, View};
use super::RouteTableError;
use crate::features::session::SessionState;

/// Guard decision for one navigation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardState {
    /// Public route, rendered immediately.
    Unguarded,
    /// Auth-only route while the session has not been resolved yet.
    Checking,
    /// Auth-only route with a valid session.
    Authorized,
    /// Auth-only route without a session.
    Denied { redirect: String },
}

/// What the shell should show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rendered {
    View(View),
    /// Placeholder while the target is being prepared.
    Loading,
    Redirect(String),
}

/// Result of resolving a path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigation {
    /// Path being displayed.
    pub location: String,
    pub route: AppRoute,
    pub view: View,
    pub params: RouteParams,
    pub guard: GuardState,
    /// Original path when the guard redirected.
    pub redirected_from: Option<String>,
}

impl Navigation {
    pub fn rendered(&self) -> Rendered {
        match &self.guard {
            GuardState::Unguarded | GuardState::Authorized => Rendered::View(self.view),
            GuardState::Checking => Rendered::Loading,
            GuardState::Denied { redirect } => Rendered::Redirect(redirect.clone()),
        }
    }

    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.get(name).map(String::as_str)
    }
}

/// Resolves paths against a [`RouteTable`] and applies the auth guard.
#[derive(Debug, Clone)]
pub struct Router {
    table: RouteTable,
    redirect: String,
}

impl Router {
    /// `unauthenticated_redirect` is where denied navigations land; it must
    /// resolve to a public route.
    pub fn new(table: RouteTable, unauthenticated_redirect: &str) -> Result<Self, RouteTableError> {
        let (entry, _) = match_entry(&table, unauthenticated_redirect);
        if entry.auth_only {
            return Err(RouteTableError::GuardedRedirect {
                path: unauthenticated_redirect.to_string(),
            });
        }
        Ok(Self {
            table,
            redirect: unauthenticated_redirect.to_string(),
        })
    }

    pub fn table(&self) -> &RouteTable {
        &self.table
    }

    pub fn redirect_target(&self) -> &str {
        &self.redirect
    }

    /// Single guard step: match `path` and decide, without following a
    /// redirect. `session` is `None` when the session slice is not loaded.
    pub fn resolve(&self, path: &str, session: Option<&SessionState>) -> Navigation {
        let (entry, params) = match_entry(&self.table, path);
        let guard = if !entry.auth_only {
            GuardState::Unguarded
        } else {
            match session {
                Some(session) if session.is_authenticated() => GuardState::Authorized,
                Some(session) if session.inited => GuardState::Denied {
                    redirect: self.redirect.clone(),
                },
                _ => GuardState::Checking,
            }
        };

        Navigation {
            location: path.to_string(),
            route: entry.id,
            view: entry.view,
            params,
            guard,
            redirected_from: None,
        }
    }

    /// Resolve `path`, following the guard's redirect when access is denied.
    pub fn navigate(&self, path: &str, session: Option<&SessionState>) -> Navigation {
        let navigation = self.resolve(path, session);
        let GuardState::Denied { redirect } = &navigation.guard else {
            return navigation;
        };

        tracing::debug!(from = %path, to = %redirect, "Navigation denied, redirecting");
        // Construction checked that the target is public, so this settles.
        let mut target = self.resolve(redirect, session);
        target.redirected_from = Some(path.to_string());
        target
    }
}

/// First matching entry; the catch-all is last in the table, so it only
/// wins when nothing else matches.
fn match_entry<'a>(table: &'a RouteTable, path: &str) -> (&'a RouteEntry, RouteParams) {
    for entry in table.entries() {
        if let Some(params) = entry.path.matches(path) {
            return (entry, params);
        }
    }
    (table.catch_all(), RouteParams::new())
}
