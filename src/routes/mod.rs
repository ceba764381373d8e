//! Client-side routing: the route table, the auth guard and the navigator
//! that re-evaluates the current location whenever the session changes.

mod guard;
mod navigator;
mod pattern;
mod table;

pub use guard::{GuardState, Navigation, Rendered, Router};
pub use navigator::Navigator;
pub use pattern::{PathPattern, RouteParams};
pub use table::{article_details_path, AppRoute, RouteEntry, RouteTable, View};

use thiserror::Error;

/// Errors detected while building the route table or the router.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteTableError {
    #[error("invalid route pattern '{pattern}': {reason}")]
    InvalidPattern { pattern: String, reason: String },

    #[error("route '{id}' declared more than once")]
    DuplicateRoute { id: AppRoute },

    #[error("expected exactly one catch-all route, found {found}")]
    CatchAllCount { found: usize },

    /// The fallback for denied navigation must itself be reachable without a
    /// session, or the guard would redirect forever.
    #[error("redirect target '{path}' is not a public route")]
    GuardedRedirect { path: String },
}
