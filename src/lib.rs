//! Application shell for an article site.
//!
//! Feature modules register their state slices into a shared [`store`]
//! while their views are shown; the [`routes`] guard consults the always-on
//! session slice before rendering auth-only pages.

pub mod api;
pub mod config;
pub mod features;
pub mod logging;
pub mod mvi;
pub mod routes;
pub mod shell;
pub mod storage;
pub mod store;
pub mod theme;
