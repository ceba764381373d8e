//! Login-by-username feature.
//!
//! # Architecture
//!
//! - `state.rs` - form fields plus in-flight and error markers
//! - `intent.rs` - field edits and the settled outcomes of a submission
//! - `reducer.rs` - state transitions (pure, no side effects)
//! - `service.rs` - the async submission against an [`AuthClient`](crate::api::AuthClient)
//! - `form.rs` - view controller binding the slice to a form's lifetime

mod form;
mod intent;
mod reducer;
mod service;
mod state;

pub use form::{LoginForm, SubmitOutcome};
pub use intent::LoginIntent;
pub use reducer::LoginReducer;
pub use service::{login_by_username, LoginError};
pub use state::LoginFormState;
