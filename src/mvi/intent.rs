//! Base trait for intents (user/system actions).

/// Marker trait for intent objects.
///
/// Intents represent:
/// - User actions (field edits, submit clicks)
/// - Settled async work (login fulfilled or rejected)
/// - Session transitions (restore, logout)
///
/// Intents are cloned out of a dispatched [`Action`](crate::store::Action)
/// once per interested slice, hence the `Clone` bound.
pub trait Intent: Clone + Send + 'static {}
