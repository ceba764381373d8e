//! Base trait for slice state.

/// Marker trait for the state owned by one slice.
///
/// States should be:
/// - Immutable (Clone to create new states)
/// - Self-contained (all data a view needs)
/// - Comparable (PartialEq for change detection by subscribers)
pub trait ViewState: Clone + PartialEq + Default + Send + 'static {}
