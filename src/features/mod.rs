//! Feature slices. Each feature follows the same layout:
//! - `state.rs` - slice state
//! - `intent.rs` - actions the slice reacts to
//! - `reducer.rs` - pure state transitions + slice binding

pub mod login;
pub mod profile;
pub mod session;
