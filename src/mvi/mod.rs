//! Model-View-Intent (MVI) primitives shared by every feature slice.
//!
//! # Architecture
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```
//!
//! - **State**: immutable snapshot of one slice
//! - **Intent**: user actions or settled async outcomes
//! - **Reducer**: pure function that transforms state based on intents
//!
//! Reducers are bound to a [`SliceKey`](crate::store::SliceKey) through
//! [`FeatureSlice`](crate::store::FeatureSlice) before they can be injected
//! into the store.

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::ViewState;
