//! Session slice: who is logged in.
//!
//! Always-on. Read by the route guard, written by the login flow, logout
//! and the boot-time restore from storage.

mod intent;
mod persistence;
mod reducer;
mod state;

pub use intent::SessionIntent;
pub use persistence::{clear_user, persist_user, restore_session, USER_STORAGE_KEY};
pub use reducer::SessionReducer;
pub use state::{SessionState, User};
