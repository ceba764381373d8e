//! Profile page slice. Registered while the profile page is open and
//! dropped when it is left.

mod intent;
mod reducer;
mod state;

pub use intent::ProfileIntent;
pub use reducer::ProfileReducer;
pub use state::{Profile, ProfileState};
