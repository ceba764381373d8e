//! Network access used by the features.

mod client;

pub use client::{AuthClient, AuthError, Credentials, HttpAuthClient};
