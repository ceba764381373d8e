//! Typed slice keys, tagged slice state and the reducer binding that lets
//! the registry treat every feature reducer uniformly.

use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

use crate::features::login::{LoginFormState, LoginIntent};
use crate::features::profile::{ProfileIntent, ProfileState};
use crate::features::session::{SessionIntent, SessionState};
use crate::mvi::Reducer;

/// Name of a state slice inside the root state.
///
/// The `as_str()` value doubles as the slice name in logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SliceKey {
    /// Always-on session slice.
    User,
    Login,
    Profile,
}

impl SliceKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Login => "login",
            Self::Profile => "profile",
        }
    }
}

impl fmt::Display for SliceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// State of a single slice, tagged by the feature that owns it.
#[derive(Debug, Clone, PartialEq)]
pub enum SliceState {
    User(SessionState),
    Login(LoginFormState),
    Profile(ProfileState),
}

impl SliceState {
    /// Key of the slice this state belongs to.
    pub fn key(&self) -> SliceKey {
        match self {
            Self::User(_) => SliceKey::User,
            Self::Login(_) => SliceKey::Login,
            Self::Profile(_) => SliceKey::Profile,
        }
    }
}

/// Everything that can be dispatched against the store.
#[derive(Debug, Clone)]
pub enum Action {
    Session(SessionIntent),
    Login(LoginIntent),
    Profile(ProfileIntent),
}

impl From<SessionIntent> for Action {
    fn from(intent: SessionIntent) -> Self {
        Action::Session(intent)
    }
}

impl From<LoginIntent> for Action {
    fn from(intent: LoginIntent) -> Self {
        Action::Login(intent)
    }
}

impl From<ProfileIntent> for Action {
    fn from(intent: ProfileIntent) -> Self {
        Action::Profile(intent)
    }
}

/// Binds a typed [`Reducer`] to a slice of the root state.
///
/// Adding a feature slice: add a [`SliceKey`] + [`SliceState`] variant and
/// implement this trait for its reducer.
pub trait FeatureSlice: Reducer + 'static {
    /// Slice the reducer owns.
    const KEY: SliceKey;

    /// Extract the intent this slice reacts to, if any.
    fn select(action: &Action) -> Option<Self::Intent>;

    fn wrap(state: Self::State) -> SliceState;

    /// Narrow a tagged state to this slice's state, handing back anything else.
    fn narrow(state: SliceState) -> Result<Self::State, SliceState>;
}

/// Type-erased reducer as stored in the registry.
pub trait SliceReducer: Send + Sync {
    fn key(&self) -> SliceKey;

    /// State inserted when the slice is first registered.
    fn initial(&self) -> SliceState;

    /// Apply `action` to this slice's state.
    ///
    /// Actions the slice does not handle return the state untouched.
    fn reduce(&self, state: SliceState, action: &Action) -> SliceState;
}

struct Bound<R>(PhantomData<fn() -> R>);

impl<R: FeatureSlice> SliceReducer for Bound<R> {
    fn key(&self) -> SliceKey {
        R::KEY
    }

    fn initial(&self) -> SliceState {
        R::wrap(R::State::default())
    }

    fn reduce(&self, state: SliceState, action: &Action) -> SliceState {
        let Some(intent) = R::select(action) else {
            return state;
        };
        match R::narrow(state) {
            Ok(typed) => R::wrap(R::reduce(typed, intent)),
            // Left for the registry to report as a malformed slice.
            Err(other) => other,
        }
    }
}

/// Erase a feature reducer so it can be registered.
pub fn slice<R: FeatureSlice>() -> Arc<dyn SliceReducer> {
    Arc::new(Bound::<R>(PhantomData))
}
