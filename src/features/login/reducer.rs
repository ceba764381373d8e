use super::intent::LoginIntent;
use super::state::LoginFormState;
use crate::mvi::Reducer;
use crate::store::{Action, FeatureSlice, SliceKey, SliceState};

pub struct LoginReducer;

impl Reducer for LoginReducer {
    type State = LoginFormState;
    type Intent = LoginIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            LoginIntent::SetUsername(username) => LoginFormState { username, ..state },
            LoginIntent::SetPassword(password) => LoginFormState { password, ..state },
            LoginIntent::Pending => LoginFormState {
                is_loading: true,
                error: None,
                ..state
            },
            LoginIntent::Fulfilled => LoginFormState {
                is_loading: false,
                error: None,
                ..state
            },
            // Fields stay as typed so the user can correct and resubmit.
            LoginIntent::Rejected { message } => LoginFormState {
                is_loading: false,
                error: Some(message),
                ..state
            },
        }
    }
}

impl FeatureSlice for LoginReducer {
    const KEY: SliceKey = SliceKey::Login;

    fn select(action: &Action) -> Option<Self::Intent> {
        match action {
            Action::Login(intent) => Some(intent.clone()),
            _ => None,
        }
    }

    fn wrap(state: Self::State) -> SliceState {
        SliceState::Login(state)
    }

    fn narrow(state: SliceState) -> Result<Self::State, SliceState> {
        match state {
            SliceState::Login(state) => Ok(state),
            other => Err(other),
        }
    }
}
