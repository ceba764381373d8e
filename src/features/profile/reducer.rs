use super::intent::ProfileIntent;
use super::state::ProfileState;
use crate::mvi::Reducer;
use crate::store::{Action, FeatureSlice, SliceKey, SliceState};

pub struct ProfileReducer;

impl Reducer for ProfileReducer {
    type State = ProfileState;
    type Intent = ProfileIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            ProfileIntent::Load(profile) => ProfileState {
                data: Some(profile.clone()),
                form: Some(profile),
                readonly: true,
            },
            ProfileIntent::SetReadonly(readonly) => ProfileState { readonly, ..state },
            ProfileIntent::UpdateForm(_) if state.readonly => state,
            ProfileIntent::UpdateForm(profile) => ProfileState {
                form: Some(profile),
                ..state
            },
            ProfileIntent::CancelEdit => ProfileState {
                form: state.data.clone(),
                readonly: true,
                ..state
            },
        }
    }
}

impl FeatureSlice for ProfileReducer {
    const KEY: SliceKey = SliceKey::Profile;

    fn select(action: &Action) -> Option<Self::Intent> {
        match action {
            Action::Profile(intent) => Some(intent.clone()),
            _ => None,
        }
    }

    fn wrap(state: Self::State) -> SliceState {
        SliceState::Profile(state)
    }

    fn narrow(state: SliceState) -> Result<Self::State, SliceState> {
        match state {
            SliceState::Profile(state) => Ok(state),
            other => Err(other),
        }
    }
}
