use super::intent::SessionIntent;
use super::state::SessionState;
use crate::mvi::Reducer;
use crate::store::{Action, FeatureSlice, SliceKey, SliceState};

pub struct SessionReducer;

impl Reducer for SessionReducer {
    type State = SessionState;
    type Intent = SessionIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            SessionIntent::InitAuthData(auth_data) => SessionState {
                auth_data,
                inited: true,
            },
            SessionIntent::SetAuthData(user) => SessionState {
                auth_data: Some(user),
                ..state
            },
            SessionIntent::Logout => SessionState {
                auth_data: None,
                ..state
            },
        }
    }
}

impl FeatureSlice for SessionReducer {
    const KEY: SliceKey = SliceKey::User;

    fn select(action: &Action) -> Option<Self::Intent> {
        match action {
            Action::Session(intent) => Some(intent.clone()),
            _ => None,
        }
    }

    fn wrap(state: Self::State) -> SliceState {
        SliceState::User(state)
    }

    fn narrow(state: SliceState) -> Result<Self::State, SliceState> {
        match state {
            SliceState::User(state) => Ok(state),
            other => Err(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::session::User;

    fn alice() -> User {
        User {
            id: "1".into(),
            username: "alice".into(),
            avatar: None,
        }
    }

    #[test]
    fn default_is_not_inited() {
        let state = SessionState::default();
        assert!(!state.inited);
        assert!(!state.is_authenticated());
    }

    #[test]
    fn init_without_user_marks_inited() {
        let state = SessionReducer::reduce(SessionState::default(), SessionIntent::InitAuthData(None));
        assert!(state.inited);
        assert!(!state.is_authenticated());
    }

    #[test]
    fn set_auth_data_authenticates() {
        let state = SessionReducer::reduce(
            SessionState::default(),
            SessionIntent::InitAuthData(None),
        );
        let state = SessionReducer::reduce(state, SessionIntent::SetAuthData(alice()));
        assert!(state.inited);
        assert_eq!(state.user().map(|u| u.username.as_str()), Some("alice"));
    }

    #[test]
    fn logout_keeps_inited() {
        let state = SessionReducer::reduce(
            SessionState::default(),
            SessionIntent::InitAuthData(Some(alice())),
        );
        let state = SessionReducer::reduce(state, SessionIntent::Logout);
        assert!(state.inited);
        assert!(!state.is_authenticated());
    }

    #[test]
    fn ignores_other_actions() {
        let action = Action::Login(crate::features::login::LoginIntent::Pending);
        assert!(SessionReducer::select(&action).is_none());
    }
}
