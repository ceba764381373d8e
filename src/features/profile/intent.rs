use super::state::Profile;
use crate::mvi::Intent;

#[derive(Debug, Clone)]
pub enum ProfileIntent {
    Load(Profile),
    SetReadonly(bool),
    UpdateForm(Profile),
    /// Discard form edits and go back to read-only.
    CancelEdit,
}

impl Intent for ProfileIntent {}
