//! Free-text panel with an edit mode

use crate::transition::Transition;

#[derive(Debug, Clone, PartialEq)]
pub struct State {
    pub is_edit_mode_enabled: bool,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    SwitchEditMode(bool),
    /// Replace the whole value; no validation or length limit
    ChangeValue(String),
}

pub fn initial_state(value: impl Into<String>) -> State {
    State {
        is_edit_mode_enabled: false,
        value: value.into(),
    }
}

pub fn reducer(state: State, action: Action) -> Transition<State, Action> {
    match action {
        Action::SwitchEditMode(is_enabled) => Transition::pure(State {
            is_edit_mode_enabled: is_enabled,
            ..state
        }),
        Action::ChangeValue(value) => Transition::pure(State { value, ..state }),
    }
}
