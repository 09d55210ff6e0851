//! Integer counter panel

use crate::transition::Transition;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct State {
    pub value: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Increment,
    Decrement,
}

pub fn initial_state(value: i64) -> State {
    State { value }
}

/// Unbounded in both directions; wraps at the `i64` limits.
pub fn reducer(state: State, action: Action) -> Transition<State, Action> {
    let value = match action {
        Action::Increment => state.value.wrapping_add(1),
        Action::Decrement => state.value.wrapping_sub(1),
    };
    Transition::pure(State { value })
}
