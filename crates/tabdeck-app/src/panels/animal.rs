//! Animal picker panel

use tabdeck_core::Animal;

use crate::transition::Transition;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct State {
    pub value: Animal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Advance cat → dog → turtle → cat
    ChangeAnimal,
}

pub fn initial_state(value: Animal) -> State {
    State { value }
}

pub fn reducer(state: State, action: Action) -> Transition<State, Action> {
    match action {
        Action::ChangeAnimal => Transition::pure(State {
            value: state.value.next(),
        }),
    }
}
