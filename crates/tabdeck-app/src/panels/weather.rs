//! Read-only weather report panel
//!
//! Set once from the backend descriptor. There are no actions.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct State {
    pub place: String,
    pub is_okay: bool,
}

pub fn initial_state(place: impl Into<String>, is_okay: bool) -> State {
    State {
        place: place.into(),
        is_okay,
    }
}
