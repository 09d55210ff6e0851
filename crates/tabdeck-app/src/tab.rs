//! A single dashboard tab and its panels
//!
//! A tab starts `NotLoaded` and fetches `/tab/{id}` on creation. Panel
//! actions address a panel by position and kind; an action whose index or
//! kind does not match a live panel leaves the tab unchanged.

use tabdeck_core::{PanelDescriptor, TabId};

use crate::effect::{Command, Effect, Run};
use crate::panels::{animal, single_value, text, PanelState};
use crate::transition::{flatten, Transition};

#[derive(Debug, Clone, PartialEq)]
pub enum Data {
    NotLoaded,
    Success(Vec<PanelState>),
    Failed { error: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct State {
    pub id: TabId,
    pub data: Data,
}

impl State {
    pub fn panels(&self) -> &[PanelState] {
        match &self.data {
            Data::Success(panels) => panels,
            Data::NotLoaded | Data::Failed { .. } => &[],
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Panels fetched for the tab with the given id
    FetchPanelsSuccess(TabId, Vec<PanelDescriptor>),
    FetchPanelsFailure(TabId, String),
    TextPanelMsg(usize, text::Action),
    SingleValuePanelMsg(usize, single_value::Action),
    AnimalPanelMsg(usize, animal::Action),
    /// Fetch the panels again, discarding the current data
    Reload,
}

pub fn panels_path(id: TabId) -> String {
    format!("/tab/{}", id)
}

fn fetch_panels(id: TabId) -> Effect<Action> {
    Effect::run(
        Run::new(Command::fetch(panels_path(id)))
            .on_decoded(move |descriptors| Action::FetchPanelsSuccess(id, descriptors))
            .on_failure(move |error| Action::FetchPanelsFailure(id, error.to_string())),
    )
}

pub fn init(id: TabId) -> Transition<State, Action> {
    Transition::new(
        State {
            id,
            data: Data::NotLoaded,
        },
        fetch_panels(id),
    )
}

pub fn reducer(state: State, action: Action) -> Transition<State, Action> {
    match action {
        // A reply for another tab outlived the navigation that requested it
        Action::FetchPanelsSuccess(id, _) | Action::FetchPanelsFailure(id, _)
            if id != state.id =>
        {
            Transition::pure(state)
        }

        Action::FetchPanelsSuccess(_, descriptors) => Transition::pure(State {
            data: Data::Success(
                descriptors
                    .into_iter()
                    .map(PanelState::from_descriptor)
                    .collect(),
            ),
            ..state
        }),

        Action::FetchPanelsFailure(_, error) => match state.data {
            Data::NotLoaded => Transition::pure(State {
                data: Data::Failed { error },
                ..state
            }),
            // Loaded panels outlive a late failure
            _ => Transition::pure(state),
        },

        Action::Reload => init(state.id),

        Action::TextPanelMsg(index, action) => distribute(state, index, |panel| match panel {
            PanelState::Text(panel) => text::reducer(panel, action.clone())
                .map_both(PanelState::Text, move |a| Action::TextPanelMsg(index, a)),
            other => Transition::pure(other),
        }),

        Action::SingleValuePanelMsg(index, action) => {
            distribute(state, index, |panel| match panel {
                PanelState::SingleValue(panel) => single_value::reducer(panel, action).map_both(
                    PanelState::SingleValue,
                    move |a| Action::SingleValuePanelMsg(index, a),
                ),
                other => Transition::pure(other),
            })
        }

        Action::AnimalPanelMsg(index, action) => distribute(state, index, |panel| match panel {
            PanelState::Animal(panel) => animal::reducer(panel, action)
                .map_both(PanelState::Animal, move |a| Action::AnimalPanelMsg(index, a)),
            other => Transition::pure(other),
        }),
    }
}

/// Run `update` on the panel at `index` and identity on every other panel.
///
/// Ignored unless the tab is loaded.
fn distribute<F>(state: State, index: usize, mut update: F) -> Transition<State, Action>
where
    F: FnMut(PanelState) -> Transition<PanelState, Action>,
{
    let State { id, data } = state;
    match data {
        Data::Success(panels) => {
            let transitions = panels
                .into_iter()
                .enumerate()
                .map(|(i, panel)| {
                    if i == index {
                        update(panel)
                    } else {
                        Transition::pure(panel)
                    }
                })
                .collect();

            flatten(transitions).map_state(|panels| State {
                id,
                data: Data::Success(panels),
            })
        }
        data => Transition::pure(State { id, data }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tabdeck_core::Animal;

    fn loaded(id: TabId) -> State {
        reducer(
            init(id).state,
            Action::FetchPanelsSuccess(
                id,
                vec![
                    PanelDescriptor::Text {
                        value: "hello".to_string(),
                    },
                    PanelDescriptor::SingleValue { value: 3 },
                    PanelDescriptor::Animal { value: Animal::Cat },
                    PanelDescriptor::Weather {
                        place: "Oslo".to_string(),
                        is_okay: true,
                    },
                ],
            ),
        )
        .state
    }

    #[test]
    fn test_init_fetches_panels_for_id() {
        let t = init(7);
        assert_eq!(t.state.data, Data::NotLoaded);
        assert_eq!(t.effect.commands(), vec![&Command::fetch("/tab/7")]);
    }

    #[test]
    fn test_fetch_success_builds_panels() {
        let state = loaded(1);
        let panels = state.panels();
        assert_eq!(panels.len(), 4);
        assert_eq!(
            panels[1],
            PanelState::SingleValue(single_value::initial_state(3))
        );
    }

    #[test]
    fn test_panel_action_reaches_matching_panel() {
        let t = reducer(
            loaded(1),
            Action::SingleValuePanelMsg(1, single_value::Action::Increment),
        );
        assert!(t.effect.is_none());
        assert_eq!(
            t.state.panels()[1],
            PanelState::SingleValue(single_value::initial_state(4))
        );

        let t = reducer(t.state, Action::AnimalPanelMsg(2, animal::Action::ChangeAnimal));
        assert_eq!(
            t.state.panels()[2],
            PanelState::Animal(animal::initial_state(Animal::Dog))
        );
    }

    #[test]
    fn test_mismatched_index_or_kind_is_identity() {
        let before = loaded(1);

        // Index 0 is a text panel
        let t = reducer(
            before.clone(),
            Action::SingleValuePanelMsg(0, single_value::Action::Increment),
        );
        assert_eq!(t.state, before);

        // Out of range
        let t = reducer(
            before.clone(),
            Action::TextPanelMsg(99, text::Action::ChangeValue("x".to_string())),
        );
        assert_eq!(t.state, before);

        // Weather has no actions; an animal action at its index is ignored
        let t = reducer(before.clone(), Action::AnimalPanelMsg(3, animal::Action::ChangeAnimal));
        assert_eq!(t.state, before);
    }

    #[test]
    fn test_panel_action_ignored_while_not_loaded() {
        let state = init(2).state;
        let t = reducer(
            state.clone(),
            Action::TextPanelMsg(0, text::Action::SwitchEditMode(true)),
        );
        assert_eq!(t.state, state);
        assert!(t.effect.is_none());
    }

    #[test]
    fn test_fetch_failure_moves_to_failed() {
        let t = reducer(init(3).state, Action::FetchPanelsFailure(3, "boom".to_string()));
        assert_eq!(
            t.state.data,
            Data::Failed {
                error: "boom".to_string()
            }
        );
    }

    #[test]
    fn test_late_failure_keeps_loaded_panels() {
        let before = loaded(1);
        let t = reducer(before.clone(), Action::FetchPanelsFailure(1, "late".to_string()));
        assert_eq!(t.state, before);
    }

    #[test]
    fn test_reload_refetches_from_failed() {
        let failed = reducer(
            init(3).state,
            Action::FetchPanelsFailure(3, "boom".to_string()),
        )
        .state;
        let t = reducer(failed, Action::Reload);
        assert_eq!(t.state.data, Data::NotLoaded);
        assert_eq!(t.effect.commands(), vec![&Command::fetch("/tab/3")]);
    }

    #[test]
    fn test_reply_for_another_tab_is_ignored() {
        let state = init(2).state;
        let t = reducer(
            state.clone(),
            Action::FetchPanelsSuccess(1, vec![PanelDescriptor::SingleValue { value: 9 }]),
        );
        assert_eq!(t.state, state);

        let t = reducer(state.clone(), Action::FetchPanelsFailure(1, "late".to_string()));
        assert_eq!(t.state, state);

        let before = loaded(2);
        let t = reducer(
            before.clone(),
            Action::FetchPanelsSuccess(1, vec![PanelDescriptor::SingleValue { value: 9 }]),
        );
        assert_eq!(t.state, before);
    }
}
