//! Tab list and the selected tab
//!
//! `Loading` waits for `/tabs` while remembering the requested route;
//! `Ready` holds the list and the active page. A tab id that is already
//! displayed is never refetched.

use tabdeck_core::{Location, PartialLocation, TabId, TabListItem};

use crate::effect::{Command, Effect, Run};
use crate::tab;
use crate::transition::Transition;

pub const TAB_LIST_PATH: &str = "/tabs";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    ChooseATab,
    Tab(TabId),
}

/// First segment parsed as a tab id; anything else chooses a tab.
pub fn route_from_location(location: &Location) -> Route {
    location
        .paths
        .first()
        .and_then(|segment| segment.parse::<TabId>().ok())
        .map_or(Route::ChooseATab, Route::Tab)
}

pub fn route_to_location(route: &Route) -> PartialLocation {
    match route {
        Route::ChooseATab => PartialLocation::from_paths(Vec::<String>::new()),
        Route::Tab(id) => PartialLocation::from_paths([id.to_string()]),
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Page {
    ChooseATab,
    Tab(tab::State),
}

#[derive(Debug, Clone, PartialEq)]
pub enum State {
    Loading {
        route: Route,
    },
    Ready {
        tab_list: Vec<TabListItem>,
        page: Page,
    },
    /// The tab list could not be fetched; a route change retries
    Failed {
        error: String,
        route: Route,
    },
}

impl State {
    pub fn tab_list(&self) -> &[TabListItem] {
        match self {
            State::Ready { tab_list, .. } => tab_list,
            State::Loading { .. } | State::Failed { .. } => &[],
        }
    }

    pub fn active_tab(&self) -> Option<&tab::State> {
        match self {
            State::Ready {
                page: Page::Tab(tab),
                ..
            } => Some(tab),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    FetchTabListSuccess(Vec<TabListItem>),
    FetchTabListFailure(String),
    RouteChanged(Route),
    TabMsg(tab::Action),
}

fn fetch_tab_list() -> Effect<Action> {
    Effect::run(
        Run::new(Command::fetch(TAB_LIST_PATH))
            .on_decoded(Action::FetchTabListSuccess)
            .on_failure(|error| Action::FetchTabListFailure(error.to_string())),
    )
}

pub fn init(route: Route) -> Transition<State, Action> {
    Transition::new(State::Loading { route }, fetch_tab_list())
}

pub fn reducer(state: State, action: Action) -> Transition<State, Action> {
    match state {
        State::Loading { route } => loading_reducer(route, action),
        State::Ready { tab_list, page } => ready_reducer(tab_list, page, action),
        State::Failed { error, route } => match action {
            Action::RouteChanged(route) => init(route),
            _ => Transition::pure(State::Failed { error, route }),
        },
    }
}

fn loading_reducer(route: Route, action: Action) -> Transition<State, Action> {
    match action {
        Action::FetchTabListSuccess(tab_list) => change_route(tab_list, Page::ChooseATab, route),
        Action::FetchTabListFailure(error) => Transition::pure(State::Failed { error, route }),
        Action::RouteChanged(route) => Transition::pure(State::Loading { route }),
        Action::TabMsg(_) => Transition::pure(State::Loading { route }),
    }
}

fn ready_reducer(
    tab_list: Vec<TabListItem>,
    page: Page,
    action: Action,
) -> Transition<State, Action> {
    match (action, page) {
        (Action::RouteChanged(route), page) => change_route(tab_list, page, route),
        (Action::TabMsg(action), Page::Tab(tab)) => tab::reducer(tab, action).map_both(
            |tab| State::Ready {
                tab_list,
                page: Page::Tab(tab),
            },
            Action::TabMsg,
        ),
        (_, page) => Transition::pure(State::Ready { tab_list, page }),
    }
}

fn change_route(tab_list: Vec<TabListItem>, page: Page, route: Route) -> Transition<State, Action> {
    match route {
        Route::ChooseATab => Transition::pure(State::Ready {
            tab_list,
            page: Page::ChooseATab,
        }),
        Route::Tab(id) => match page {
            Page::Tab(tab) if tab.id == id => Transition::pure(State::Ready {
                tab_list,
                page: Page::Tab(tab),
            }),
            _ => tab::init(id).map_both(
                |tab| State::Ready {
                    tab_list,
                    page: Page::Tab(tab),
                },
                Action::TabMsg,
            ),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::panels::{single_value, PanelState};
    use tabdeck_core::PanelDescriptor;

    fn tab_list() -> Vec<TabListItem> {
        vec![
            TabListItem {
                id: 1,
                name: "A".to_string(),
            },
            TabListItem {
                id: 5,
                name: "B".to_string(),
            },
        ]
    }

    fn ready_with_tab(id: TabId) -> State {
        reducer(init(Route::Tab(id)).state, Action::FetchTabListSuccess(tab_list())).state
    }

    #[test]
    fn test_route_from_location() {
        assert_eq!(route_from_location(&Location::default()), Route::ChooseATab);
        assert_eq!(route_from_location(&Location::from_paths(["12"])), Route::Tab(12));
        assert_eq!(route_from_location(&Location::from_paths(["-4"])), Route::Tab(-4));
        assert_eq!(route_from_location(&Location::from_paths(["x"])), Route::ChooseATab);
        assert_eq!(route_from_location(&Location::from_paths([""])), Route::ChooseATab);
    }

    #[test]
    fn test_route_round_trips_through_location() {
        for paths in [vec![], vec!["3".to_string()]] {
            let location = Location::from_paths(paths.clone());
            let partial = route_to_location(&route_from_location(&location));
            assert_eq!(partial.paths, Some(paths));
        }
    }

    #[test]
    fn test_init_fetches_tab_list() {
        let t = init(Route::ChooseATab);
        assert_eq!(
            t.state,
            State::Loading {
                route: Route::ChooseATab
            }
        );
        assert_eq!(t.effect.commands(), vec![&Command::fetch("/tabs")]);
    }

    #[test]
    fn test_route_change_while_loading_is_remembered() {
        let t = reducer(init(Route::ChooseATab).state, Action::RouteChanged(Route::Tab(5)));
        assert_eq!(t.state, State::Loading { route: Route::Tab(5) });
        assert!(t.effect.is_none());

        let t = reducer(t.state, Action::FetchTabListSuccess(tab_list()));
        assert_eq!(t.state.active_tab().map(|tab| tab.id), Some(5));
        assert_eq!(t.effect.commands(), vec![&Command::fetch("/tab/5")]);
    }

    #[test]
    fn test_tab_msg_ignored_while_loading() {
        let state = init(Route::ChooseATab).state;
        let t = reducer(state.clone(), Action::TabMsg(tab::Action::Reload));
        assert_eq!(t.state, state);
        assert!(t.effect.is_none());
    }

    #[test]
    fn test_same_tab_route_is_noop() {
        let state = ready_with_tab(5);
        let t = reducer(state.clone(), Action::RouteChanged(Route::Tab(5)));
        assert_eq!(t.state, state);
        assert!(t.effect.is_none());
    }

    #[test]
    fn test_different_tab_route_creates_fresh_tab() {
        let t = reducer(ready_with_tab(5), Action::RouteChanged(Route::Tab(7)));
        let tab = t.state.active_tab().cloned();
        assert_eq!(
            tab,
            Some(tab::State {
                id: 7,
                data: tab::Data::NotLoaded
            })
        );
        assert_eq!(t.effect.commands(), vec![&Command::fetch("/tab/7")]);
    }

    #[test]
    fn test_choose_a_tab_route_drops_tab() {
        let t = reducer(ready_with_tab(5), Action::RouteChanged(Route::ChooseATab));
        assert_eq!(
            t.state,
            State::Ready {
                tab_list: tab_list(),
                page: Page::ChooseATab
            }
        );
    }

    #[test]
    fn test_tab_msg_delegates_to_active_tab() {
        let t = reducer(
            ready_with_tab(1),
            Action::TabMsg(tab::Action::FetchPanelsSuccess(
                1,
                vec![PanelDescriptor::SingleValue { value: 3 }],
            )),
        );
        let panels = t.state.active_tab().map(|tab| tab.panels().to_vec());
        assert_eq!(
            panels,
            Some(vec![PanelState::SingleValue(single_value::initial_state(3))])
        );
    }

    #[test]
    fn test_stale_tab_msg_on_choose_page_is_dropped() {
        let state = reducer(ready_with_tab(1), Action::RouteChanged(Route::ChooseATab)).state;
        let t = reducer(
            state.clone(),
            Action::TabMsg(tab::Action::FetchPanelsSuccess(1, vec![])),
        );
        assert_eq!(t.state, state);
    }

    #[test]
    fn test_failure_then_route_change_retries() {
        let t = reducer(
            init(Route::Tab(1)).state,
            Action::FetchTabListFailure("offline".to_string()),
        );
        assert_eq!(
            t.state,
            State::Failed {
                error: "offline".to_string(),
                route: Route::Tab(1)
            }
        );

        let t = reducer(t.state, Action::RouteChanged(Route::ChooseATab));
        assert_eq!(
            t.state,
            State::Loading {
                route: Route::ChooseATab
            }
        );
        assert_eq!(t.effect.commands(), vec![&Command::fetch("/tabs")]);
    }
}
