//! Top-level dashboard component
//!
//! Owns the login gate, the feature flags and the routed page. The flags
//! are fetched once at startup alongside the initial route resolution.

use tabdeck_core::{FeatureFlags, Location, PartialLocation};

use crate::effect::{Command, Effect, Run};
use crate::tabs;
use crate::transition::Transition;

pub const FEATURE_FLAGS_PATH: &str = "/feature-flags";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Welcome,
    Tabs(tabs::Route),
    About,
    NotFound,
}

pub fn route_from_location(location: &Location) -> Route {
    match location.paths.first().map(String::as_str) {
        None | Some("") => Route::Welcome,
        Some("tabs") => Route::Tabs(tabs::route_from_location(&location.without_prefix(1))),
        Some("about") => Route::About,
        Some(_) => Route::NotFound,
    }
}

pub fn route_to_location(route: &Route) -> PartialLocation {
    match route {
        Route::Welcome => PartialLocation::from_paths([""]),
        Route::Tabs(route) => tabs::route_to_location(route).with_prefix("tabs"),
        Route::About => PartialLocation::from_paths(["about"]),
        Route::NotFound => PartialLocation::from_paths(["not-found"]),
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Page {
    Welcome,
    Tabs(tabs::State),
    About,
    NotFound,
}

#[derive(Debug, Clone, PartialEq)]
pub struct State {
    pub is_logged_in: bool,
    pub page: Page,
    pub flags: FeatureFlags,
    /// Set when the feature-flag fetch failed; defaults stay in effect
    pub flags_error: Option<String>,
}

impl Default for State {
    fn default() -> Self {
        Self {
            is_logged_in: true,
            page: Page::Welcome,
            flags: FeatureFlags::default(),
            flags_error: None,
        }
    }
}

impl State {
    pub fn weather_reports_enabled(&self) -> bool {
        self.flags.weather_reports
    }

    pub fn tabs(&self) -> Option<&tabs::State> {
        match &self.page {
            Page::Tabs(tabs) => Some(tabs),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    SetLoggedIn(bool),
    RouteChanged(Route),
    TabsMsg(tabs::Action),
    FetchFeatureFlagsSuccess(FeatureFlags),
    FetchFeatureFlagsFailure(String),
}

fn fetch_feature_flags() -> Effect<Action> {
    Effect::run(
        Run::new(Command::fetch(FEATURE_FLAGS_PATH))
            .on_decoded(Action::FetchFeatureFlagsSuccess)
            .on_failure(|error| Action::FetchFeatureFlagsFailure(error.to_string())),
    )
}

/// Resolve the initial route and fetch the feature flags.
///
/// The route's effect runs before the flag fetch.
pub fn init(route: Route, require_login: bool) -> Transition<State, Action> {
    let state = State {
        is_logged_in: !require_login,
        ..State::default()
    };
    change_route(state, route).with_effect(fetch_feature_flags())
}

pub fn reducer(state: State, action: Action) -> Transition<State, Action> {
    match action {
        Action::SetLoggedIn(is_logged_in) => Transition::pure(State {
            is_logged_in,
            ..state
        }),
        Action::RouteChanged(route) => change_route(state, route),
        Action::TabsMsg(action) => lift_tabs(state, action),
        Action::FetchFeatureFlagsSuccess(flags) => Transition::pure(State {
            flags,
            flags_error: None,
            ..state
        }),
        Action::FetchFeatureFlagsFailure(error) => Transition::pure(State {
            flags_error: Some(error),
            ..state
        }),
    }
}

fn lift_tabs(state: State, action: tabs::Action) -> Transition<State, Action> {
    let State {
        is_logged_in,
        page,
        flags,
        flags_error,
    } = state;

    match page {
        Page::Tabs(tabs) => tabs::reducer(tabs, action).map_both(
            |tabs| State {
                is_logged_in,
                page: Page::Tabs(tabs),
                flags,
                flags_error,
            },
            Action::TabsMsg,
        ),
        page => Transition::pure(State {
            is_logged_in,
            page,
            flags,
            flags_error,
        }),
    }
}

fn change_route(state: State, route: Route) -> Transition<State, Action> {
    match route {
        Route::Welcome => Transition::pure(State {
            page: Page::Welcome,
            ..state
        }),
        Route::Tabs(route) => match state.page {
            Page::Tabs(_) => lift_tabs(state, tabs::Action::RouteChanged(route)),
            _ => tabs::init(route).map_both(
                |tabs| State {
                    page: Page::Tabs(tabs),
                    ..state
                },
                Action::TabsMsg,
            ),
        },
        Route::About => Transition::pure(State {
            page: Page::About,
            ..state
        }),
        Route::NotFound => Transition::pure(State {
            page: Page::NotFound,
            ..state
        }),
    }
}
