//! Navigation handlers: route links, history traversal and the address bar

use tabdeck_core::prelude::*;
use tabdeck_core::{Location, NativeLocation};

use crate::app;
use crate::effect::{Command, Effect, Run};
use crate::message::Message;
use crate::state::AppState;

use super::UpdateResult;

/// History command whose failure is reported in the status bar
fn history_effect(command: Command) -> Effect<Message> {
    Effect::run(Run::new(command).on_failure(|e| Message::NavigationFailed(e.to_string())))
}

/// Link activation: turn the route into a location push request.
pub fn handle_navigate(route: app::Route) -> UpdateResult {
    let location = app::route_to_location(&route).to_native();
    UpdateResult::message(Message::RequestLocationChange(location))
}

pub fn handle_request_location_change(location: NativeLocation) -> UpdateResult {
    UpdateResult::effect(history_effect(Command::PushLocation(location)))
}

pub fn handle_history_back() -> UpdateResult {
    UpdateResult::effect(history_effect(Command::HistoryBack))
}

pub fn handle_history_forward() -> UpdateResult {
    UpdateResult::effect(history_effect(Command::HistoryForward))
}

/// The history moved: record the location and re-resolve the app route.
pub fn handle_location_changed(state: &mut AppState, location: Location) -> UpdateResult {
    let route = app::route_from_location(&location);
    if app::route_from_location(&state.location) != route {
        state.ui.focused_panel = 0;
    }
    state.location = location;

    UpdateResult::message(Message::App(app::Action::RouteChanged(route)))
}

pub fn handle_submit_address_bar(state: &mut AppState) -> UpdateResult {
    let Some(href) = state.ui.address_bar.take() else {
        return UpdateResult::none();
    };

    match NativeLocation::parse_href(&href) {
        Ok(location) => UpdateResult::message(Message::RequestLocationChange(location)),
        Err(e) => {
            warn!("Rejected address {:?}: {}", href, e);
            state.ui.notice = Some(e.to_string());
            UpdateResult::none()
        }
    }
}
