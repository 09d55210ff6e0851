//! Main update function - handles state transitions (TEA pattern)

use crate::app;
use crate::message::Message;
use crate::state::{AppPhase, AppState, LoginField};

use super::{keys::handle_key, navigation, panels, UpdateResult};

/// Process a message and update state
/// Returns optional follow-up message and/or effect
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Quit => {
            state.phase = AppPhase::Quitting;
            UpdateResult::none()
        }

        Message::Tick => UpdateResult::none(),

        Message::Key(key) => {
            state.ui.notice = None;
            if let Some(msg) = handle_key(state, key) {
                UpdateResult::message(msg)
            } else {
                UpdateResult::none()
            }
        }

        Message::App(action) => update_app(state, action),

        // ─────────────────────────────────────────────────────────
        // Navigation
        // ─────────────────────────────────────────────────────────
        Message::Navigate(route) => navigation::handle_navigate(route),
        Message::RequestLocationChange(location) => {
            navigation::handle_request_location_change(location)
        }
        Message::LocationChanged(location) => {
            navigation::handle_location_changed(state, location)
        }
        Message::HistoryBack => navigation::handle_history_back(),
        Message::HistoryForward => navigation::handle_history_forward(),
        Message::NavigationFailed(error) => {
            state.ui.notice = Some(error);
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Panel Focus
        // ─────────────────────────────────────────────────────────
        Message::FocusNextPanel => panels::handle_focus_next(state),
        Message::FocusPreviousPanel => panels::handle_focus_previous(state),

        // ─────────────────────────────────────────────────────────
        // Address Bar
        // ─────────────────────────────────────────────────────────
        Message::OpenAddressBar => {
            state.ui.address_bar = Some(state.href());
            UpdateResult::none()
        }
        Message::AddressBarInput(c) => {
            if let Some(buffer) = state.ui.address_bar.as_mut() {
                buffer.push(c);
            }
            UpdateResult::none()
        }
        Message::AddressBarBackspace => {
            if let Some(buffer) = state.ui.address_bar.as_mut() {
                buffer.pop();
            }
            UpdateResult::none()
        }
        Message::SubmitAddressBar => navigation::handle_submit_address_bar(state),
        Message::CancelAddressBar => {
            state.ui.address_bar = None;
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Login Form
        // ─────────────────────────────────────────────────────────
        Message::LoginInput(c) => {
            state.ui.login.focused_value_mut().push(c);
            UpdateResult::none()
        }
        Message::LoginBackspace => {
            state.ui.login.focused_value_mut().pop();
            UpdateResult::none()
        }
        Message::LoginNextField => {
            state.ui.login.focus = match state.ui.login.focus {
                LoginField::Email => LoginField::Password,
                LoginField::Password => LoginField::Email,
            };
            UpdateResult::none()
        }
        Message::SubmitLogin => {
            state.ui.login = Default::default();
            UpdateResult::message(Message::App(app::Action::SetLoggedIn(true)))
        }
    }
}

/// Run the component reducer on the app slice and lift its effect.
fn update_app(state: &mut AppState, action: app::Action) -> UpdateResult {
    let app = std::mem::take(&mut state.app);
    let (app, effect) = app::reducer(app, action)
        .map_effect(Message::App)
        .into_parts();
    state.app = app;

    panels::clamp_focus(state);
    UpdateResult::effect(effect)
}
