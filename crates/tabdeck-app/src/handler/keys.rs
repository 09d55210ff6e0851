//! Key event handlers for different UI modes

use crate::app;
use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::{AppState, UiMode};
use crate::tab;
use crate::tabs;

use super::panels::{handle_key_edit_text, handle_key_panel, tab_message};

/// Convert key events to messages based on current UI mode
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    // Ctrl+C quits from every mode
    if key == InputKey::CharCtrl('c') {
        return Some(Message::Quit);
    }

    match state.ui_mode() {
        UiMode::Login => handle_key_login(key),
        UiMode::AddressBar => handle_key_address_bar(key),
        UiMode::EditText => handle_key_edit_text(state, key),
        UiMode::Normal => handle_key_normal(state, key),
    }
}

/// Handle key events on the login form
fn handle_key_login(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Enter => Some(Message::SubmitLogin),
        InputKey::Tab | InputKey::BackTab | InputKey::Up | InputKey::Down => {
            Some(Message::LoginNextField)
        }
        InputKey::Backspace => Some(Message::LoginBackspace),
        InputKey::Char(c) => Some(Message::LoginInput(c)),
        _ => None,
    }
}

/// Handle key events while typing an address
fn handle_key_address_bar(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Enter => Some(Message::SubmitAddressBar),
        InputKey::Esc => Some(Message::CancelAddressBar),
        InputKey::Backspace => Some(Message::AddressBarBackspace),
        InputKey::Char(c) => Some(Message::AddressBarInput(c)),
        _ => None,
    }
}

/// Handle key events in normal mode
fn handle_key_normal(state: &AppState, key: InputKey) -> Option<Message> {
    // The focused panel gets first pick
    if let Some(msg) = handle_key_panel(state, &key) {
        return Some(msg);
    }

    match key {
        InputKey::Char('q') => Some(Message::Quit),

        // Nav links
        InputKey::Char('h') | InputKey::Home => Some(Message::Navigate(app::Route::Welcome)),
        InputKey::Char('t') => Some(Message::Navigate(app::Route::Tabs(
            tabs::Route::ChooseATab,
        ))),
        InputKey::Char('a') => Some(Message::Navigate(app::Route::About)),

        // Tab list links: 1-9 pick the nth tab
        InputKey::Char(c @ '1'..='9') => {
            let n = c.to_digit(10)? as usize;
            let item = state.tab_list().get(n - 1)?;
            Some(Message::Navigate(app::Route::Tabs(tabs::Route::Tab(item.id))))
        }

        // History
        InputKey::Char('b') | InputKey::Backspace => Some(Message::HistoryBack),
        InputKey::Char('f') => Some(Message::HistoryForward),
        InputKey::Char(':' | 'g') => Some(Message::OpenAddressBar),

        // Panel focus
        InputKey::Down | InputKey::Tab | InputKey::Char('j') => Some(Message::FocusNextPanel),
        InputKey::Up | InputKey::BackTab | InputKey::Char('k') => {
            Some(Message::FocusPreviousPanel)
        }

        InputKey::Char('r') if state.active_tab().is_some() => {
            Some(tab_message(tab::Action::Reload))
        }
        InputKey::Char('o') => Some(Message::App(app::Action::SetLoggedIn(false))),

        _ => None,
    }
}
