//! Panel focus and key translation for the active tab

use crate::app;
use crate::input_key::InputKey;
use crate::message::Message;
use crate::panels::{animal, single_value, text, PanelState};
use crate::state::AppState;
use crate::tab;
use crate::tabs;

use super::UpdateResult;

/// Wrap a tab action in the root message namespace
pub fn tab_message(action: tab::Action) -> Message {
    Message::App(app::Action::TabsMsg(tabs::Action::TabMsg(action)))
}

pub fn handle_focus_next(state: &mut AppState) -> UpdateResult {
    let count = state.visible_panels().len();
    if count > 0 {
        state.ui.focused_panel = (state.ui.focused_panel + 1) % count;
    }
    UpdateResult::none()
}

pub fn handle_focus_previous(state: &mut AppState) -> UpdateResult {
    let count = state.visible_panels().len();
    if count > 0 {
        state.ui.focused_panel = (state.ui.focused_panel + count - 1) % count;
    }
    UpdateResult::none()
}

/// Keep the focus inside the visible panels after the tab changed.
pub fn clamp_focus(state: &mut AppState) {
    let count = state.visible_panels().len();
    if state.ui.focused_panel >= count {
        state.ui.focused_panel = count.saturating_sub(1);
    }
}

/// Keys acting on the focused panel in normal mode
pub fn handle_key_panel(state: &AppState, key: &InputKey) -> Option<Message> {
    let (index, panel) = state.focused_panel()?;

    let action = match (panel, key) {
        (PanelState::Text(_), InputKey::Enter) => {
            tab::Action::TextPanelMsg(index, text::Action::SwitchEditMode(true))
        }
        (PanelState::SingleValue(_), InputKey::Char('+' | '=') | InputKey::Right) => {
            tab::Action::SingleValuePanelMsg(index, single_value::Action::Increment)
        }
        (PanelState::SingleValue(_), InputKey::Char('-') | InputKey::Left) => {
            tab::Action::SingleValuePanelMsg(index, single_value::Action::Decrement)
        }
        (PanelState::Animal(_), InputKey::Enter | InputKey::Char(' ')) => {
            tab::Action::AnimalPanelMsg(index, animal::Action::ChangeAnimal)
        }
        _ => return None,
    };

    Some(tab_message(action))
}

/// Keys while the focused text panel is in edit mode
pub fn handle_key_edit_text(state: &AppState, key: InputKey) -> Option<Message> {
    let Some((index, PanelState::Text(panel))) = state.focused_panel() else {
        return None;
    };

    let action = match key {
        InputKey::Char(c) => {
            let mut value = panel.value.clone();
            value.push(c);
            text::Action::ChangeValue(value)
        }
        InputKey::Backspace => {
            let mut value = panel.value.clone();
            value.pop();
            text::Action::ChangeValue(value)
        }
        InputKey::Enter | InputKey::Esc => text::Action::SwitchEditMode(false),
        _ => return None,
    };

    Some(tab_message(tab::Action::TextPanelMsg(index, action)))
}
