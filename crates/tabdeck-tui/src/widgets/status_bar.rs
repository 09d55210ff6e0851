//! Status bar widget
//!
//! Shows the one-shot notice when there is one, otherwise the key hints for
//! the current input mode.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use tabdeck_app::state::{AppState, UiMode};

use crate::theme::styles;

pub struct StatusBar<'a> {
    state: &'a AppState,
}

impl<'a> StatusBar<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    fn hints(&self) -> &'static [(&'static str, &'static str)] {
        match self.state.ui_mode() {
            UiMode::Login => &[("tab", "field"), ("enter", "log in"), ("ctrl-c", "quit")],
            UiMode::AddressBar => &[("enter", "go"), ("esc", "cancel")],
            UiMode::EditText => &[("enter", "done"), ("esc", "done")],
            UiMode::Normal if self.state.active_tab().is_some() => &[
                ("1-9", "tab"),
                ("j/k", "focus"),
                ("r", "reload"),
                ("b/f", "back/forward"),
                ("o", "log out"),
                ("q", "quit"),
            ],
            UiMode::Normal => &[
                ("h/t/a", "pages"),
                ("b/f", "back/forward"),
                ("o", "log out"),
                ("q", "quit"),
            ],
        }
    }

    fn hint_line(&self) -> Line<'static> {
        let mut spans = Vec::new();
        for (key, action) in self.hints() {
            spans.push(Span::styled(format!(" {}", key), styles::keybinding()));
            spans.push(Span::styled(format!(" {} ", action), styles::text_muted()));
        }
        Line::from(spans)
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let line = if let Some(notice) = &self.state.ui.notice {
            Line::from(vec![
                Span::styled(" ! ", styles::status_yellow()),
                Span::styled(notice.clone(), styles::text_primary()),
            ])
        } else if let Some(error) = &self.state.app.flags_error {
            Line::from(vec![
                Span::styled(" feature flags unavailable: ", styles::status_red()),
                Span::styled(error.clone(), styles::text_muted()),
            ])
        } else if self.state.settings.ui.show_hints {
            self.hint_line()
        } else {
            return;
        };

        Paragraph::new(line).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{create_test_state, TestTerminal};

    fn render(state: &AppState) -> TestTerminal {
        let mut term = TestTerminal::with_size(100, 1);
        term.render_widget(StatusBar::new(state), Rect::new(0, 0, 100, 1));
        term
    }

    #[test]
    fn test_normal_hints() {
        let term = render(&create_test_state());
        assert!(term.buffer_contains("quit"));
        assert!(term.buffer_contains("back/forward"));
    }

    #[test]
    fn test_notice_replaces_hints() {
        let mut state = create_test_state();
        state.ui.notice = Some("Not a valid address: ::".to_string());
        let term = render(&state);
        assert!(term.buffer_contains("Not a valid address"));
        assert!(!term.buffer_contains("quit"));
    }

    #[test]
    fn test_login_hints() {
        let mut state = create_test_state();
        state.app.is_logged_in = false;
        assert!(render(&state).buffer_contains("log in"));
    }

    #[test]
    fn test_hints_can_be_disabled() {
        let mut state = create_test_state();
        state.settings.ui.show_hints = false;
        assert!(!render(&state).buffer_contains("quit"));
    }

    #[test]
    fn test_flags_error_is_shown() {
        let mut state = create_test_state();
        state.app.flags_error = Some("HTTP 500".to_string());
        assert!(render(&state).buffer_contains("feature flags unavailable"));
    }
}
