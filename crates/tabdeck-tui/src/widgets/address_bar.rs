//! Address bar overlay
//!
//! Edits an href that is parsed and pushed onto the history on submit.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::theme::styles;

use super::modal_overlay;

/// Width of the overlay, clamped to the screen
const WIDTH: u16 = 60;

pub struct AddressBar<'a> {
    input: &'a str,
}

impl<'a> AddressBar<'a> {
    pub fn new(input: &'a str) -> Self {
        Self { input }
    }
}

impl Widget for AddressBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let modal = modal_overlay::centered_rect(WIDTH, 3, area);
        modal_overlay::clear_area(buf, modal);

        let block = styles::modal_block(" Go to ");
        let inner = block.inner(modal);
        block.render(modal, buf);

        if inner.width == 0 || inner.height == 0 {
            return;
        }

        let line = Line::from(vec![
            Span::styled(" ", styles::text_primary()),
            Span::styled(self.input, styles::text_primary()),
            Span::styled("▏", styles::accent()),
        ]);
        Paragraph::new(line).render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;

    #[test]
    fn test_address_bar_shows_input() {
        let mut term = TestTerminal::new();
        let area = term.area();
        term.render_widget(AddressBar::new("/tabs/3"), area);

        assert!(term.buffer_contains("Go to"));
        assert!(term.buffer_contains("/tabs/3"));
    }
}
