//! Header bar widget
//!
//! Shows the app title, the current href and the address bar hint.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::theme::{palette, styles};

/// Main header showing app title and the current location
pub struct MainHeader<'a> {
    href: &'a str,
    logged_in: bool,
}

impl<'a> MainHeader<'a> {
    pub fn new(href: &'a str) -> Self {
        Self {
            href,
            logged_in: true,
        }
    }

    pub fn logged_in(mut self, logged_in: bool) -> Self {
        self.logged_in = logged_in;
        self
    }
}

impl Widget for MainHeader<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false).style(Style::default().bg(palette::CARD_BG));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let (dot, dot_style) = if self.logged_in {
            ("●", styles::status_green())
        } else {
            ("○", styles::text_muted())
        };

        let left_line = Line::from(vec![
            Span::raw(" "),
            Span::styled(dot, dot_style),
            Span::raw(" "),
            Span::styled("tabdeck", styles::accent_bold()),
            Span::raw(" "),
            Span::styled("›", styles::text_muted()),
            Span::raw(" "),
            Span::styled(self.href, styles::text_secondary()),
        ]);
        let left_width = left_line.width() as u16;

        let right_line = Line::from(vec![
            Span::styled("[g]", styles::keybinding()),
            Span::styled(" address ", styles::text_muted()),
        ]);
        let right_width = right_line.width() as u16;

        Paragraph::new(left_line).render(inner, buf);

        // Shortcut hint only when it does not overlap the href
        if left_width + right_width < inner.width {
            let right_area = Rect {
                x: inner.x + inner.width - right_width,
                y: inner.y,
                width: right_width,
                height: 1,
            };
            Paragraph::new(right_line).render(right_area, buf);
        }
    }
}
