//! Top-level route links

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Tabs, Widget},
};

use tabdeck_app::app;

use crate::theme::styles;

const LINKS: [(&str, &str); 3] = [("h", "Welcome"), ("t", "Tabs"), ("a", "About")];

/// Navigation row highlighting the active top-level page
pub struct NavBar<'a> {
    page: &'a app::Page,
}

impl<'a> NavBar<'a> {
    pub fn new(page: &'a app::Page) -> Self {
        Self { page }
    }

    fn selected(&self) -> Option<usize> {
        match self.page {
            app::Page::Welcome => Some(0),
            app::Page::Tabs(_) => Some(1),
            app::Page::About => Some(2),
            app::Page::NotFound => None,
        }
    }
}

impl Widget for NavBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let titles: Vec<Line<'static>> = LINKS
            .iter()
            .map(|(key, label)| {
                Line::from(vec![
                    Span::styled(format!("[{}]", key), styles::keybinding()),
                    Span::raw(format!(" {} ", label)),
                ])
            })
            .collect();

        let padded_area = Rect {
            x: area.x + 1,
            y: area.y,
            width: area.width.saturating_sub(2),
            height: area.height,
        };

        Tabs::new(titles)
            .select(self.selected())
            .style(styles::text_secondary())
            .highlight_style(styles::focused_selected())
            .divider("│")
            .render(padded_area, buf);
    }
}
