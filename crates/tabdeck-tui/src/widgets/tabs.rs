//! Tab list widget
//!
//! One entry per tab from `/tabs`, numbered by the key that opens it.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Tabs, Widget},
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use tabdeck_core::{TabId, TabListItem};

use crate::theme::styles;

/// Longest tab name shown before truncation, in columns
const MAX_NAME_WIDTH: usize = 16;

/// Widget displaying the tab list with the active tab highlighted
pub struct TabBar<'a> {
    tab_list: &'a [TabListItem],
    active: Option<TabId>,
}

impl<'a> TabBar<'a> {
    pub fn new(tab_list: &'a [TabListItem]) -> Self {
        Self {
            tab_list,
            active: None,
        }
    }

    pub fn active(mut self, id: Option<TabId>) -> Self {
        self.active = id;
        self
    }

    fn tab_titles(&self) -> Vec<Line<'static>> {
        self.tab_list
            .iter()
            .enumerate()
            .map(|(index, tab)| {
                // Only the first nine tabs have a number key
                let key = if index < 9 {
                    format!("{}", index + 1)
                } else {
                    " ".to_string()
                };
                Line::from(vec![
                    Span::styled(key, styles::keybinding()),
                    Span::raw(format!(" {} ", truncate_name(&tab.name, MAX_NAME_WIDTH))),
                ])
            })
            .collect()
    }

    fn selected_index(&self) -> Option<usize> {
        let active = self.active?;
        self.tab_list.iter().position(|tab| tab.id == active)
    }
}

impl Widget for TabBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let padded_area = Rect {
            x: area.x + 1,
            y: area.y,
            width: area.width.saturating_sub(2),
            height: area.height,
        };

        if self.tab_list.is_empty() {
            Paragraph::new(Span::styled("No tabs", styles::text_muted())).render(padded_area, buf);
            return;
        }

        Tabs::new(self.tab_titles())
            .select(self.selected_index())
            .style(styles::text_secondary())
            .highlight_style(styles::focused_selected())
            .divider("│")
            .render(padded_area, buf);
    }
}

/// Truncate a name to `max_width` columns, adding an ellipsis if needed
fn truncate_name(name: &str, max_width: usize) -> String {
    if name.width() <= max_width {
        return name.to_string();
    }
    if max_width <= 1 {
        return "…".to_string();
    }

    let mut truncated = String::new();
    let mut width = 0;
    for c in name.chars() {
        let char_width = c.width().unwrap_or(0);
        if width + char_width > max_width - 1 {
            break;
        }
        truncated.push(c);
        width += char_width;
    }
    truncated.push('…');
    truncated
}
