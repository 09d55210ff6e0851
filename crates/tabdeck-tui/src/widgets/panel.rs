//! Panel card widget
//!
//! Renders one panel of the active tab inside a bordered card. The focused
//! card gets the active border.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use tabdeck_app::panels::PanelState;

use crate::theme::{palette, styles};

pub struct PanelCard<'a> {
    panel: &'a PanelState,
    focused: bool,
}

impl<'a> PanelCard<'a> {
    pub fn new(panel: &'a PanelState) -> Self {
        Self {
            panel,
            focused: false,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    fn title(&self) -> String {
        let label = self.panel.kind().label();
        if self.panel.is_editing() {
            format!(" {} (editing) ", label)
        } else {
            format!(" {} ", label)
        }
    }

    fn content(&self) -> Line<'a> {
        match self.panel {
            PanelState::Text(text) => {
                let value = Span::styled(
                    text.value.as_str(),
                    Style::default().fg(palette::PANEL_TEXT),
                );
                if text.is_edit_mode_enabled {
                    Line::from(vec![value, Span::styled("▏", styles::accent())])
                } else {
                    Line::from(value)
                }
            }
            PanelState::SingleValue(single) => Line::from(vec![
                Span::styled("‹ ", styles::text_muted()),
                Span::styled(
                    single.value.to_string(),
                    Style::default()
                        .fg(palette::PANEL_VALUE)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(" ›", styles::text_muted()),
            ]),
            PanelState::Animal(animal) => Line::from(Span::styled(
                animal.value.label(),
                Style::default().fg(palette::PANEL_ANIMAL),
            )),
            PanelState::Weather(weather) => {
                let verdict = if weather.is_okay {
                    Span::styled("Okay", styles::status_green())
                } else {
                    Span::styled("Not okay", styles::status_red())
                };
                Line::from(vec![
                    Span::styled("Weather in ", styles::text_secondary()),
                    Span::styled(weather.place.as_str(), styles::text_primary()),
                    Span::raw(": "),
                    verdict,
                ])
            }
        }
    }

    fn hint(&self) -> Option<&'static str> {
        if !self.focused {
            return None;
        }
        match self.panel {
            PanelState::Text(text) if text.is_edit_mode_enabled => Some(" enter: done "),
            PanelState::Text(_) => Some(" enter: edit "),
            PanelState::SingleValue(_) => Some(" +/-: change "),
            PanelState::Animal(_) => Some(" enter: next "),
            PanelState::Weather(_) => None,
        }
    }
}

impl Widget for PanelCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut block = styles::glass_block(self.focused)
            .title(Span::styled(
                self.title(),
                if self.focused {
                    styles::accent_bold()
                } else {
                    styles::text_secondary()
                },
            ))
            .style(Style::default().bg(palette::CARD_BG));

        if let Some(hint) = self.hint() {
            block = block.title_bottom(
                Line::from(Span::styled(hint, styles::text_muted())).right_aligned(),
            );
        }

        let inner = block.inner(area);
        let content = self.content();
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        Paragraph::new(content).render(
            Rect {
                x: inner.x + 1,
                width: inner.width.saturating_sub(1),
                ..inner
            },
            buf,
        );
    }
}
