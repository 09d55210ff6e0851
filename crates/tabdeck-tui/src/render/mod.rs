//! Main render/view function (View in TEA pattern)


use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};
use ratatui::Frame;

use tabdeck_app::app;
use tabdeck_app::state::AppState;
use tabdeck_app::tab;
use tabdeck_app::tabs;

use super::{layout, widgets};
use crate::theme::{palette, styles};

/// Render the complete UI (View function in TEA)
///
/// Pure rendering: reads the state, never changes it.
pub fn view(frame: &mut Frame, state: &AppState) {
    let area = frame.area();

    let bg_block = Block::default().style(Style::default().bg(palette::DEEPEST_BG));
    frame.render_widget(bg_block, area);

    let areas = layout::create(area);
    let href = state.href();

    frame.render_widget(
        widgets::MainHeader::new(&href).logged_in(state.app.is_logged_in),
        areas.header,
    );

    if !state.app.is_logged_in {
        frame.render_widget(widgets::LoginView::new(&state.ui.login), areas.body);
        frame.render_widget(widgets::StatusBar::new(state), areas.status);
        return;
    }

    frame.render_widget(widgets::NavBar::new(&state.app.page), areas.nav);

    match &state.app.page {
        app::Page::Welcome => render_message(frame, areas.body, "Welcome", styles::text_primary()),
        app::Page::About => render_about(frame, areas.body),
        app::Page::NotFound => {
            render_message(frame, areas.body, "NotFound", styles::status_yellow())
        }
        app::Page::Tabs(tabs_state) => render_tabs(frame, areas.body, state, tabs_state),
    }

    frame.render_widget(widgets::StatusBar::new(state), areas.status);

    if let Some(input) = &state.ui.address_bar {
        frame.render_widget(widgets::AddressBar::new(input), area);
    }
}

fn render_message(frame: &mut Frame, area: Rect, text: &str, style: Style) {
    let padded = padded(area);
    frame.render_widget(Paragraph::new(Span::styled(text.to_string(), style)), padded);
}

fn render_about(frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(Span::styled("About", styles::accent_bold())),
        Line::from(""),
        Line::from(Span::styled(
            "A tab-based dashboard. Tabs and their panels come from the backend;",
            styles::text_secondary(),
        )),
        Line::from(Span::styled(
            "every screen has an address you can go back and forward through.",
            styles::text_secondary(),
        )),
    ];
    frame.render_widget(Paragraph::new(lines), padded(area));
}

fn render_tabs(frame: &mut Frame, area: Rect, state: &AppState, tabs_state: &tabs::State) {
    match tabs_state {
        tabs::State::Loading { .. } => {
            render_message(frame, area, "Loading", styles::text_muted());
        }
        tabs::State::Failed { error, .. } => {
            render_failure(frame, area, "Could not load the tab list", error, "t");
        }
        tabs::State::Ready { tab_list, page } => {
            let (list_area, content_area) = layout::tabs_page(area);
            let active = match page {
                tabs::Page::Tab(tab) => Some(tab.id),
                tabs::Page::ChooseATab => None,
            };
            frame.render_widget(widgets::TabBar::new(tab_list).active(active), list_area);

            match page {
                tabs::Page::ChooseATab => render_message(
                    frame,
                    content_area,
                    "Choose a tab from the list above",
                    styles::text_secondary(),
                ),
                tabs::Page::Tab(tab) => render_tab(frame, content_area, state, tab),
            }
        }
    }
}

fn render_tab(frame: &mut Frame, area: Rect, state: &AppState, tab: &tab::State) {
    match &tab.data {
        tab::Data::NotLoaded => render_message(frame, area, "Loading", styles::text_muted()),
        tab::Data::Failed { error } => {
            render_failure(frame, area, "Could not load this tab", error, "r");
        }
        tab::Data::Success(_) => {
            let visible = state.visible_panels();
            if visible.is_empty() {
                render_message(frame, area, "This tab has no panels", styles::text_muted());
                return;
            }

            let cards = layout::panel_stack(padded(area), visible.len());
            for (position, ((_, panel), card)) in visible.iter().zip(cards).enumerate() {
                let focused = position == state.ui.focused_panel;
                frame.render_widget(widgets::PanelCard::new(panel).focused(focused), card);
            }
        }
    }
}

fn render_failure(frame: &mut Frame, area: Rect, what: &str, error: &str, retry_key: &str) {
    let lines = vec![
        Line::from(Span::styled(what.to_string(), styles::status_red())),
        Line::from(Span::styled(error.to_string(), styles::text_muted())),
        Line::from(vec![
            Span::styled("press ", styles::text_muted()),
            Span::styled(retry_key.to_string(), styles::keybinding()),
            Span::styled(" to retry", styles::text_muted()),
        ]),
    ];
    frame.render_widget(Paragraph::new(lines), padded(area));
}

/// Area inset by one column on both sides
fn padded(area: Rect) -> Rect {
    Rect {
        x: area.x + 1,
        width: area.width.saturating_sub(2),
        ..area
    }
}
