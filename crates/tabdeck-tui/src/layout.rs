//! Screen layout definitions for the TUI
//!
//! Header with the address line, a navigation row, the routed page body and
//! a one-line status bar.

use ratatui::layout::{Constraint, Layout, Rect};

/// Height of one panel card (top border + content + bottom border)
pub const PANEL_HEIGHT: u16 = 3;

/// Screen areas for the main layout
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    /// Title and current href (glass container)
    pub header: Rect,

    /// Top-level route links
    pub nav: Rect,

    /// Routed page content
    pub body: Rect,

    /// Notice or key hints
    pub status: Rect,
}

pub fn create(area: Rect) -> ScreenAreas {
    let chunks = Layout::vertical([
        Constraint::Length(3), // Header
        Constraint::Length(1), // Nav
        Constraint::Min(3),    // Body
        Constraint::Length(1), // Status
    ])
    .split(area);

    ScreenAreas {
        header: chunks[0],
        nav: chunks[1],
        body: chunks[2],
        status: chunks[3],
    }
}

/// Split the tabs page body into the tab list row and the tab content.
pub fn tabs_page(body: Rect) -> (Rect, Rect) {
    let chunks = Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).split(body);
    (chunks[0], chunks[1])
}

/// Stack `count` panel cards from the top of `area`.
///
/// Cards that do not fit are dropped.
pub fn panel_stack(area: Rect, count: usize) -> Vec<Rect> {
    let fitting = (area.height / PANEL_HEIGHT) as usize;
    let shown = count.min(fitting);

    let mut constraints = vec![Constraint::Length(PANEL_HEIGHT); shown];
    constraints.push(Constraint::Min(0));

    let chunks = Layout::vertical(constraints).split(area);
    chunks.iter().take(shown).copied().collect()
}
