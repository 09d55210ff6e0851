//! Login form
//!
//! Any submission logs in; the typed values are never sent anywhere.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use tabdeck_app::state::{LoginField, LoginForm};

use crate::theme::{palette, styles};

use super::modal_overlay;

const WIDTH: u16 = 44;
const HEIGHT: u16 = 9;

pub struct LoginView<'a> {
    form: &'a LoginForm,
}

impl<'a> LoginView<'a> {
    pub fn new(form: &'a LoginForm) -> Self {
        Self { form }
    }

    fn field_line(&self, field: LoginField) -> Line<'static> {
        let focused = self.form.focus == field;
        let (label, value) = match field {
            LoginField::Email => ("Email    ", self.form.email.clone()),
            LoginField::Password => ("Password ", "•".repeat(self.form.password.chars().count())),
        };

        let mut spans = vec![
            Span::styled(
                if focused { "› " } else { "  " },
                styles::accent(),
            ),
            Span::styled(label, styles::text_secondary()),
            Span::styled(value, styles::text_primary()),
        ];
        if focused {
            spans.push(Span::styled("▏", styles::accent()));
        }
        Line::from(spans)
    }
}

impl Widget for LoginView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        modal_overlay::dim_background(buf, area);

        let modal = modal_overlay::centered_rect(WIDTH, HEIGHT, area);
        modal_overlay::clear_area(buf, modal);

        let block = styles::modal_block(" Log in ");
        let inner = block.inner(modal);
        block.render(modal, buf);

        if inner.height < 5 {
            return;
        }

        let rows = Layout::vertical([
            Constraint::Length(1), // Title
            Constraint::Length(1),
            Constraint::Length(1), // Email
            Constraint::Length(1), // Password
            Constraint::Length(1),
            Constraint::Min(1), // Submit hint
        ])
        .split(inner);

        Paragraph::new(Line::from(Span::styled("Omus Logic", styles::accent_bold())).centered())
            .render(rows[0], buf);
        Paragraph::new(self.field_line(LoginField::Email)).render(rows[2], buf);
        Paragraph::new(self.field_line(LoginField::Password)).render(rows[3], buf);
        Paragraph::new(
            Line::from(Span::styled(
                "enter: log in",
                Style::default().fg(palette::TEXT_MUTED),
            ))
            .centered(),
        )
        .render(rows[5], buf);
    }
}
