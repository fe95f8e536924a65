//! Labeled input field rendering.

use ratatui::Frame;
use ratatui::layout::{Position, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use super::TextField;
use crate::common::truncate_with_ellipsis;

/// How a field should be drawn.
#[derive(Debug, Clone, Copy)]
pub struct FieldView<'a> {
    pub label: &'a str,
    pub focused: bool,
    /// Renders each char as `•`
    pub masked: bool,
    pub disabled: bool,
}

/// Renders a bordered field and places the cursor when focused.
///
/// Expects an area at least 3 rows tall.
pub fn render_field(frame: &mut Frame, area: Rect, field: &TextField, view: FieldView<'_>) {
    let border_color = if view.disabled {
        Color::DarkGray
    } else if view.focused {
        Color::Cyan
    } else {
        Color::Gray
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color))
        .title(Span::styled(
            format!(" {} ", view.label),
            Style::default()
                .fg(border_color)
                .add_modifier(Modifier::BOLD),
        ));

    let inner_width = area.width.saturating_sub(2) as usize;
    let shown = if view.masked {
        "•".repeat(field.value().chars().count())
    } else {
        field.value().to_string()
    };
    let cursor_col = if view.masked {
        field.cursor()
    } else {
        field.cursor_column()
    };

    // Scroll horizontally so the cursor stays visible.
    let (text, cursor_x) = if cursor_col < inner_width {
        (truncate_with_ellipsis(&shown, inner_width), cursor_col)
    } else {
        let skip = cursor_col + 1 - inner_width;
        let tail: String = shown.chars().skip(skip).collect();
        (truncate_with_ellipsis(&tail, inner_width), inner_width - 1)
    };

    let style = if view.disabled {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default().fg(Color::White)
    };
    let para = Paragraph::new(Line::from(Span::styled(text, style))).block(block);
    frame.render_widget(para, area);

    if view.focused && !view.disabled && area.height >= 3 && inner_width > 0 {
        frame.set_cursor_position(Position::new(area.x + 1 + cursor_x as u16, area.y + 1));
    }
}
