//! User editor view.

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use super::{EditorField, EditorState};
use crate::common::{TaskKind, truncate_with_ellipsis};
use crate::input::{FieldView, render_field};
use crate::render::spinner;
use crate::state::TuiState;

const FORM_WIDTH: u16 = 64;

pub fn render_editor(frame: &mut Frame, tui: &TuiState, editor: &EditorState, area: Rect) {
    let width = FORM_WIDTH.min(area.width);
    let form = Rect::new(area.x + (area.width - width) / 2, area.y, width, area.height);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .title(format!(" Edit User #{} ", editor.id))
        .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD));
    let inner = block.inner(form);
    frame.render_widget(block, form);

    if tui.is_running(TaskKind::UserLoad) {
        frame.render_widget(
            Paragraph::new(Span::styled(
                format!("{} Loading user...", spinner(tui)),
                Style::default().fg(Color::Yellow),
            )),
            inner,
        );
        return;
    }

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(inner);

    let avatar = editor
        .original
        .as_ref()
        .map(|u| u.avatar.as_str())
        .filter(|a| !a.is_empty())
        .unwrap_or("(no avatar)");
    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled("Avatar: ", Style::default().fg(Color::Gray)),
            Span::styled(
                truncate_with_ellipsis(avatar, inner.width.saturating_sub(8) as usize),
                Style::default().fg(Color::DarkGray),
            ),
        ])),
        rows[0],
    );

    let saving = tui.is_running(TaskKind::UserSave);
    let fields = [
        ("First Name", &editor.first_name, EditorField::FirstName),
        ("Last Name", &editor.last_name, EditorField::LastName),
        ("Email", &editor.email, EditorField::Email),
    ];
    for (row, (label, field, kind)) in rows[1..4].iter().zip(fields) {
        render_field(
            frame,
            *row,
            field,
            FieldView {
                label,
                focused: editor.focus == kind,
                masked: false,
                disabled: saving,
            },
        );
    }

    let status = if saving {
        Line::from(Span::styled(
            format!("{} Saving...", spinner(tui)),
            Style::default().fg(Color::Yellow),
        ))
    } else {
        Line::from(vec![
            Span::styled(
                "[ Update User ]",
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled("[ Back to Users: Esc ]", Style::default().fg(Color::Gray)),
        ])
    };
    frame.render_widget(Paragraph::new(status), rows[5]);
}
