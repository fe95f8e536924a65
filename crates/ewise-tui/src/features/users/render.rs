//! User list view.

use ewise_core::api::User;
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use super::{NO_EMAIL, NO_MATCHES, UsersMode, UsersState};
use crate::common::{TaskKind, pad_to_width};
use crate::input::{FieldView, render_field};
use crate::render::spinner;
use crate::state::TuiState;

const ID_WIDTH: usize = 5;
const NAME_WIDTH: usize = 24;

pub fn render_users(frame: &mut Frame, tui: &TuiState, users: &UsersState, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(area);

    render_header(frame, tui, users, rows[0]);
    render_field(
        frame,
        rows[1],
        &users.search,
        FieldView {
            label: "Search (/)",
            focused: users.mode == UsersMode::Search,
            masked: false,
            disabled: false,
        },
    );
    render_table(frame, tui, users, rows[2]);
    render_footer(frame, tui, users, rows[3]);
}

fn render_header(frame: &mut Frame, tui: &TuiState, users: &UsersState, area: Rect) {
    let mut spans = vec![
        Span::styled(
            "Users",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled(
            format!(
                "Page {} of {}",
                users.pagination.page, users.pagination.total_pages
            ),
            Style::default().fg(Color::Gray),
        ),
    ];
    if tui.is_running(TaskKind::UserList) {
        spans.push(Span::raw("  "));
        spans.push(Span::styled(
            format!("{} loading", spinner(tui)),
            Style::default().fg(Color::Yellow),
        ));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_table(frame: &mut Frame, tui: &TuiState, users: &UsersState, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let width = inner.width as usize;
    let email_width = width.saturating_sub(ID_WIDTH + NAME_WIDTH + 2);

    let mut lines = vec![Line::from(Span::styled(
        format!(
            "{} {} {}",
            pad_to_width("ID", ID_WIDTH),
            pad_to_width("Name", NAME_WIDTH),
            pad_to_width("Email", email_width)
        ),
        Style::default()
            .fg(Color::Gray)
            .add_modifier(Modifier::BOLD),
    ))];

    if !users.loaded && tui.is_running(TaskKind::UserList) {
        lines.push(Line::from(Span::styled(
            format!("{} Loading users...", spinner(tui)),
            Style::default().fg(Color::Yellow),
        )));
        frame.render_widget(Paragraph::new(lines), inner);
        return;
    }

    let filtered = users.filtered();
    if filtered.is_empty() {
        lines.push(Line::from(Span::styled(
            NO_MATCHES,
            Style::default().fg(Color::DarkGray),
        )));
        frame.render_widget(Paragraph::new(lines), inner);
        return;
    }

    // Keep the selection in view.
    let visible = (inner.height as usize).saturating_sub(1).max(1);
    let offset = users.selected.saturating_sub(visible - 1);

    for (idx, user) in filtered.iter().enumerate().skip(offset).take(visible) {
        let email = if user.email.is_empty() {
            NO_EMAIL
        } else {
            user.email.as_str()
        };
        let text = format!(
            "{} {} {}",
            pad_to_width(&user.id.to_string(), ID_WIDTH),
            pad_to_width(&user.full_name(), NAME_WIDTH),
            pad_to_width(email, email_width)
        );
        let style = if idx == users.selected {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };
        lines.push(Line::from(Span::styled(text, style)));
    }
    frame.render_widget(Paragraph::new(lines), inner);
}

fn render_footer(frame: &mut Frame, tui: &TuiState, users: &UsersState, area: Rect) {
    let line = match users.mode {
        UsersMode::ConfirmDelete(id) => {
            let name = users
                .users
                .iter()
                .find(|u| u.id == id)
                .map_or_else(|| format!("#{id}"), User::full_name);
            Line::from(vec![
                Span::styled(
                    format!("Are you sure you want to delete {name}? "),
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                ),
                Span::styled("(y/n)", Style::default().fg(Color::Gray)),
            ])
        }
        UsersMode::Search => Line::from(Span::styled(
            "Type to filter · Enter done · Esc clear",
            Style::default().fg(Color::DarkGray),
        )),
        UsersMode::Browse if tui.is_running(TaskKind::UserDelete) => Line::from(Span::styled(
            format!("{} Deleting...", spinner(tui)),
            Style::default().fg(Color::Yellow),
        )),
        UsersMode::Browse => Line::from(Span::styled(
            "↑↓ select · ←→ page · / search · e edit · d delete · r reload · L logout · q quit",
            Style::default().fg(Color::DarkGray),
        )),
    };
    frame.render_widget(Paragraph::new(line), area);
}
