//! Login view.

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use super::{LoginField, LoginState};
use crate::common::TaskKind;
use crate::input::{FieldView, render_field};
use crate::render::spinner;
use crate::state::TuiState;

const FORM_WIDTH: u16 = 50;
const FORM_HEIGHT: u16 = 13;

pub fn render_login(frame: &mut Frame, tui: &TuiState, login: &LoginState, area: Rect) {
    let width = FORM_WIDTH.min(area.width);
    let height = FORM_HEIGHT.min(area.height);
    let form = Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    );

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .title(" Sign in ")
        .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD));
    let inner = block.inner(form);
    frame.render_widget(block, form);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(inner);

    frame.render_widget(
        Paragraph::new(Span::styled(
            "Log in to manage users",
            Style::default().fg(Color::DarkGray),
        )),
        rows[0],
    );

    let busy = tui.is_running(TaskKind::Login);
    render_field(
        frame,
        rows[1],
        &login.email,
        FieldView {
            label: "Email",
            focused: login.focus == LoginField::Email,
            masked: false,
            disabled: busy,
        },
    );
    render_field(
        frame,
        rows[2],
        &login.password,
        FieldView {
            label: "Password",
            focused: login.focus == LoginField::Password,
            masked: true,
            disabled: busy,
        },
    );

    let status = if busy {
        Line::from(Span::styled(
            format!("{} Logging in...", spinner(tui)),
            Style::default().fg(Color::Yellow),
        ))
    } else {
        Line::from(Span::styled(
            "[ Login ]",
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        ))
    };
    frame.render_widget(Paragraph::new(status), rows[4]);
}
