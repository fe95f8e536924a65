//! Pure view/render functions for the TUI.
//!
//! Functions here take `&AppState`, draw to a ratatui `Frame`, and never
//! mutate state or return effects.

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::state::{AppState, TuiState, View};
use crate::{editor, login, notification, users};

/// Spinner frames for in-flight requests.
const SPINNER_FRAMES: &[&str] = &["◐", "◓", "◑", "◒"];

/// Ticks per spinner frame.
const SPINNER_SPEED_DIVISOR: usize = 3;

pub fn spinner(tui: &TuiState) -> &'static str {
    SPINNER_FRAMES[(tui.spinner_frame / SPINNER_SPEED_DIVISOR) % SPINNER_FRAMES.len()]
}

/// Renders the entire TUI to the frame.
pub fn render(app: &AppState, frame: &mut Frame) {
    let area = frame.area();
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .split(area);

    render_title(frame, &app.tui, rows[0]);

    let body = inset(rows[1], 1);
    match &app.view {
        View::Login(state) => login::render_login(frame, &app.tui, state, body),
        View::Users(state) => users::render_users(frame, &app.tui, state, body),
        View::Editor(state) => editor::render_editor(frame, &app.tui, state, body),
    }

    render_hints(frame, &app.view, rows[2]);
    notification::render_notification(frame, &app.tui.notification, area);
}

fn render_title(frame: &mut Frame, tui: &TuiState, area: Rect) {
    let line = Line::from(vec![
        Span::styled(
            " EWise ",
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" "),
        Span::styled(tui.route.path(), Style::default().fg(Color::Gray)),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

fn render_hints(frame: &mut Frame, view: &View, area: Rect) {
    let hints = match view {
        View::Login(_) => "Tab switch field · Enter login · Ctrl+X dismiss · Esc quit",
        // The list view draws its own mode-specific footer.
        View::Users(_) => "x dismiss · Ctrl+C quit",
        View::Editor(_) => "Tab next field · Enter save · Ctrl+X dismiss · Esc back",
    };
    frame.render_widget(
        Paragraph::new(Span::styled(hints, Style::default().fg(Color::DarkGray))),
        area,
    );
}

fn inset(area: Rect, margin: u16) -> Rect {
    Rect::new(
        area.x + margin,
        area.y,
        area.width.saturating_sub(margin * 2),
        area.height,
    )
}
