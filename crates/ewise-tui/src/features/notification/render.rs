//! Notification view.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

use super::{NotificationKind, NotificationState};
use crate::common::display_width;

const MAX_WIDTH: u16 = 48;

/// Renders the visible notification in the top-right corner.
pub fn render_notification(frame: &mut Frame, state: &NotificationState, area: Rect) {
    let Some(notification) = state.current() else {
        return;
    };

    let color = match notification.kind {
        NotificationKind::Success => Color::Green,
        NotificationKind::Error => Color::Red,
    };

    let text_width = display_width(&notification.message) as u16;
    let width = (text_width + 4).clamp(20, MAX_WIDTH).min(area.width);
    let inner_width = width.saturating_sub(2).max(1);
    let lines = text_width.div_ceil(inner_width).max(1);
    let height = (lines + 2).min(area.height);
    let popup = Rect::new(
        area.x + area.width.saturating_sub(width + 1),
        area.y + 1,
        width,
        height,
    );

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color))
        .title_bottom(Span::styled(" x ", Style::default().fg(Color::DarkGray)));
    let para = Paragraph::new(Line::from(Span::styled(
        notification.message.clone(),
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    )))
    .wrap(Wrap { trim: true })
    .block(block);

    frame.render_widget(Clear, popup);
    frame.render_widget(para, popup);
}
