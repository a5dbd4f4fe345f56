//! Shared layout helpers and the status bar

use crate::app::App;
use crate::state::{ToastLevel, View};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Center a fixed-size card inside the given area
pub fn centered_card(area: Rect, width: u16, height: u16) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(height.min(area.height)),
            Constraint::Min(0),
        ])
        .split(area);

    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(width.min(area.width)),
            Constraint::Min(0),
        ])
        .split(vertical[1]);

    horizontal[1]
}

/// Draw the bottom status bar: the active toast when present, key hints
/// otherwise
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let line = if let Some(toast) = &app.state.toast {
        let color = match toast.level {
            ToastLevel::Success => Color::Green,
            ToastLevel::Error => Color::Red,
        };
        Line::from(Span::styled(
            format!(" {} ", toast.message),
            Style::default().fg(Color::Black).bg(color),
        ))
    } else {
        let hints = match app.state.current_view {
            View::Home => "↑/↓ select · Enter open · q quit",
            View::Enroll | View::Login => {
                "Tab next field · ◂ ▸ change option · Enter submit · Esc back"
            }
            View::Register => {
                "Tab next field · Ctrl+P show/hide password · Enter submit · Esc back"
            }
            View::Dashboard => "l logout · Esc back",
        };
        Line::from(Span::styled(
            format!(" {hints}"),
            Style::default().fg(Color::DarkGray),
        ))
    };

    frame.render_widget(Paragraph::new(line), area);
}
