//! Dashboard rendering for the signed-in student

use crate::app::App;
use crate::ui::layout::centered_card;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let card = centered_card(area, 52, 8);
    let block = Block::default()
        .title(" Dashboard ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let lines = match app.state.auth.current_user() {
        Some(user) => {
            let name = if user.full_name.is_empty() {
                user.email.as_str()
            } else {
                user.full_name.as_str()
            };
            vec![
                Line::from(""),
                Line::from(Span::styled(
                    format!("  Welcome, {name}!"),
                    Style::default().fg(Color::Green),
                )),
                Line::from(format!("  Email: {}", user.email)),
            ]
        }
        None => vec![
            Line::from(""),
            Line::from(Span::styled(
                "  Not signed in.",
                Style::default().fg(Color::DarkGray),
            )),
        ],
    };

    frame.render_widget(Paragraph::new(lines).block(block), card);
}
