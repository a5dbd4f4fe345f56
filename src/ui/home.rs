//! Home menu rendering

use crate::app::{App, HOME_MENU};
use crate::ui::layout::centered_card;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let card = centered_card(area, 44, (HOME_MENU.len() as u16) + 4);

    let mut lines = vec![Line::from("")];
    for (index, (label, _)) in HOME_MENU.iter().enumerate() {
        let selected = index == app.state.home_selected;
        let style = if selected {
            Style::default().fg(Color::Black).bg(Color::Cyan)
        } else {
            Style::default().fg(Color::Gray)
        };
        let marker = if selected { "▸ " } else { "  " };
        lines.push(Line::from(Span::styled(
            format!(" {marker}{label} "),
            style,
        )));
    }

    let block = Block::default()
        .title(" EduPortal ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    frame.render_widget(Paragraph::new(lines).block(block), card);
}
