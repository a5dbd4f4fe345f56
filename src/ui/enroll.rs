//! Enrollment form rendering

use crate::app::App;
use crate::state::{Form, FormState};
use crate::ui::layout::centered_card;
use crate::ui::widgets::{draw_field, draw_submit_button};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders},
    Frame,
};

pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let FormState::Enroll(form) = &app.state.form else {
        return;
    };

    let card = centered_card(area, 60, 26);
    let block = Block::default()
        .title(" Enroll Now ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(card);
    frame.render_widget(block, card);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Name
            Constraint::Length(3), // Email
            Constraint::Length(3), // Country code + phone
            Constraint::Length(3), // Category
            Constraint::Length(3), // Institution
            Constraint::Length(3), // Consent
            Constraint::Length(1), // Submit
            Constraint::Min(0),
        ])
        .split(inner);

    draw_field(frame, chunks[0], &form.name, form.active_field() == 0, false);
    draw_field(frame, chunks[1], &form.email, form.active_field() == 1, false);

    // Phone row: country-code selector next to the number input
    let phone_row = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(16), Constraint::Min(10)])
        .split(chunks[2]);
    draw_field(
        frame,
        phone_row[0],
        &form.country_code,
        form.active_field() == 2,
        false,
    );
    draw_field(frame, phone_row[1], &form.phone, form.active_field() == 3, false);

    draw_field(frame, chunks[3], &form.course, form.active_field() == 4, false);
    draw_field(
        frame,
        chunks[4],
        &form.institution,
        form.active_field() == 5,
        false,
    );
    draw_field(frame, chunks[5], &form.consent, form.active_field() == 6, false);

    draw_submit_button(frame, chunks[6], "Enroll Now", true);
}
