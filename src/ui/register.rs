//! Registration form rendering

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
    let FormState::Register(form) = &app.state.form else {
        return;
    };

    let card = centered_card(area, 56, 26);
    let block = Block::default()
        .title(" Student Registration ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(card);
    frame.render_widget(block, card);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Full name
            Constraint::Length(3), // Date of birth
            Constraint::Length(3), // Gender
            Constraint::Length(3), // Email
            Constraint::Length(3), // Mobile number
            Constraint::Length(3), // Password + confirm
            Constraint::Length(1), // Submit
            Constraint::Min(0),
        ])
        .split(inner);

    draw_field(
        frame,
        chunks[0],
        &form.full_name,
        form.active_field() == 0,
        false,
    );
    draw_field(
        frame,
        chunks[1],
        &form.date_of_birth,
        form.active_field() == 1,
        false,
    );
    draw_field(frame, chunks[2], &form.gender, form.active_field() == 2, false);
    draw_field(frame, chunks[3], &form.email, form.active_field() == 3, false);
    draw_field(
        frame,
        chunks[4],
        &form.mobile_number,
        form.active_field() == 4,
        false,
    );

    // The reveal toggle only affects the password field, not its confirmation
    let password_row = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[5]);
    draw_field(
        frame,
        password_row[0],
        &form.password,
        form.active_field() == 5,
        form.show_password,
    );
    draw_field(
        frame,
        password_row[1],
        &form.confirm_password,
        form.active_field() == 6,
        false,
    );

    draw_submit_button(frame, chunks[6], "Submit", true);
}
