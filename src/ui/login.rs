//! Login form rendering

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
    let FormState::Login(form) = &app.state.form else {
        return;
    };

    let card = centered_card(area, 48, 11);
    let block = Block::default()
        .title(" Login ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(card);
    frame.render_widget(block, card);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Email
            Constraint::Length(3), // Password
            Constraint::Length(1), // Submit
            Constraint::Min(0),
        ])
        .split(inner);

    draw_field(frame, chunks[0], &form.email, form.active_field() == 0, false);
    draw_field(
        frame,
        chunks[1],
        &form.password,
        form.active_field() == 1,
        false,
    );

    // The trigger is rendered inert while the request is in flight
    let submitting = form.phase.is_submitting();
    let label = if submitting { "Logging in..." } else { "Login" };
    draw_submit_button(frame, chunks[2], label, !submitting);
}
