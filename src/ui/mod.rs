//! UI module for rendering the TUI

mod dashboard;
mod enroll;
mod home;
mod layout;
mod login;
mod register;
mod widgets;

use crate::app::App;
use crate::state::View;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(area);

    // Draw main content based on current view
    match app.state.current_view {
        View::Home => home::draw(frame, chunks[0], app),
        View::Enroll => enroll::draw(frame, chunks[0], app),
        View::Login => login::draw(frame, chunks[0], app),
        View::Register => register::draw(frame, chunks[0], app),
        View::Dashboard => dashboard::draw(frame, chunks[0], app),
    }

    // Draw status bar
    layout::draw_status_bar(frame, chunks[1], app);
}
