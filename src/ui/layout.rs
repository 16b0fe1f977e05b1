//! Screen layout and status bar

use crate::app::App;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Split the screen into the main area and a one-line status bar
pub fn create_layout(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(area);
    (chunks[0], chunks[1])
}

/// Draw the status bar: the latest status message, or an idle hint
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let line = match &app.status_message {
        Some(message) => Line::from(Span::styled(
            message.clone(),
            Style::default().fg(app.palette.accent),
        )),
        None => Line::from(Span::styled(
            "formkit - fill in the form and submit",
            Style::default().fg(app.palette.text_dim),
        )),
    };
    frame.render_widget(Paragraph::new(line), area);
}
