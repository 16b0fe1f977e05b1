//! Profile form rendering

use super::field_renderer::draw_field;
use crate::app::{App, RESET_BUTTON, SUBMIT_BUTTON};
use crate::platform;
use crate::ui::components::{render_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Draw the profile form: every field through the field renderer, then the
/// button row and the key-hint line
pub fn draw_form(frame: &mut Frame, area: Rect, app: &App) {
    let palette = &app.palette;

    // Form border follows focus: dimmed while the button row is active
    let border_color = if app.button_row_active {
        palette.inactive
    } else {
        palette.accent
    };
    let block = Block::default()
        .title(" Profile ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));
    frame.render_widget(block, area);

    let mut constraints: Vec<Constraint> = app
        .form
        .fields
        .iter()
        .map(|f| Constraint::Length(f.height()))
        .collect();
    constraints.push(Constraint::Length(BUTTON_HEIGHT));
    constraints.push(Constraint::Length(1)); // key hints
    constraints.push(Constraint::Min(0));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .margin(1)
        .split(area);

    for (i, field) in app.form.fields.iter().enumerate() {
        let is_active = !app.button_row_active && app.form.active_field() == i;
        draw_field(frame, chunks[i], field, is_active, palette);
    }

    draw_buttons(frame, chunks[app.form.field_count()], app);

    if app.config.show_key_hints() {
        draw_key_hints(frame, chunks[app.form.field_count() + 1], app);
    }
}

fn draw_buttons(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(12),
            Constraint::Length(11),
            Constraint::Min(0),
        ])
        .split(area);

    render_button(
        frame,
        chunks[0],
        "Submit",
        app.button_row_active && app.selected_button == SUBMIT_BUTTON,
        true,
        &app.palette,
    );
    render_button(
        frame,
        chunks[1],
        "Reset",
        app.button_row_active && app.selected_button == RESET_BUTTON,
        true,
        &app.palette,
    );
}

fn draw_key_hints(frame: &mut Frame, area: Rect, app: &App) {
    let accent = Style::default().fg(app.palette.accent);
    let hints = Paragraph::new(Line::from(vec![
        Span::styled("Tab", accent),
        Span::raw(": next field  "),
        Span::styled("Space", accent),
        Span::raw(": toggle  "),
        Span::styled(platform::SUBMIT_SHORTCUT, accent),
        Span::raw(": submit  "),
        Span::styled("Esc", accent),
        Span::raw(": quit"),
    ]))
    .style(Style::default().fg(app.palette.text_dim));
    frame.render_widget(hints, area);
}
