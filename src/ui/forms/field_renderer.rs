//! Field rendering
//!
//! `draw_field` is a pure function of the descriptor: it paints a labeled
//! control box plus an optional error/help line and never touches state.
//! The error line and the invalid border appear only when the field has
//! both a non-empty error and has been touched; help text fills the line
//! otherwise.

use crate::state::{ControlKind, FieldDescription, FieldDescriptor};
use crate::ui::theme::FieldPalette;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Draw one form field into `area`
///
/// The caller reserves `field.height()` rows; anything less gets clipped
/// from the bottom.
pub fn draw_field(
    frame: &mut Frame,
    area: Rect,
    field: &FieldDescriptor,
    is_active: bool,
    palette: &FieldPalette,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(field.control_height()), Constraint::Min(0)])
        .split(area);

    draw_control(frame, chunks[0], field, is_active, palette);

    if let Some(description) = field.description() {
        draw_description(frame, chunks[1], description, palette);
    }
}

fn draw_control(
    frame: &mut Frame,
    area: Rect,
    field: &FieldDescriptor,
    is_active: bool,
    palette: &FieldPalette,
) {
    // Precedence: error styling wins over the normal/focused styling,
    // the disabled style is patched on, caller overrides are patched last
    let mut chrome = if field.show_error() {
        Style::default().fg(palette.danger)
    } else if is_active {
        Style::default().fg(palette.accent)
    } else {
        Style::default().fg(palette.inactive)
    };
    if field.disabled {
        chrome = chrome.patch(Style::default().add_modifier(Modifier::DIM));
    }
    let border_style = match field.container_style {
        Some(over) => chrome.patch(over),
        None => chrome,
    };

    let mut content_style = Style::default().fg(palette.text);
    if field.disabled {
        content_style = content_style.patch(Style::default().add_modifier(Modifier::DIM));
    }
    if let Some(over) = field.control_style {
        content_style = content_style.patch(over);
    }

    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style);
    // checkbox/radio render their label next to the marker instead
    if !field.kind.has_inline_label() && field.label.is_some() {
        block = block.title(label_line(field, chrome, palette));
    }

    match field.kind {
        ControlKind::Select => {
            let options = Paragraph::new(select_lines(field, content_style, palette)).block(block);
            frame.render_widget(options, area);
        }
        ControlKind::Checkbox => {
            let marker = if field.checked() { "[x] " } else { "[ ] " };
            let toggle = Paragraph::new(toggle_line(field, marker, content_style, palette)).block(block);
            frame.render_widget(toggle, area);
        }
        ControlKind::Radio => {
            let marker = if field.radio_selected() { "(•) " } else { "( ) " };
            let toggle = Paragraph::new(toggle_line(field, marker, content_style, palette)).block(block);
            frame.render_widget(toggle, area);
        }
        _ => {
            let content = Paragraph::new(value_lines(field, is_active, content_style, palette))
                .wrap(Wrap { trim: false })
                .block(block);
            frame.render_widget(content, area);
        }
    }
}

/// Label line for the primary (block title) position
fn label_line(field: &FieldDescriptor, chrome: Style, palette: &FieldPalette) -> Line<'static> {
    let label_style = match field.label_style {
        Some(over) => chrome.patch(over),
        None => chrome,
    };
    let mut spans = vec![Span::raw(" ")];
    if let Some(label) = &field.label {
        spans.push(Span::styled(label.clone(), label_style));
    }
    if field.required {
        spans.push(Span::styled(" *", Style::default().fg(palette.danger)));
    }
    spans.push(Span::raw(" "));
    Line::from(spans)
}

/// Content line for checkbox/radio: marker, then the adjacent label
fn toggle_line(
    field: &FieldDescriptor,
    marker: &str,
    content_style: Style,
    palette: &FieldPalette,
) -> Line<'static> {
    let label_style = match field.label_style {
        Some(over) => content_style.patch(over),
        None => content_style,
    };
    let mut spans = vec![Span::styled(marker.to_string(), content_style)];
    if let Some(label) = &field.label {
        spans.push(Span::styled(label.clone(), label_style));
    }
    if field.required {
        spans.push(Span::styled(" *", Style::default().fg(palette.danger)));
    }
    Line::from(spans)
}

/// One line per option, order preserved, each option's disabled flag honored
fn select_lines(
    field: &FieldDescriptor,
    content_style: Style,
    palette: &FieldPalette,
) -> Vec<Line<'static>> {
    let selected = field.selected_option();
    field
        .options
        .iter()
        .enumerate()
        .map(|(i, option)| {
            let is_selected = selected == Some(i);
            let marker = if is_selected { "› " } else { "  " };
            let style = if option.disabled {
                Style::default()
                    .fg(palette.text_dim)
                    .add_modifier(Modifier::DIM)
            } else if is_selected {
                content_style.patch(Style::default().fg(palette.accent))
            } else {
                content_style
            };
            Line::from(vec![
                Span::styled(marker.to_string(), style),
                Span::styled(option.label.clone(), style),
            ])
        })
        .collect()
}

/// Value lines for single-line and textarea controls, with cursor,
/// placeholder, and password masking
fn value_lines(
    field: &FieldDescriptor,
    is_active: bool,
    content_style: Style,
    palette: &FieldPalette,
) -> Vec<Line<'static>> {
    let display = match field.kind {
        ControlKind::Password => "•".repeat(field.value.display().chars().count()),
        _ => field.value.display(),
    };
    let dim = Style::default().fg(palette.text_dim);
    let cursor = Span::styled("▌", Style::default().fg(palette.accent));

    if field.kind == ControlKind::TextArea {
        let mut lines: Vec<Line> = display
            .lines()
            .map(|l| Line::from(Span::styled(l.to_string(), content_style)))
            .collect();
        // a trailing newline still owns the line the cursor sits on
        if display.ends_with('\n') || lines.is_empty() {
            lines.push(Line::default());
        }
        if is_active {
            if let Some(last) = lines.last_mut() {
                last.spans.push(cursor);
            }
        } else if display.is_empty() {
            if let Some(placeholder) = &field.placeholder {
                lines[0] = Line::from(Span::styled(placeholder.clone(), dim));
            }
        }
        return lines;
    }

    let mut spans = Vec::new();
    if !display.is_empty() {
        spans.push(Span::styled(display.clone(), content_style));
    }
    if is_active {
        spans.push(cursor);
    }
    if display.is_empty() {
        if let Some(placeholder) = &field.placeholder {
            spans.push(Span::styled(placeholder.clone(), dim));
        } else if !is_active {
            spans.push(Span::styled("(empty)", dim));
        }
    }
    vec![Line::from(spans)]
}

/// The line under the control: the error message iff show-error, otherwise
/// help text, never both
fn draw_description(
    frame: &mut Frame,
    area: Rect,
    description: FieldDescription,
    palette: &FieldPalette,
) {
    if area.height == 0 || area.width < 2 {
        return;
    }
    let line = match description {
        FieldDescription::Error(message) => {
            Span::styled(message.to_string(), Style::default().fg(palette.danger))
        }
        FieldDescription::Help(message) => {
            Span::styled(message.to_string(), Style::default().fg(palette.text_dim))
        }
    };
    let line_area = Rect {
        x: area.x + 1,
        y: area.y,
        width: area.width - 1,
        height: 1,
    };
    frame.render_widget(Paragraph::new(line), line_area);
}
