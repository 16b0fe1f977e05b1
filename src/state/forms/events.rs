//! Key-to-event mapping for form fields
//!
//! The renderer holds no state, so user interaction is expressed as values:
//! a key event against a descriptor yields the change or blur the caller
//! should dispatch. The mapping never mutates the descriptor.

use super::field::{ControlKind, FieldDescriptor, FieldValue};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Outcome of a key press on a field, for the caller to apply
#[derive(Debug, Clone, PartialEq)]
pub enum FieldEvent {
    /// The value the field would take after this key press
    Changed(FieldValue),
    /// Focus is leaving the field (Tab/BackTab)
    Blurred,
}

/// Map a key event on `field` to a [`FieldEvent`]
///
/// Disabled fields ignore every key. Keys carrying Ctrl or Alt are left to
/// the caller's shortcut handling.
pub fn handle_key(field: &FieldDescriptor, key: KeyEvent) -> Option<FieldEvent> {
    if field.disabled {
        return None;
    }
    if matches!(key.code, KeyCode::Tab | KeyCode::BackTab) {
        return Some(FieldEvent::Blurred);
    }
    if key
        .modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
    {
        return None;
    }

    match field.kind {
        ControlKind::Checkbox => match key.code {
            KeyCode::Char(' ') => Some(FieldEvent::Changed(FieldValue::Bool(!field.checked()))),
            _ => None,
        },
        ControlKind::Radio => match key.code {
            // a radio can be selected but never unselected from the control
            KeyCode::Char(' ') if !field.radio_selected() => {
                Some(FieldEvent::Changed(FieldValue::Bool(true)))
            }
            _ => None,
        },
        ControlKind::Select => match key.code {
            KeyCode::Up => select_adjacent(field, false),
            KeyCode::Down => select_adjacent(field, true),
            _ => None,
        },
        ControlKind::TextArea => match key.code {
            KeyCode::Enter => Some(edited(field, |s| s.push('\n'))),
            KeyCode::Char(c) => Some(edited(field, |s| s.push(c))),
            KeyCode::Backspace => Some(edited(field, |s| {
                s.pop();
            })),
            _ => None,
        },
        // single-line kinds, using the kind's character set
        _ => match key.code {
            KeyCode::Char(c) if accepts_char(field.kind, c) => Some(edited(field, |s| s.push(c))),
            KeyCode::Backspace => Some(edited(field, |s| {
                s.pop();
            })),
            _ => None,
        },
    }
}

fn edited(field: &FieldDescriptor, edit: impl FnOnce(&mut String)) -> FieldEvent {
    let mut text = field.value.display();
    edit(&mut text);
    FieldEvent::Changed(FieldValue::Text(text))
}

fn accepts_char(kind: ControlKind, c: char) -> bool {
    match kind {
        ControlKind::Number => c.is_ascii_digit() || matches!(c, '.' | '-' | '+' | 'e'),
        _ => !c.is_control(),
    }
}

/// Move the selection to the adjacent enabled option, preserving option
/// order and saturating at the ends
fn select_adjacent(field: &FieldDescriptor, forward: bool) -> Option<FieldEvent> {
    let options = &field.options;
    if options.is_empty() {
        return None;
    }
    let next = match (field.selected_option(), forward) {
        (Some(i), true) => (i + 1..options.len()).find(|&j| !options[j].disabled),
        (Some(i), false) => (0..i).rev().find(|&j| !options[j].disabled),
        // nothing selected yet: land on the first enabled option
        (None, _) => (0..options.len()).find(|&j| !options[j].disabled),
    };
    next.map(|j| FieldEvent::Changed(options[j].value.clone()))
}
