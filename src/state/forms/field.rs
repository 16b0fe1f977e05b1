//! Form field descriptor model

use ratatui::style::Style;
use std::str::FromStr;
use thiserror::Error;

/// Default row count for textarea controls when no override is given
pub const TEXTAREA_DEFAULT_ROWS: u16 = 3;

/// Control variant for a form field
///
/// Covers the native single-line input kinds plus the structural variants
/// (textarea, select, checkbox, radio). Unknown kind names fall back to
/// `Text` via [`ControlKind::parse_lossy`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ControlKind {
    #[default]
    Text,
    Email,
    Password,
    Number,
    Tel,
    Url,
    Date,
    Time,
    DateTimeLocal,
    Month,
    Week,
    Checkbox,
    Radio,
    TextArea,
    Select,
    Color,
}

impl ControlKind {
    /// Parse a kind name, falling back to the default single-line variant
    /// for unknown names
    pub fn parse_lossy(name: &str) -> Self {
        name.parse().unwrap_or_default()
    }

    /// Whether the label renders adjacent to the control marker instead of
    /// in the primary label position
    pub fn has_inline_label(self) -> bool {
        matches!(self, ControlKind::Checkbox | ControlKind::Radio)
    }

    /// Canonical kind name
    pub fn as_str(self) -> &'static str {
        match self {
            ControlKind::Text => "text",
            ControlKind::Email => "email",
            ControlKind::Password => "password",
            ControlKind::Number => "number",
            ControlKind::Tel => "tel",
            ControlKind::Url => "url",
            ControlKind::Date => "date",
            ControlKind::Time => "time",
            ControlKind::DateTimeLocal => "datetime-local",
            ControlKind::Month => "month",
            ControlKind::Week => "week",
            ControlKind::Checkbox => "checkbox",
            ControlKind::Radio => "radio",
            ControlKind::TextArea => "textarea",
            ControlKind::Select => "select",
            ControlKind::Color => "color",
        }
    }
}

/// Error returned when a kind name is not recognized
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown control kind `{0}`")]
pub struct ParseControlKindError(String);

impl FromStr for ControlKind {
    type Err = ParseControlKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" => Ok(ControlKind::Text),
            "email" => Ok(ControlKind::Email),
            "password" => Ok(ControlKind::Password),
            "number" => Ok(ControlKind::Number),
            "tel" => Ok(ControlKind::Tel),
            "url" => Ok(ControlKind::Url),
            "date" => Ok(ControlKind::Date),
            "time" => Ok(ControlKind::Time),
            "datetime-local" => Ok(ControlKind::DateTimeLocal),
            "month" => Ok(ControlKind::Month),
            "week" => Ok(ControlKind::Week),
            "checkbox" => Ok(ControlKind::Checkbox),
            "radio" => Ok(ControlKind::Radio),
            "textarea" => Ok(ControlKind::TextArea),
            "select" => Ok(ControlKind::Select),
            "color" => Ok(ControlKind::Color),
            other => Err(ParseControlKindError(other.to_string())),
        }
    }
}

/// Type-safe field values
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Number(f64),
    Bool(bool),
}

impl Default for FieldValue {
    fn default() -> Self {
        FieldValue::Text(String::new())
    }
}

impl FieldValue {
    /// Boolean coercion: empty text, zero, and `false` are falsey,
    /// everything else (including `"0"`) is truthy
    pub fn is_truthy(&self) -> bool {
        match self {
            FieldValue::Text(s) => !s.is_empty(),
            FieldValue::Number(n) => *n != 0.0,
            FieldValue::Bool(b) => *b,
        }
    }

    /// Get the text value (returns empty string for non-text values)
    pub fn as_text(&self) -> &str {
        match self {
            FieldValue::Text(s) => s,
            _ => "",
        }
    }

    /// Get the display text for rendering and editing
    pub fn display(&self) -> String {
        match self {
            FieldValue::Text(s) => s.clone(),
            FieldValue::Number(n) if n.fract() == 0.0 => format!("{n:.0}"),
            FieldValue::Number(n) => n.to_string(),
            FieldValue::Bool(b) => b.to_string(),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        FieldValue::Number(value)
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        FieldValue::Number(value as f64)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Bool(value)
    }
}

/// A single entry of a select control
#[derive(Debug, Clone, PartialEq)]
pub struct SelectOption {
    pub value: FieldValue,
    pub label: String,
    pub disabled: bool,
}

impl SelectOption {
    pub fn new(value: impl Into<FieldValue>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
            disabled: false,
        }
    }

    /// Mark this option as not selectable (still rendered, dimmed)
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }
}

/// The description line under a control: a validation error or help text,
/// never both
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldDescription<'a> {
    Error(&'a str),
    Help(&'a str),
}

/// Everything the renderer needs to draw one form control
///
/// The descriptor is owned by the caller; the renderer reads it and never
/// mutates it. Validation state (`error`, `touched`) is computed by the
/// caller as well.
#[derive(Debug, Clone, Default)]
pub struct FieldDescriptor {
    pub id: String,
    pub name: String,
    pub kind: ControlKind,
    pub value: FieldValue,
    pub label: Option<String>,
    pub placeholder: Option<String>,
    pub help_text: Option<String>,
    pub error: Option<String>,
    pub touched: bool,
    pub disabled: bool,
    pub required: bool,
    /// Entries for `Select` controls; other kinds ignore this
    pub options: Vec<SelectOption>,
    /// Row-count override for `TextArea` controls
    pub rows: Option<u16>,
    /// Caller style override for the field container (border), applied last
    pub container_style: Option<Style>,
    /// Caller style override for the label, applied last
    pub label_style: Option<Style>,
    /// Caller style override for the control content, applied last
    pub control_style: Option<Style>,
}

impl FieldDescriptor {
    /// Create a new field descriptor; `id` and `name` are the required
    /// identity inputs
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn kind(mut self, kind: ControlKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn value(mut self, value: impl Into<FieldValue>) -> Self {
        self.value = value.into();
        self
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    /// Help text shown under the control while there is no visible error
    pub fn help_text(mut self, help_text: impl Into<String>) -> Self {
        self.help_text = Some(help_text.into());
        self
    }

    /// Mark this field as required (shows a marker next to the label)
    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn options(mut self, options: Vec<SelectOption>) -> Self {
        self.options = options;
        self
    }

    pub fn rows(mut self, rows: u16) -> Self {
        self.rows = Some(rows);
        self
    }

    /// Whether the error message is visible: requires both a non-empty
    /// `error` and `touched`
    pub fn show_error(&self) -> bool {
        self.touched && self.error.as_deref().is_some_and(|e| !e.is_empty())
    }

    /// The description line under the control, if any: the error when
    /// [`show_error`](Self::show_error) holds, otherwise the help text
    pub fn description(&self) -> Option<FieldDescription<'_>> {
        if self.show_error() {
            self.error.as_deref().map(FieldDescription::Error)
        } else {
            self.help_text.as_deref().map(FieldDescription::Help)
        }
    }

    /// Checked state for `Checkbox` controls: boolean coercion of the value
    pub fn checked(&self) -> bool {
        self.value.is_truthy()
    }

    /// Selected state for `Radio` controls: only an explicit boolean true
    /// counts, other values are not coerced
    pub fn radio_selected(&self) -> bool {
        matches!(self.value, FieldValue::Bool(true))
    }

    /// Row count for `TextArea` controls
    pub fn effective_rows(&self) -> u16 {
        self.rows.unwrap_or(TEXTAREA_DEFAULT_ROWS)
    }

    /// Index of the option matching the current value, for `Select` controls
    pub fn selected_option(&self) -> Option<usize> {
        self.options.iter().position(|o| o.value == self.value)
    }

    /// Height of the control box in rows, including borders
    pub fn control_height(&self) -> u16 {
        match self.kind {
            ControlKind::TextArea => self.effective_rows() + 2,
            ControlKind::Select => self.options.len().max(1) as u16 + 2,
            _ => 3,
        }
    }

    /// Total field height in rows: the control box plus the description
    /// line when one is present
    pub fn height(&self) -> u16 {
        self.control_height() + u16::from(self.description().is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    mod control_kind {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_default_is_text() {
            assert_eq!(ControlKind::default(), ControlKind::Text);
        }

        #[test]
        fn test_parse_known_kinds() {
            assert_eq!("email".parse(), Ok(ControlKind::Email));
            assert_eq!("datetime-local".parse(), Ok(ControlKind::DateTimeLocal));
            assert_eq!("textarea".parse(), Ok(ControlKind::TextArea));
            assert_eq!("select".parse(), Ok(ControlKind::Select));
        }

        #[test]
        fn test_parse_unknown_kind_fails() {
            let result: Result<ControlKind, _> = "range".parse();
            assert!(result.is_err());
        }

        #[test]
        fn test_parse_lossy_falls_back_to_text() {
            assert_eq!(ControlKind::parse_lossy("range"), ControlKind::Text);
            assert_eq!(ControlKind::parse_lossy(""), ControlKind::Text);
        }

        #[test]
        fn test_parse_roundtrips_canonical_names() {
            for kind in [
                ControlKind::Text,
                ControlKind::DateTimeLocal,
                ControlKind::Checkbox,
                ControlKind::Radio,
                ControlKind::TextArea,
                ControlKind::Select,
                ControlKind::Color,
            ] {
                assert_eq!(kind.as_str().parse(), Ok(kind));
            }
        }

        #[test]
        fn test_inline_label_only_for_checkbox_and_radio() {
            assert!(ControlKind::Checkbox.has_inline_label());
            assert!(ControlKind::Radio.has_inline_label());
            assert!(!ControlKind::Text.has_inline_label());
            assert!(!ControlKind::Select.has_inline_label());
            assert!(!ControlKind::TextArea.has_inline_label());
        }
    }

    mod field_value {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_default_is_empty_text() {
            assert_eq!(FieldValue::default(), FieldValue::Text(String::new()));
        }

        #[test]
        fn test_falsey_values() {
            assert!(!FieldValue::Text(String::new()).is_truthy());
            assert!(!FieldValue::Number(0.0).is_truthy());
            assert!(!FieldValue::Bool(false).is_truthy());
            assert!(!FieldValue::default().is_truthy());
        }

        #[test]
        fn test_truthy_values() {
            assert!(FieldValue::Text("a".to_string()).is_truthy());
            // a non-empty string is truthy even when it spells zero
            assert!(FieldValue::Text("0".to_string()).is_truthy());
            assert!(FieldValue::Number(1.0).is_truthy());
            assert!(FieldValue::Number(-0.5).is_truthy());
            assert!(FieldValue::Bool(true).is_truthy());
        }

        #[test]
        fn test_display_formats_whole_numbers_without_fraction() {
            assert_eq!(FieldValue::Number(42.0).display(), "42");
            assert_eq!(FieldValue::Number(2.5).display(), "2.5");
        }

        #[test]
        fn test_as_text_returns_empty_for_non_text() {
            assert_eq!(FieldValue::Number(3.0).as_text(), "");
            assert_eq!(FieldValue::Bool(true).as_text(), "");
            assert_eq!(FieldValue::Text("hi".to_string()).as_text(), "hi");
        }

        #[test]
        fn test_from_conversions() {
            assert_eq!(FieldValue::from("x"), FieldValue::Text("x".to_string()));
            assert_eq!(FieldValue::from(2i64), FieldValue::Number(2.0));
            assert_eq!(FieldValue::from(true), FieldValue::Bool(true));
        }
    }

    mod descriptor {
        use super::*;
        use pretty_assertions::assert_eq;

        fn field() -> FieldDescriptor {
            FieldDescriptor::new("email", "email").kind(ControlKind::Email)
        }

        #[test]
        fn test_new_sets_identity_and_defaults() {
            let f = FieldDescriptor::new("id", "name");
            assert_eq!(f.id, "id");
            assert_eq!(f.name, "name");
            assert_eq!(f.kind, ControlKind::Text);
            assert!(!f.touched);
            assert!(!f.disabled);
            assert!(!f.required);
            assert!(f.options.is_empty());
        }

        #[test]
        fn test_error_hidden_until_touched() {
            let mut f = field();
            f.error = Some("Invalid".to_string());
            assert!(!f.show_error());
            f.touched = true;
            assert!(f.show_error());
        }

        #[test]
        fn test_touched_without_error_shows_nothing() {
            let mut f = field();
            f.touched = true;
            assert!(!f.show_error());
            f.error = Some(String::new());
            assert!(!f.show_error());
        }

        #[test]
        fn test_description_prefers_error_over_help() {
            let mut f = field().help_text("We never share it");
            assert_eq!(
                f.description(),
                Some(FieldDescription::Help("We never share it"))
            );

            f.error = Some("Invalid".to_string());
            f.touched = true;
            assert_eq!(f.description(), Some(FieldDescription::Error("Invalid")));
        }

        #[test]
        fn test_description_absent_without_error_or_help() {
            let mut f = field();
            assert_eq!(f.description(), None);
            // an untouched error leaves the line absent entirely
            f.error = Some("Invalid".to_string());
            assert_eq!(f.description(), None);
        }

        #[test]
        fn test_checkbox_checked_follows_coercion() {
            let mut f = FieldDescriptor::new("news", "news").kind(ControlKind::Checkbox);
            assert!(!f.checked());
            f.value = FieldValue::Number(0.0);
            assert!(!f.checked());
            f.value = FieldValue::Text("0".to_string());
            assert!(f.checked());
            f.value = FieldValue::Bool(true);
            assert!(f.checked());
        }

        #[test]
        fn test_radio_selected_is_strict() {
            let mut f = FieldDescriptor::new("plan", "plan").kind(ControlKind::Radio);
            f.value = FieldValue::Text("yes".to_string());
            assert!(!f.radio_selected());
            f.value = FieldValue::Number(1.0);
            assert!(!f.radio_selected());
            f.value = FieldValue::Bool(true);
            assert!(f.radio_selected());
        }

        #[test]
        fn test_textarea_rows_default_and_override() {
            let f = FieldDescriptor::new("bio", "bio").kind(ControlKind::TextArea);
            assert_eq!(f.effective_rows(), TEXTAREA_DEFAULT_ROWS);
            assert_eq!(f.control_height(), TEXTAREA_DEFAULT_ROWS + 2);

            let f = f.rows(6);
            assert_eq!(f.effective_rows(), 6);
            assert_eq!(f.control_height(), 8);
        }

        #[test]
        fn test_select_height_tracks_options() {
            let f = FieldDescriptor::new("country", "country")
                .kind(ControlKind::Select)
                .options(vec![
                    SelectOption::new("au", "Australia"),
                    SelectOption::new("de", "Germany"),
                    SelectOption::new("jp", "Japan"),
                ]);
            assert_eq!(f.control_height(), 5);
        }

        #[test]
        fn test_select_without_options_keeps_minimum_height() {
            let f = FieldDescriptor::new("country", "country").kind(ControlKind::Select);
            assert_eq!(f.control_height(), 3);
        }

        #[test]
        fn test_selected_option_matches_value() {
            let mut f = FieldDescriptor::new("country", "country")
                .kind(ControlKind::Select)
                .options(vec![
                    SelectOption::new("au", "Australia"),
                    SelectOption::new("de", "Germany"),
                ]);
            assert_eq!(f.selected_option(), None);
            f.value = FieldValue::from("de");
            assert_eq!(f.selected_option(), Some(1));
        }

        #[test]
        fn test_height_adds_description_line() {
            let f = FieldDescriptor::new("a", "a");
            assert_eq!(f.height(), 3);

            let f = f.help_text("hint");
            assert_eq!(f.height(), 4);
        }
    }
}
