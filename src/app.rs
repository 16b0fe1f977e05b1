//! Application state and core logic
//!
//! The app is the caller side of the field-renderer contract: it owns every
//! descriptor (values, touched flags, errors), runs validation, and
//! dispatches the change/blur events the key mapping hands back. The
//! renderer itself never validates or mutates anything.

use crate::config::UiConfig;
use crate::platform;
use crate::state::{
    handle_key as handle_field_key, ControlKind, FieldDescriptor, FieldEvent, FieldValue,
    FormState, SelectOption,
};
use crate::ui::FieldPalette;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};

/// Button indices on the button row
pub const SUBMIT_BUTTON: usize = 0;
pub const RESET_BUTTON: usize = 1;
const BUTTON_COUNT: usize = 2;

/// Main application struct
pub struct App {
    /// The profile form: descriptors plus the active-field cursor
    pub form: FormState,
    /// User configuration
    pub config: UiConfig,
    /// Colors for the renderer
    pub palette: FieldPalette,
    /// Whether focus sits on the Submit/Reset row instead of a field
    pub button_row_active: bool,
    /// Which button is selected while the button row is active
    pub selected_button: usize,
    /// Message for the status bar
    pub status_message: Option<String>,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App instance with config loaded from disk
    pub fn new() -> Self {
        let config = UiConfig::load().unwrap_or_else(|err| {
            tracing::warn!("failed to load config: {err:#}");
            UiConfig::default()
        });
        Self::with_config(config)
    }

    /// Create an App with the given config (used directly by tests)
    pub fn with_config(config: UiConfig) -> Self {
        let palette = FieldPalette::from_config(&config);
        Self {
            form: profile_form(&config),
            config,
            palette,
            button_row_active: false,
            selected_button: SUBMIT_BUTTON,
            status_message: None,
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Handle a key event
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        if key.code == KeyCode::Esc {
            self.quit = true;
            return Ok(());
        }
        if key.code == KeyCode::Char('s') && key.modifiers.contains(platform::SUBMIT_MODIFIER) {
            self.submit();
            return Ok(());
        }
        if self.button_row_active {
            self.handle_button_key(key);
            return Ok(());
        }

        let index = self.form.active_field();
        let Some(field) = self.form.get_field(index) else {
            return Ok(());
        };
        match handle_field_key(field, key) {
            Some(FieldEvent::Changed(value)) => self.on_field_change(index, value),
            Some(FieldEvent::Blurred) => {
                self.on_field_blur(index);
                self.advance_focus(key.code != KeyCode::BackTab);
            }
            None => {
                // a disabled field still lets focus move past it
                if matches!(key.code, KeyCode::Tab | KeyCode::BackTab) {
                    self.advance_focus(key.code != KeyCode::BackTab);
                }
            }
        }
        Ok(())
    }

    fn handle_button_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Left => {
                self.selected_button = (self.selected_button + BUTTON_COUNT - 1) % BUTTON_COUNT;
            }
            KeyCode::Right => {
                self.selected_button = (self.selected_button + 1) % BUTTON_COUNT;
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                if self.selected_button == SUBMIT_BUTTON {
                    self.submit();
                } else {
                    self.reset();
                }
            }
            KeyCode::Tab => {
                self.button_row_active = false;
                self.form.set_active_field(0);
            }
            KeyCode::BackTab => {
                self.button_row_active = false;
                let last = self.form.field_count().saturating_sub(1);
                self.form.set_active_field(last);
            }
            _ => {}
        }
    }

    /// Move focus forward or backward; the button row sits between the last
    /// field and the wrap-around
    fn advance_focus(&mut self, forward: bool) {
        let last = self.form.field_count().saturating_sub(1);
        if forward {
            if self.form.active_field() == last {
                self.button_row_active = true;
            } else {
                self.form.next_field();
            }
        } else if self.form.active_field() == 0 {
            self.button_row_active = true;
        } else {
            self.form.prev_field();
        }
    }

    /// Apply a change event to the field that produced it
    fn on_field_change(&mut self, index: usize, value: FieldValue) {
        // radio groups are exclusive: selecting one clears its siblings
        let radio_group = self
            .form
            .get_field(index)
            .filter(|f| f.kind == ControlKind::Radio && value == FieldValue::Bool(true))
            .map(|f| f.name.clone());
        if let Some(group) = radio_group {
            for (i, sibling) in self.form.fields.iter_mut().enumerate() {
                if i != index && sibling.kind == ControlKind::Radio && sibling.name == group {
                    sibling.value = FieldValue::Bool(false);
                }
            }
        }
        self.form.set_value(index, value);
        // revalidate live once the field has been touched
        if self.form.get_field(index).is_some_and(|f| f.touched) {
            let error = self.form.get_field(index).and_then(validate_field);
            self.form.set_error(index, error);
        }
        self.status_message = None;
    }

    /// Mark the field touched and validate it (the blur contract)
    fn on_field_blur(&mut self, index: usize) {
        self.form.mark_touched(index);
        let error = self.form.get_field(index).and_then(validate_field);
        if let Some(field) = self.form.get_field(index) {
            tracing::debug!(
                "blur {}: {}",
                field.name,
                error.as_deref().unwrap_or("valid")
            );
        }
        self.form.set_error(index, error);
    }

    /// Validate everything as if blurred, then report
    fn submit(&mut self) {
        for index in 0..self.form.field_count() {
            self.on_field_blur(index);
        }
        if self.form.is_valid() {
            tracing::info!("profile form submitted");
            self.status_message = Some("Profile saved".to_string());
        } else {
            let invalid = self.form.fields.iter().filter(|f| f.show_error()).count();
            self.status_message = Some(format!("{invalid} field(s) need attention"));
        }
    }

    /// Throw away all input and start over
    fn reset(&mut self) {
        self.form = profile_form(&self.config);
        self.button_row_active = false;
        self.selected_button = SUBMIT_BUTTON;
        self.status_message = Some("Form reset".to_string());
    }
}

/// Build the profile form: one field per control variant
fn profile_form(config: &UiConfig) -> FormState {
    let mut bio = FieldDescriptor::new("bio", "bio")
        .kind(ControlKind::TextArea)
        .label("Bio")
        .placeholder("A few lines about yourself");
    bio.rows = config.default_textarea_rows;

    FormState::new(vec![
        FieldDescriptor::new("username", "username")
            .label("Username")
            .required(true)
            .placeholder("yourname"),
        FieldDescriptor::new("email", "email")
            .kind(ControlKind::Email)
            .label("Email")
            .required(true)
            .placeholder("you@example.com"),
        FieldDescriptor::new("password", "password")
            .kind(ControlKind::Password)
            .label("Password")
            .required(true)
            .help_text("At least 8 characters"),
        FieldDescriptor::new("website", "website")
            .kind(ControlKind::Url)
            .label("Website")
            .help_text("Optional, include the scheme"),
        bio,
        FieldDescriptor::new("country", "country")
            .kind(ControlKind::Select)
            .label("Country")
            .options(vec![
                SelectOption::new("au", "Australia"),
                SelectOption::new("de", "Germany"),
                SelectOption::new("jp", "Japan"),
                SelectOption::new("other", "Other (coming soon)").disabled(true),
            ]),
        FieldDescriptor::new("plan-free", "plan")
            .kind(ControlKind::Radio)
            .label("Free plan")
            .value(true),
        FieldDescriptor::new("plan-pro", "plan")
            .kind(ControlKind::Radio)
            .label("Pro plan"),
        FieldDescriptor::new("newsletter", "newsletter")
            .kind(ControlKind::Checkbox)
            .label("Subscribe to the newsletter")
            .help_text("No more than one email a month"),
    ])
}

/// Caller-owned validation; the renderer only displays what ends up in
/// `error`
fn validate_field(field: &FieldDescriptor) -> Option<String> {
    if field.required && !field.value.is_truthy() {
        let name = field.label.as_deref().unwrap_or(&field.name);
        return Some(format!("{name} is required"));
    }
    let text = field.value.display();
    if text.is_empty() {
        return None;
    }
    match field.kind {
        ControlKind::Email if !text.contains('@') => Some("Enter a valid email address".to_string()),
        ControlKind::Url if !(text.starts_with("http://") || text.starts_with("https://")) => {
            Some("Enter a full URL including the scheme".to_string())
        }
        ControlKind::Number if text.parse::<f64>().is_err() => Some("Enter a number".to_string()),
        ControlKind::Password if text.chars().count() < 8 => {
            Some("Password must be at least 8 characters".to_string())
        }
        _ => None,
    }
}
