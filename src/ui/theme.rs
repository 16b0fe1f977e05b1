//! Color roles for form rendering

use crate::config::UiConfig;
use ratatui::style::Color;

/// Named color roles used by the field renderer
///
/// Default values match the classic palette (cyan accent, dark-gray
/// chrome); the accent can be overridden from user config. Per-field style
/// overrides on the descriptor are patched on top of these.
#[derive(Debug, Clone)]
pub struct FieldPalette {
    /// Focused borders, cursor, selected markers
    pub accent: Color,
    /// Unfocused borders and labels
    pub inactive: Color,
    /// Validation errors and the required marker
    pub danger: Color,
    /// Control content
    pub text: Color,
    /// Placeholders, help text, disabled options
    pub text_dim: Color,
}

impl Default for FieldPalette {
    fn default() -> Self {
        Self {
            accent: Color::Cyan,
            inactive: Color::DarkGray,
            danger: Color::Red,
            text: Color::Reset,
            text_dim: Color::DarkGray,
        }
    }
}

impl FieldPalette {
    /// Build the palette from user config, keeping defaults for anything
    /// unset or unparseable
    pub fn from_config(config: &UiConfig) -> Self {
        let mut palette = Self::default();
        if let Some(name) = &config.accent_color {
            match name.parse() {
                Ok(color) => palette.accent = color,
                Err(_) => tracing::warn!("ignoring unknown accent color {name:?}"),
            }
        }
        palette
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_accent_is_cyan() {
        assert_eq!(FieldPalette::default().accent, Color::Cyan);
    }

    #[test]
    fn test_from_config_parses_accent() {
        let config = UiConfig {
            accent_color: Some("magenta".to_string()),
            ..Default::default()
        };
        assert_eq!(FieldPalette::from_config(&config).accent, Color::Magenta);
    }

    #[test]
    fn test_from_config_keeps_default_for_unknown_name() {
        let config = UiConfig {
            accent_color: Some("not-a-color".to_string()),
            ..Default::default()
        };
        assert_eq!(FieldPalette::from_config(&config).accent, Color::Cyan);
    }
}
