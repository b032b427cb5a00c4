//! Theme system for the TUI.
//!
//! Provides semantic color roles mapped to ratatui `Style` values. The
//! `ThemeVariant` enum selects between Dark and Light palettes; the roles
//! cover the correctness hinting (neutral / ok / invalid) that the browser
//! original expressed as CSS classes.

use ratatui::style::{Color, Modifier, Style};

/// Available theme variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeVariant {
    Dark,
    Light,
}

impl ThemeVariant {
    /// Parse a variant name from a string (case-insensitive).
    pub fn from_str_name(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "dark" => Some(Self::Dark),
            "light" => Some(Self::Light),
            _ => None,
        }
    }

    /// Build the `ColorPalette` for this variant.
    pub fn palette(self) -> ColorPalette {
        match self {
            Self::Dark => ColorPalette::dark(),
            Self::Light => ColorPalette::light(),
        }
    }

    /// Cycle to the next variant: Dark → Light → Dark.
    pub fn next(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    /// Human-readable name for status display.
    pub fn name(self) -> &'static str {
        match self {
            Self::Dark => "Dark",
            Self::Light => "Light",
        }
    }
}

/// A complete palette mapping every semantic UI role to a `Style`.
#[derive(Debug, Clone)]
pub struct ColorPalette {
    // -- Input form --
    pub input_neutral: Style,
    pub input_ok: Style,
    pub input_invalid: Style,
    pub prompt_enabled: Style,
    pub prompt_disabled: Style,
    pub prompt_pending: Style,

    // -- Result view --
    pub short_url: Style,
    pub marker_new: Style,
    pub marker_copied: Style,
    pub result_border: Style,

    // -- Chrome --
    pub title: Style,
    pub status_bar: Style,
    pub status_error: Style,
}

impl ColorPalette {
    fn dark() -> Self {
        Self {
            input_neutral: Style::default().fg(Color::Gray),
            input_ok: Style::default().fg(Color::Green),
            input_invalid: Style::default().fg(Color::Red),
            prompt_enabled: Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
            prompt_disabled: Style::default().fg(Color::DarkGray),
            prompt_pending: Style::default().fg(Color::Yellow),

            short_url: Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            marker_new: Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
            marker_copied: Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
            result_border: Style::default().fg(Color::Cyan),

            title: Style::default().add_modifier(Modifier::BOLD),
            status_bar: Style::default().bg(Color::DarkGray).fg(Color::White),
            status_error: Style::default()
                .bg(Color::DarkGray)
                .fg(Color::Red)
                .add_modifier(Modifier::BOLD),
        }
    }

    fn light() -> Self {
        Self {
            input_neutral: Style::default().fg(Color::DarkGray),
            input_ok: Style::default().fg(Color::Green),
            input_invalid: Style::default().fg(Color::Red),
            prompt_enabled: Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
            prompt_disabled: Style::default().fg(Color::Gray),
            prompt_pending: Style::default().fg(Color::Magenta),

            short_url: Style::default()
                .fg(Color::Blue)
                .add_modifier(Modifier::BOLD),
            marker_new: Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
            marker_copied: Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
            result_border: Style::default().fg(Color::Blue),

            title: Style::default().add_modifier(Modifier::BOLD),
            status_bar: Style::default().bg(Color::Gray).fg(Color::Black),
            status_error: Style::default()
                .bg(Color::Gray)
                .fg(Color::Red)
                .add_modifier(Modifier::BOLD),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variant_names_round_trip() {
        assert_eq!(ThemeVariant::from_str_name("dark"), Some(ThemeVariant::Dark));
        assert_eq!(
            ThemeVariant::from_str_name("LIGHT"),
            Some(ThemeVariant::Light)
        );
        assert_eq!(ThemeVariant::from_str_name("solarized"), None);
    }

    #[test]
    fn test_cycle_covers_both_variants() {
        assert_eq!(ThemeVariant::Dark.next(), ThemeVariant::Light);
        assert_eq!(ThemeVariant::Light.next(), ThemeVariant::Dark);
    }
}
