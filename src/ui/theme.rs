//! Color theme and styling definitions using ratatui colors

use ratatui::style::{Color, Modifier, Style};

/// Color theme for terminal UI elements
#[derive(Debug, Clone, PartialEq)]
pub struct ColorTheme {
    /// Region body text color (None uses terminal default)
    pub normal_text: Option<Color>,

    /// Navigation bar background and label text
    pub nav_bar: Style,

    /// Trigger whose region is currently displayed
    pub nav_active: Style,

    /// Trigger with keyboard focus
    pub nav_focus: Style,

    /// Region border color
    pub region_border: Color,

    /// Region title on the border
    pub region_title: Style,

    /// Status line background
    pub status_bg: Color,

    /// Status line text
    pub status_fg: Color,
}

impl Default for ColorTheme {
    fn default() -> Self {
        Self {
            normal_text: None,
            nav_bar: Style::default().fg(Color::White).bg(Color::DarkGray),
            nav_active: Style::default().fg(Color::Black).bg(Color::Cyan),
            nav_focus: Style::default().add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            region_border: Color::Cyan,
            region_title: Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            status_bg: Color::Blue,
            status_fg: Color::White,
        }
    }
}

impl ColorTheme {
    /// Create a monochrome theme for terminals without color support
    pub fn monochrome() -> Self {
        Self {
            normal_text: None,
            nav_bar: Style::default(),
            nav_active: Style::default().add_modifier(Modifier::REVERSED),
            nav_focus: Style::default().add_modifier(Modifier::UNDERLINED),
            region_border: Color::Reset,
            region_title: Style::default().add_modifier(Modifier::BOLD),
            status_bg: Color::Black,
            status_fg: Color::White,
        }
    }

    /// Create a high-contrast theme for accessibility
    pub fn high_contrast() -> Self {
        Self {
            normal_text: Some(Color::White),
            nav_bar: Style::default().fg(Color::White).bg(Color::Black),
            nav_active: Style::default().fg(Color::Black).bg(Color::LightYellow),
            nav_focus: Style::default()
                .fg(Color::LightYellow)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            region_border: Color::White,
            region_title: Style::default()
                .fg(Color::LightYellow)
                .add_modifier(Modifier::BOLD),
            status_bg: Color::White,
            status_fg: Color::Black,
        }
    }

    /// Look up a theme by name (`default`, `monochrome`, `high-contrast`).
    pub fn by_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().replace('_', "-").as_str() {
            "default" => Some(Self::default()),
            "monochrome" | "mono" => Some(Self::monochrome()),
            "high-contrast" => Some(Self::high_contrast()),
            _ => None,
        }
    }
}
