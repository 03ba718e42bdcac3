//! Central theme configuration for the TUI.
//!
//! Colors follow the chart palette of the portfolio: a blue accent with
//! green, orange and red for outcomes.

use ratatui::style::{Color, Modifier, Style};

use crate::render::Tone;

/// Theme configuration for the TUI
#[derive(Debug, Clone)]
pub struct Theme {
    // General UI
    pub border: Color,
    pub border_focused: Color,
    pub selection_bg: Color,
    pub selection_fg: Color,

    // Text
    pub text: Color,
    pub text_muted: Color,
    pub text_highlight: Color,

    // Tones
    pub accent: Color,
    pub info: Color,
    pub success: Color,
    pub warning: Color,
    pub danger: Color,
    pub highlight: Color,

    // Contact form
    pub field_focused: Color,
    pub field_cursor: Color,

    // Footer/Mode colors
    pub mode_normal: (Color, Color), // (bg, fg)
    pub mode_form: (Color, Color),

    // Message
    pub message: Color,

    // Help popup
    pub help_key: Color,
    pub help_border: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            border: Color::Rgb(96, 110, 128),
            border_focused: Color::Rgb(31, 119, 180),
            selection_bg: Color::Rgb(31, 119, 180),
            selection_fg: Color::Rgb(255, 255, 255),

            text: Color::Rgb(230, 232, 235),
            text_muted: Color::Rgb(128, 136, 148),
            text_highlight: Color::Rgb(255, 255, 255),

            accent: Color::Rgb(31, 119, 180),   // #1f77b4
            info: Color::Rgb(102, 170, 230),
            success: Color::Rgb(44, 160, 44),   // #2ca02c
            warning: Color::Rgb(255, 127, 14),  // #ff7f0e
            danger: Color::Rgb(214, 39, 40),    // #d62728
            highlight: Color::Rgb(148, 103, 189),

            field_focused: Color::Rgb(255, 127, 14),
            field_cursor: Color::Rgb(255, 127, 14),

            mode_normal: (Color::Rgb(31, 119, 180), Color::Rgb(255, 255, 255)),
            mode_form: (Color::Rgb(255, 127, 14), Color::Black),

            message: Color::Rgb(44, 160, 44),

            help_key: Color::Rgb(255, 127, 14),
            help_border: Color::Rgb(31, 119, 180),
        }
    }
}

impl Theme {
    /// Foreground color of a render tree tone
    pub fn tone_color(&self, tone: Tone) -> Color {
        match tone {
            Tone::Plain => self.text,
            Tone::Accent => self.accent,
            Tone::Muted => self.text_muted,
            Tone::Info => self.info,
            Tone::Success => self.success,
            Tone::Warning => self.warning,
            Tone::Danger => self.danger,
            Tone::Highlight => self.highlight,
        }
    }

    pub fn tone_style(&self, tone: Tone) -> Style {
        Style::default().fg(self.tone_color(tone))
    }

    /// Style for the selected sidebar entry
    pub fn selected_style(&self) -> Style {
        Style::default()
            .bg(self.selection_bg)
            .fg(self.selection_fg)
            .add_modifier(Modifier::BOLD)
    }

    /// Border style for blocks
    pub fn border_style(&self, focused: bool) -> Style {
        Style::default().fg(if focused {
            self.border_focused
        } else {
            self.border
        })
    }
}

/// Global theme instance
static THEME: std::sync::OnceLock<Theme> = std::sync::OnceLock::new();

/// Get the current theme
pub fn theme() -> &'static Theme {
    THEME.get_or_init(Theme::default)
}
