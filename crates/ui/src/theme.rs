use ratatui::style::{Color, Style};
use siaga_core::markdown::Accent;

/// Deep-water color theme for the Siaga TUI
///
/// Dark blue-black base with cool accents, tuned for long reading sessions
/// over mostly-text flood advisories.
#[derive(Debug, Clone, Copy)]
pub struct Theme;

impl Theme {
    /// Primary background: deep blue-black (fills terminal)
    pub const BG: Color = Color::Rgb(16, 20, 31);

    /// Foreground: light blue-gray (primary text)
    pub const FG: Color = Color::Rgb(201, 204, 214);

    /// Secondary background: lighter blue-black (cards, input)
    pub const PANEL_BG: Color = Color::Rgb(26, 31, 46);

    /// Hover/active states: visual selection
    pub const ACTIVE: Color = Color::Rgb(38, 45, 66);

    /// Primary accent: blue
    pub const BLUE: Color = Color::Rgb(122, 162, 210);

    /// Secondary accent: cyan
    pub const CYAN: Color = Color::Rgb(131, 188, 200);

    /// Tertiary accent: purple
    pub const PURPLE: Color = Color::Rgb(166, 152, 205);

    /// Success, safe states: green
    pub const GREEN: Color = Color::Rgb(168, 190, 132);

    /// Warnings, pending states: yellow
    pub const YELLOW: Color = Color::Rgb(228, 170, 122);

    /// Errors, alerts: red
    pub const RED: Color = Color::Rgb(224, 118, 118);

    /// Orange accent (language badges)
    pub const ORANGE: Color = Color::Rgb(230, 150, 90);

    /// Muted text: dimmed foreground
    pub const MUTED: Color = Color::Rgb(104, 110, 134);

    /// Border color
    pub const BORDER: Color = Color::Rgb(56, 62, 88);

    /// Base style for all text
    pub fn base() -> Style {
        Style::default().fg(Self::FG).bg(Self::BG)
    }

    /// Success style
    pub fn success() -> Style {
        Style::default().fg(Self::GREEN).bg(Self::BG)
    }

    /// Warning style
    pub fn warning() -> Style {
        Style::default().fg(Self::YELLOW).bg(Self::BG)
    }

    /// Error style
    pub fn error() -> Style {
        Style::default().fg(Self::RED).bg(Self::BG)
    }

    /// Muted style (for secondary text)
    pub fn muted() -> Style {
        Style::default().fg(Self::MUTED).bg(Self::BG)
    }

    /// Panel style
    pub fn panel() -> Style {
        Style::default().fg(Self::FG).bg(Self::PANEL_BG)
    }

    /// Map a language badge accent token onto a terminal color
    pub fn accent_color(accent: Accent) -> Color {
        match accent {
            Accent::Yellow => Self::YELLOW,
            Accent::Blue => Self::BLUE,
            Accent::Cyan => Self::CYAN,
            Accent::Green => Self::GREEN,
            Accent::Orange => Self::ORANGE,
            Accent::Red => Self::RED,
            Accent::Purple => Self::PURPLE,
            Accent::Gray => Self::MUTED,
        }
    }
}
