use crate::{state::AppState, theme::Theme};

use chrono::{Local, Timelike};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Paragraph},
};

/// Header component for the chat screen
///
/// Shows the time-of-day greeting, the application title, the online/model
/// status and the topic badges.
pub struct Header<'a> {
    state: &'a AppState,
}

impl<'a> Header<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    /// Render the header to the given frame
    pub fn render(&self, frame: &mut Frame<'_>, area: Rect) {
        frame.render_widget(Block::default().style(Style::default().bg(Theme::BG)), area);

        let status = if self.state.is_loading {
            Span::styled("● sibuk", Style::default().fg(Theme::YELLOW))
        } else {
            Span::styled("● online", Style::default().fg(Theme::GREEN))
        };

        let lines = vec![
            Line::from(vec![
                Span::styled(format!("{}! ", greeting_for_hour(Local::now().hour())), Style::default().fg(Theme::MUTED)),
                status,
                Span::styled(format!("  {}", self.state.model_name), Style::default().fg(Theme::MUTED)),
            ]),
            Line::from(vec![
                Span::styled("Siaga Banjir", Style::default().fg(Theme::BLUE).bold()),
                Span::styled(
                    " — Asisten AI untuk informasi banjir",
                    Style::default().fg(Theme::FG),
                ),
            ]),
            Line::from(vec![Span::styled(
                "Dapatkan informasi terkini, tips keselamatan, dan panduan menghadapi banjir.",
                Style::default().fg(Theme::MUTED),
            )]),
            Line::from(vec![
                Span::styled("💧 Info Banjir  ", Style::default().fg(Theme::BLUE)),
                Span::styled("🚨 Peringatan Dini  ", Style::default().fg(Theme::GREEN)),
                Span::styled("🛡 Tips Keselamatan  ", Style::default().fg(Theme::PURPLE)),
                Span::styled("📍 Lokasi Aman", Style::default().fg(Theme::YELLOW)),
            ]),
            Line::from(vec![Span::styled(
                "─".repeat(area.width as usize),
                Style::default().fg(Theme::BORDER),
            )]),
        ];

        frame.render_widget(Paragraph::new(lines), area);
    }
}

/// Indonesian time-of-day greeting
pub fn greeting_for_hour(hour: u32) -> &'static str {
    if hour < 12 {
        "Selamat Pagi"
    } else if hour < 15 {
        "Selamat Siang"
    } else if hour < 18 {
        "Selamat Sore"
    } else {
        "Selamat Malam"
    }
}
