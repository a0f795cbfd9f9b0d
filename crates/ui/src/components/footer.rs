use crate::{state::AppState, theme::Theme};

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Paragraph},
};

/// Footer component: status line, input card and key hints
///
/// - Row 1: status indicator and word counter
/// - Rows 2-4: input card with accent bar
/// - Row 5: keyboard shortcuts
pub struct Footer<'a> {
    state: &'a AppState,
}

impl<'a> Footer<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    /// Render footer to the given frame
    pub fn render(&self, frame: &mut Frame<'_>, area: Rect) {
        frame.render_widget(Block::default().style(Style::default().bg(Theme::BG)), area);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Length(3),
                Constraint::Length(1),
            ])
            .split(area);

        self.render_status_row(frame, rows[0]);
        self.render_input_card(frame, rows[1]);
        self.render_hints(frame, rows[2]);
    }

    /// Status indicator plus word counter
    fn render_status_row(&self, frame: &mut Frame<'_>, area: Rect) {
        let status = if self.state.is_loading {
            Line::from(vec![
                Span::styled("● ", Style::default().fg(Theme::YELLOW)),
                Span::styled("AI sedang memproses...", Style::default().fg(Theme::YELLOW)),
            ])
        } else {
            Line::from(vec![
                Span::styled("● ", Style::default().fg(Theme::GREEN)),
                Span::styled("Siap menerima pesan", Style::default().fg(Theme::MUTED)),
            ])
        };
        frame.render_widget(Paragraph::new(status), area);

        let words = self.state.input.word_count();
        if words > 0 {
            let counter = Line::from(vec![Span::styled(
                format!("{} kata", words),
                Style::default().fg(Theme::MUTED),
            )]);
            frame.render_widget(Paragraph::new(counter).alignment(Alignment::Right), area);
        }
    }

    /// Input card with accent bar and cursor
    fn render_input_card(&self, frame: &mut Frame<'_>, area: Rect) {
        if area.width < 10 || area.height < 1 {
            return;
        }

        frame.render_widget(Block::default().style(Style::default().bg(Theme::PANEL_BG)), area);

        let accent_width = 2;
        let accent_area = Rect { x: area.x, y: area.y, width: accent_width, height: area.height };
        frame.render_widget(Block::default().style(Style::default().bg(Theme::BLUE)), accent_area);

        let input_area = Rect {
            x: area.x + accent_width + 1,
            y: area.y,
            width: area.width.saturating_sub(accent_width + 2),
            height: area.height,
        };

        let mut lines: Vec<Line<'static>> = Vec::new();
        if self.state.input.buffer.is_empty() {
            let placeholder = if self.state.input.is_navigating_history() {
                "<pesan kosong>"
            } else {
                "Ketik pesan Anda di sini... (Enter untuk kirim)"
            };
            lines.push(Line::from(vec![Span::styled(
                placeholder.to_string(),
                Style::default().fg(Theme::MUTED).bg(Theme::PANEL_BG).italic(),
            )]));
        } else {
            for (idx, buffer_line) in self.state.input.buffer.split('\n').enumerate() {
                let mut spans = vec![Span::styled(
                    buffer_line.to_string(),
                    Style::default().fg(Theme::FG).bg(Theme::PANEL_BG),
                )];
                if idx == self.state.input.buffer.split('\n').count() - 1 {
                    spans.push(Span::styled("█", Style::default().fg(Theme::FG).bg(Theme::PANEL_BG)));
                }
                lines.push(Line::from(spans));
            }
        }

        frame.render_widget(Paragraph::new(lines), input_area);
    }

    /// Keyboard shortcut hints
    fn render_hints(&self, frame: &mut Frame<'_>, area: Rect) {
        let hint = |key: &'static str, label: &'static str| {
            vec![
                Span::styled(key, Style::default().fg(Theme::BLUE)),
                Span::styled(label, Style::default().fg(Theme::MUTED)),
            ]
        };

        let mut spans = Vec::new();
        spans.extend(hint("[Enter]", " kirim  "));
        spans.extend(hint("[Ctrl+J]", " baris baru  "));
        spans.extend(hint("[Tab]", " pilih blok  "));
        spans.extend(hint("[Ctrl+E]", " bentang  "));
        spans.extend(hint("[Ctrl+N]", " nomor baris  "));
        spans.extend(hint("[Ctrl+Y]", " salin  "));
        spans.extend(hint("[Ctrl+L]", " hapus riwayat  "));
        spans.extend(hint("[Esc]", " keluar"));

        frame.render_widget(Paragraph::new(Line::from(spans)).alignment(Alignment::Right), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_footer_new() {
        let state = AppState::new("llama3-8b-8192");
        let footer = Footer::new(&state);
        assert!(!footer.state.is_loading);
    }
}
