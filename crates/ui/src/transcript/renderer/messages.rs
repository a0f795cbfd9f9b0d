use crate::theme::Theme;
use crate::transcript::ChatEntry;

use ratatui::{
    style::{Style, Stylize},
    text::{Line, Span},
};
use siaga_core::markdown::{self, Segment};

impl<'a> super::TranscriptRenderer<'a> {
    /// Dispatch one entry to its renderer
    pub(super) fn render_entry(&self, entry: &ChatEntry, width: usize, lines: &mut Vec<Line<'static>>) {
        match entry {
            ChatEntry::UserMessage { content } => self.render_user_message(content, width, lines),
            ChatEntry::AssistantReply { content } => self.render_assistant_reply(content, width, lines),
            ChatEntry::Notice { content } => self.render_notice(content, lines),
        }
    }

    /// Render user message with role prefix and accent bar
    pub(super) fn render_user_message(&self, content: &str, width: usize, lines: &mut Vec<Line<'static>>) {
        lines.push(Line::from(vec![
            Span::styled("● ", Style::default().fg(Theme::GREEN)),
            Span::styled("Anda", Style::default().fg(Theme::GREEN).bold()),
        ]));

        let accent_bar = Span::styled("┃ ", Style::default().fg(Theme::GREEN));
        let content_style = Style::default().fg(Theme::FG);
        let content_width = width.saturating_sub(2);

        for source_line in content.lines() {
            if source_line.is_empty() {
                lines.push(Line::from(vec![accent_bar.clone()]));
            } else {
                for wrapped_line in super::wrap::wrap_text_to_width(source_line, content_width) {
                    lines.push(Line::from(vec![
                        accent_bar.clone(),
                        Span::styled(wrapped_line, content_style),
                    ]));
                }
            }
        }
    }

    /// Render an assistant reply through the markdown model
    pub(super) fn render_assistant_reply(&self, content: &str, width: usize, lines: &mut Vec<Line<'static>>) {
        lines.push(Line::from(vec![
            Span::styled("◆ ", Style::default().fg(Theme::CYAN)),
            Span::styled("Siaga", Style::default().fg(Theme::CYAN).bold()),
        ]));

        for (index, segment) in markdown::segment(content).iter().enumerate() {
            match segment {
                Segment::Code(code) => self.render_code_block(code, index, width, lines),
                Segment::Text(text) => self.render_prose(&text.text, lines),
            }
        }
    }

    /// Render status note (subtle, muted styling)
    pub(super) fn render_notice(&self, content: &str, lines: &mut Vec<Line<'static>>) {
        lines.push(Line::from(vec![
            Span::styled("• ", Style::default().fg(Theme::MUTED)),
            Span::styled(content.to_string(), Style::default().fg(Theme::MUTED).italic()),
        ]));
    }

    /// Render the animated "typing" indicator
    pub(super) fn render_typing_indicator(&self, lines: &mut Vec<Line<'static>>) {
        let dots = ".".repeat((self.animation_frame as usize % 3) + 1);
        lines.push(Line::from(vec![
            Span::styled("◆ ", Style::default().fg(Theme::CYAN)),
            Span::styled("Sedang mengetik", Style::default().fg(Theme::MUTED).italic()),
            Span::styled(dots, Style::default().fg(Theme::MUTED)),
        ]));
    }

    /// Render the empty-conversation placeholder
    pub(super) fn render_empty_state(&self, lines: &mut Vec<Line<'static>>) {
        lines.push(Line::default());
        lines.push(Line::from(vec![Span::styled(
            "Mulai Percakapan Baru",
            Style::default().fg(Theme::FG).bold(),
        )]));
        lines.push(Line::from(vec![Span::styled(
            "Tanyakan apa saja seputar banjir dan mitigasi bencana.",
            Style::default().fg(Theme::MUTED),
        )]));
        lines.push(Line::default());
        lines.push(Line::from(vec![Span::styled(
            "Contoh: \"Bagaimana cara evakuasi saat banjir?\"",
            Style::default().fg(Theme::MUTED).italic(),
        )]));
    }
}
