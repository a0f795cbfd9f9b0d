mod code;
mod messages;
mod prose;
mod wrap;

use crate::theme::Theme;
use crate::transcript::Transcript;

use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span, Text},
    widgets::{Block, Paragraph, Wrap},
};
use siaga_core::markdown::BlockStateMap;

/// Renders conversation entries to a frame.
///
/// Assistant replies go through the markdown model: the reply is segmented,
/// code segments become framed cards with per-block toggle state, and prose
/// segments are classified line by line with inline emphasis resolved.
pub struct TranscriptRenderer<'a> {
    transcript: &'a Transcript,
    blocks: &'a BlockStateMap,
    selected_block: Option<usize>,
    typing: bool,
    animation_frame: u8,
}

impl<'a> TranscriptRenderer<'a> {
    /// Create a new renderer for the given transcript and block state
    pub fn new(transcript: &'a Transcript, blocks: &'a BlockStateMap) -> Self {
        Self { transcript, blocks, selected_block: None, typing: false, animation_frame: 0 }
    }

    /// Highlight one code block as selected for keyboard toggles
    pub fn with_selected_block(mut self, selected: Option<usize>) -> Self {
        self.selected_block = selected;
        self
    }

    /// Show the animated typing indicator below the entries
    pub fn with_typing_indicator(mut self, typing: bool, animation_frame: u8) -> Self {
        self.typing = typing;
        self.animation_frame = animation_frame;
        self
    }

    /// Render the conversation to the given area
    pub fn render(&self, frame: &mut Frame<'_>, area: Rect) {
        let padding_x = 1usize;
        let content_width = area.width.saturating_sub((padding_x * 2 + 1) as u16) as usize;
        let text_lines = self.build_lines(content_width);

        let mut padded_lines = Vec::with_capacity(text_lines.len());
        let left_pad = Span::styled(" ", Style::default().bg(Theme::BG));
        for line in text_lines {
            let mut spans = Vec::with_capacity(line.spans.len() + 1);
            spans.push(left_pad.clone());
            spans.extend(line.spans);
            padded_lines.push(Line::from(spans));
        }

        let total_lines = padded_lines.len() as u16;
        let scroll_y = total_lines
            .saturating_sub(area.height)
            .saturating_sub(self.transcript.scroll());

        frame.render_widget(Block::default().style(Style::default().bg(Theme::BG)), area);

        let paragraph = Paragraph::new(Text::from(padded_lines))
            .wrap(Wrap { trim: false })
            .scroll((scroll_y, 0));

        frame.render_widget(paragraph, area);
    }

    /// Build the full line list for the current state (entries, empty state,
    /// typing indicator). Split out of `render` so tests can inspect it.
    pub fn build_lines(&self, width: usize) -> Vec<Line<'static>> {
        let mut lines = Vec::new();

        if self.transcript.is_empty() && !self.typing {
            self.render_empty_state(&mut lines);
            return lines;
        }

        for (idx, entry) in self.transcript.entries().iter().enumerate() {
            if idx > 0 {
                lines.push(Line::default());
            }
            self.render_entry(entry, width, &mut lines);
        }

        if self.typing {
            lines.push(Line::default());
            self.render_typing_indicator(&mut lines);
        }

        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain(lines: &[Line<'_>]) -> String {
        lines.iter().map(|l| l.to_string()).collect::<Vec<_>>().join("\n")
    }

    #[test]
    fn test_empty_transcript_shows_empty_state() {
        let transcript = Transcript::new();
        let blocks = BlockStateMap::new();
        let renderer = TranscriptRenderer::new(&transcript, &blocks);

        let rendered = plain(&renderer.build_lines(80));
        assert!(rendered.contains("Mulai Percakapan Baru"));
    }

    #[test]
    fn test_entries_render_in_order() {
        let mut transcript = Transcript::new();
        transcript.add_user_message("Bagaimana status banjir?");
        transcript.add_assistant_reply("Tetap waspada.");

        let blocks = BlockStateMap::new();
        let renderer = TranscriptRenderer::new(&transcript, &blocks);
        let rendered = plain(&renderer.build_lines(80));

        let user_pos = rendered.find("Bagaimana status banjir?").unwrap();
        let reply_pos = rendered.find("Tetap waspada.").unwrap();
        assert!(user_pos < reply_pos);
    }

    #[test]
    fn test_typing_indicator_rendered_while_loading() {
        let transcript = Transcript::new();
        let blocks = BlockStateMap::new();
        let renderer = TranscriptRenderer::new(&transcript, &blocks).with_typing_indicator(true, 0);

        let rendered = plain(&renderer.build_lines(80));
        assert!(rendered.contains("Sedang mengetik"));
    }

    #[test]
    fn test_code_block_rendered_as_card() {
        let mut transcript = Transcript::new();
        transcript.add_assistant_reply("Contoh:\n```python\nprint(1)\n```");

        let blocks = BlockStateMap::new();
        let renderer = TranscriptRenderer::new(&transcript, &blocks);
        let rendered = plain(&renderer.build_lines(80));

        assert!(rendered.contains("python"));
        assert!(rendered.contains("print(1)"));
        assert!(rendered.contains("baris"));
    }
}
