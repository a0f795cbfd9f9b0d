use crate::theme::Theme;

use ratatui::{
    style::{Color, Style, Stylize},
    text::{Line, Span},
};
use siaga_core::markdown::{InlineSpan, TextLine, classify_line, parse_inline};

impl<'a> super::TranscriptRenderer<'a> {
    /// Render a prose segment line by line.
    ///
    /// Every physical line is classified independently; inline emphasis is
    /// resolved on the content after structural markers are stripped.
    pub(super) fn render_prose(&self, text: &str, lines: &mut Vec<Line<'static>>) {
        for source_line in text.lines() {
            lines.push(self.render_prose_line(source_line));
        }
    }

    fn render_prose_line(&self, source_line: &str) -> Line<'static> {
        let base = Style::default().fg(Theme::FG);

        match classify_line(source_line) {
            TextLine::Heading { level, content } => {
                let color = heading_color(level);
                let mut spans = vec![Span::styled(
                    format!("{} ", "#".repeat(level as usize)),
                    Style::default().fg(Theme::MUTED),
                )];
                spans.extend(inline_spans(&content, Style::default().fg(color).bold()));
                Line::from(spans)
            }
            TextLine::Bullet { content } => {
                let mut spans = vec![Span::styled("  • ", Style::default().fg(Theme::BLUE))];
                spans.extend(inline_spans(&content, base));
                Line::from(spans)
            }
            TextLine::Numbered { number, content } => {
                let mut spans = vec![Span::styled(format!("  {}. ", number), Style::default().fg(Theme::BLUE))];
                spans.extend(inline_spans(&content, base));
                Line::from(spans)
            }
            TextLine::Quote { content } => {
                let mut spans = vec![Span::styled("┃ ", Style::default().fg(Theme::BLUE))];
                spans.extend(inline_spans(&content, base.italic()));
                Line::from(spans)
            }
            TextLine::Blank => Line::default(),
            TextLine::Paragraph { content } => Line::from(inline_spans(&content, base)),
        }
    }
}

fn heading_color(level: u8) -> Color {
    match level {
        1 | 2 => Theme::BLUE,
        3 | 4 => Theme::CYAN,
        _ => Theme::FG,
    }
}

/// Lower inline spans into styled ratatui spans
fn inline_spans(content: &str, base: Style) -> Vec<Span<'static>> {
    parse_inline(content)
        .into_iter()
        .map(|span| match span {
            InlineSpan::Text(text) => Span::styled(text, base),
            InlineSpan::Bold(text) => Span::styled(text, base.bold()),
            InlineSpan::Italic(text) => Span::styled(text, base.italic()),
            InlineSpan::Code(text) => Span::styled(text, Style::default().fg(Theme::CYAN).bg(Theme::PANEL_BG)),
            InlineSpan::Link { label, url: _ } => Span::styled(
                format!("{} ↗", label),
                Style::default().fg(Theme::BLUE).underlined(),
            ),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::style::Modifier;

    #[test]
    fn test_inline_spans_styles() {
        let spans = inline_spans("a **b** `c`", Style::default().fg(Theme::FG));
        assert_eq!(spans.len(), 4);
        assert!(spans[1].style.add_modifier.contains(Modifier::BOLD));
        assert_eq!(spans[3].style.bg, Some(Theme::PANEL_BG));
    }

    #[test]
    fn test_link_span_gets_marker() {
        let spans = inline_spans("[BMKG](https://bmkg.go.id)", Style::default());
        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].content.as_ref(), "BMKG ↗");
        assert!(spans[0].style.add_modifier.contains(Modifier::UNDERLINED));
    }

    #[test]
    fn test_heading_color_by_level() {
        assert_eq!(heading_color(1), Theme::BLUE);
        assert_eq!(heading_color(4), Theme::CYAN);
        assert_eq!(heading_color(6), Theme::FG);
    }
}
