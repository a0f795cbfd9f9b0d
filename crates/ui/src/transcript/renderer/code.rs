use crate::syntax::SyntaxHighlighter;
use crate::theme::Theme;

use ratatui::{
    style::{Style, Stylize},
    text::{Line, Span},
};
use siaga_core::markdown::{CodeBlockView, CodeSegment, TRUNCATION_MARKER, language_meta};
use unicode_width::UnicodeWidthStr;

impl<'a> super::TranscriptRenderer<'a> {
    /// Render a code segment as a framed card.
    ///
    /// Header: badge glyph, language, line count and toggle indicators.
    /// Body: syntax-highlighted display slice, optional line-number gutter,
    /// and the truncation marker when collapsed. Footer: size stats.
    pub(super) fn render_code_block(
        &self, segment: &CodeSegment, index: usize, width: usize, lines: &mut Vec<Line<'static>>,
    ) {
        let view = CodeBlockView::build(segment, index, self.blocks);
        let meta = language_meta(&view.language);
        let selected = self.selected_block == Some(index);

        let border_color = if selected { Theme::YELLOW } else { Theme::accent_color(meta.accent) };
        let border_style = Style::default().fg(border_color);
        let muted_style = Style::default().fg(Theme::MUTED);

        lines.push(Line::default());
        lines.push(self.card_header(&view, meta.glyph, width, border_style));

        let body = self.highlighted_body(&view);
        let gutter_width = if view.show_line_numbers { view.line_count.to_string().len().max(2) } else { 0 };

        for (line_idx, code_line) in body.into_iter().enumerate() {
            let mut spans = vec![Span::styled("│ ", border_style)];

            if view.show_line_numbers {
                spans.push(Span::styled(
                    format!("{:>width$} │ ", line_idx + 1, width = gutter_width),
                    muted_style,
                ));
            }

            spans.extend(code_line.spans);
            lines.push(Line::from(spans));
        }

        if view.is_truncated && !view.is_expanded {
            let mut spans = vec![Span::styled("│ ", border_style)];
            spans.push(Span::styled(TRUNCATION_MARKER.to_string(), muted_style.italic()));
            lines.push(Line::from(spans));
        }

        lines.push(self.card_footer(segment, &view, width, border_style));
    }

    /// Top border with badge, language, line count and state indicators
    fn card_header(&self, view: &CodeBlockView, glyph: &str, width: usize, border_style: Style) -> Line<'static> {
        let mut title = format!("┌─ {} {} ─ {} baris ", glyph, view.language, view.line_count);

        if view.show_line_numbers {
            title.push_str("─ # ");
        }
        if view.is_truncated {
            title.push_str(if view.is_expanded { "─ ▲ " } else { "─ ▼ " });
        }

        let mut spans = vec![Span::styled(title, border_style)];

        if view.is_copied {
            spans.push(Span::styled("✓ Tersalin ", Style::default().fg(Theme::GREEN).bold()));
        }

        let used: usize = spans.iter().map(|s| s.content.width()).sum();
        let fill = width.saturating_sub(used);
        spans.push(Span::styled("─".repeat(fill), border_style));

        Line::from(spans)
    }

    /// Bottom border with size stats
    fn card_footer(
        &self, segment: &CodeSegment, view: &CodeBlockView, width: usize, border_style: Style,
    ) -> Line<'static> {
        let stats = format!(
            "└─ {} baris • {} karakter ─ {} ",
            view.line_count,
            segment.code.chars().count(),
            view.language.to_uppercase()
        );

        let fill = width.saturating_sub(stats.width());
        Line::from(vec![
            Span::styled(stats, border_style),
            Span::styled("─".repeat(fill), border_style),
        ])
    }

    /// Highlight the displayed slice, marker line excluded
    fn highlighted_body(&self, view: &CodeBlockView) -> Vec<Line<'static>> {
        let code = if view.is_truncated && !view.is_expanded {
            view.displayed_code
                .strip_suffix(TRUNCATION_MARKER)
                .unwrap_or(&view.displayed_code)
        } else {
            &view.displayed_code
        };

        let highlighter = SyntaxHighlighter::new();
        highlighter.highlight_lines(code, &view.language)
    }
}
