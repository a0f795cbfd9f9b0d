use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use syntect::easy::HighlightLines;
use syntect::highlighting::{Theme, ThemeSet};
use syntect::parsing::SyntaxSet;
use syntect::util::LinesWithEndings;

/// Syntax highlighter for code blocks
pub struct SyntaxHighlighter {
    syntax_set: SyntaxSet,
    theme: Theme,
}

impl SyntaxHighlighter {
    /// Create a new syntax highlighter with default settings
    pub fn new() -> Self {
        let theme_set = ThemeSet::load_defaults();
        Self {
            syntax_set: SyntaxSet::load_defaults_newlines(),
            theme: theme_set.themes["base16-ocean.dark"].clone(),
        }
    }

    /// Highlight a code block, one styled [`Line`] per source line.
    ///
    /// Unknown language tokens fall back to plain-text highlighting; this
    /// never fails.
    pub fn highlight_lines(&self, code: &str, lang: &str) -> Vec<Line<'static>> {
        let syntax = self
            .syntax_set
            .find_syntax_by_token(lang)
            .or_else(|| self.syntax_set.find_syntax_by_name(lang))
            .or_else(|| self.syntax_set.find_syntax_by_extension(lang))
            .unwrap_or_else(|| self.syntax_set.find_syntax_plain_text());

        let mut highlighter = HighlightLines::new(syntax, &self.theme);
        let mut lines = Vec::new();

        for source_line in LinesWithEndings::from(code) {
            let mut spans = Vec::new();

            if let Ok(ranges) = highlighter.highlight_line(source_line, &self.syntax_set) {
                for (style, text) in ranges {
                    let content = text.trim_end_matches('\n').to_string();
                    if content.is_empty() {
                        continue;
                    }
                    let color = Self::syntect_to_ratatui_color(&style.foreground);
                    spans.push(Span::styled(content, Style::default().fg(color)));
                }
            } else {
                spans.push(Span::styled(
                    source_line.trim_end_matches('\n').to_string(),
                    Style::default().fg(self.text_color()),
                ));
            }

            lines.push(Line::from(spans));
        }

        lines
    }

    /// Convert syntect color to ratatui color
    fn syntect_to_ratatui_color(color: &syntect::highlighting::Color) -> Color {
        Color::Rgb(color.r, color.g, color.b)
    }

    /// Get default text color from theme
    fn text_color(&self) -> Color {
        let settings = &self.theme.settings;
        let text_color =
            settings
                .foreground
                .as_ref()
                .unwrap_or(&syntect::highlighting::Color { r: 198, g: 200, b: 209, a: 255 });
        Color::Rgb(text_color.r, text_color.g, text_color.b)
    }
}

impl Default for SyntaxHighlighter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_syntax_highlighter_new() {
        let highlighter = SyntaxHighlighter::new();
        assert!(!highlighter.syntax_set.syntaxes().is_empty());
    }

    #[test]
    fn test_highlight_rust() {
        let highlighter = SyntaxHighlighter::new();
        let code = "fn main() {\n    println!(\"halo\");\n}\n";
        let lines = highlighter.highlight_lines(code, "rust");
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn test_highlight_python() {
        let highlighter = SyntaxHighlighter::new();
        let lines = highlighter.highlight_lines("def hello():\n    print('halo')\n", "python");
        assert_eq!(lines.len(), 2);
    }

    #[test]
    fn test_highlight_unknown_lang_falls_back() {
        let highlighter = SyntaxHighlighter::new();
        let lines = highlighter.highlight_lines("some code here\n", "unknownlangxyz");
        assert_eq!(lines.len(), 1);
        assert!(!lines[0].spans.is_empty());
    }

    #[test]
    fn test_highlight_preserves_line_count() {
        let highlighter = SyntaxHighlighter::new();
        let code = "a\n\nb\n";
        let lines = highlighter.highlight_lines(code, "plaintext");
        assert_eq!(lines.len(), 3);
    }
}
