const FENCE: &str = "```";

/// Fallback language token when a fence has no annotation
pub const DEFAULT_LANGUAGE: &str = "plaintext";

/// A fenced code block extracted from a reply
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeSegment {
    /// Fence annotation token ("plaintext" when absent)
    pub language: String,
    /// Delimited content with both fences stripped
    pub code: String,
    /// Original fenced substring, delimiters included
    source: String,
}

impl CodeSegment {
    /// Original fenced substring, delimiters included
    pub fn source(&self) -> &str {
        &self.source
    }
}

/// A prose run between code fences
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextSegment {
    pub text: String,
}

/// A maximal substring of a reply, classified as fenced code or prose
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Code(CodeSegment),
    Text(TextSegment),
}

impl Segment {
    /// The original substring this segment was cut from.
    ///
    /// Concatenating the sources of all segments in order reproduces the
    /// input reply byte-for-byte.
    pub fn source(&self) -> &str {
        match self {
            Segment::Code(code) => code.source(),
            Segment::Text(text) => &text.text,
        }
    }
}

/// Split a reply into an ordered sequence of code and prose segments.
///
/// Scans for non-greedy `"```" ... "```"` spans. Each span becomes a
/// [`Segment::Code`]; the gaps become [`Segment::Text`] (empty gaps are
/// dropped, they render as nothing). An opening fence without a matching
/// close is folded into the surrounding text segment and rendered as plain
/// prose. Total for all inputs.
pub fn segment(reply: &str) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut remaining = reply;

    while let Some(start_idx) = remaining.find(FENCE) {
        let after_open = &remaining[start_idx + FENCE.len()..];

        let Some(close_rel) = after_open.find(FENCE) else {
            // Unterminated fence: keep everything from here on as prose.
            break;
        };

        if start_idx > 0 {
            segments.push(Segment::Text(TextSegment { text: remaining[..start_idx].to_string() }));
        }

        let inner = &after_open[..close_rel];
        let source_end = start_idx + FENCE.len() + close_rel + FENCE.len();
        let source = remaining[start_idx..source_end].to_string();
        let (language, code) = split_fence_inner(inner);

        segments.push(Segment::Code(CodeSegment { language, code, source }));
        remaining = &remaining[source_end..];
    }

    if !remaining.is_empty() {
        segments.push(Segment::Text(TextSegment { text: remaining.to_string() }));
    }

    segments
}

/// Split the delimited content into (language, payload).
///
/// The language token is the run of word characters between the opening
/// delimiter and the first newline; when present, the token and its newline
/// are stripped from the payload. Anything that is not a bare token (an
/// empty header, or code crammed onto the fence line) leaves the payload
/// untouched and the language at its default.
fn split_fence_inner(inner: &str) -> (String, String) {
    match inner.find('\n') {
        Some(newline_idx) => {
            let header = inner[..newline_idx].trim();
            if is_language_token(header) {
                (header.to_string(), inner[newline_idx + 1..].to_string())
            } else if header.is_empty() {
                (DEFAULT_LANGUAGE.to_string(), inner[newline_idx + 1..].to_string())
            } else {
                (DEFAULT_LANGUAGE.to_string(), inner.to_string())
            }
        }
        None => {
            let header = inner.trim();
            if is_language_token(header) {
                (header.to_string(), String::new())
            } else {
                (DEFAULT_LANGUAGE.to_string(), inner.to_string())
            }
        }
    }
}

fn is_language_token(header: &str) -> bool {
    !header.is_empty() && header.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roundtrip(input: &str) -> String {
        segment(input).iter().map(Segment::source).collect()
    }

    #[test]
    fn test_plain_text_is_single_segment() {
        let segments = segment("Selamat pagi, ada yang bisa dibantu?");
        assert_eq!(segments.len(), 1);
        assert!(matches!(&segments[0], Segment::Text(t) if t.text == "Selamat pagi, ada yang bisa dibantu?"));
    }

    #[test]
    fn test_empty_input_yields_no_segments() {
        assert!(segment("").is_empty());
    }

    #[test]
    fn test_fenced_block_with_language() {
        let segments = segment("Here:\n```python\nprint(1)\n```\nDone");
        assert_eq!(segments.len(), 3);

        assert!(matches!(&segments[0], Segment::Text(t) if t.text == "Here:\n"));
        match &segments[1] {
            Segment::Code(code) => {
                assert_eq!(code.language, "python");
                assert_eq!(code.code, "print(1)\n");
                assert_eq!(code.source(), "```python\nprint(1)\n```");
            }
            Segment::Text(_) => panic!("expected code segment"),
        }
        assert!(matches!(&segments[2], Segment::Text(t) if t.text == "\nDone"));
    }

    #[test]
    fn test_fenced_block_without_language() {
        let segments = segment("```\nlet x = 1;\n```");
        assert_eq!(segments.len(), 1);
        match &segments[0] {
            Segment::Code(code) => {
                assert_eq!(code.language, "plaintext");
                assert_eq!(code.code, "let x = 1;\n");
            }
            Segment::Text(_) => panic!("expected code segment"),
        }
    }

    #[test]
    fn test_adjacent_blocks_have_no_empty_gap() {
        let segments = segment("```a\nx\n``````b\ny\n```");
        assert_eq!(segments.len(), 2);
        assert!(matches!(&segments[0], Segment::Code(c) if c.language == "a"));
        assert!(matches!(&segments[1], Segment::Code(c) if c.language == "b"));
    }

    #[test]
    fn test_unterminated_fence_stays_prose() {
        let input = "intro\n```python\nprint(1)";
        let segments = segment(input);
        assert_eq!(segments.len(), 1);
        assert!(matches!(&segments[0], Segment::Text(t) if t.text == input));
    }

    #[test]
    fn test_unterminated_fence_after_closed_block() {
        let input = "```sh\nls\n```\nthen ```open";
        let segments = segment(input);
        assert_eq!(segments.len(), 2);
        assert!(matches!(&segments[0], Segment::Code(c) if c.language == "sh"));
        assert!(matches!(&segments[1], Segment::Text(t) if t.text == "\nthen ```open"));
    }

    #[test]
    fn test_header_that_is_not_a_token_keeps_payload() {
        let segments = segment("```x = 1\ny = 2\n```");
        match &segments[0] {
            Segment::Code(code) => {
                assert_eq!(code.language, "plaintext");
                assert_eq!(code.code, "x = 1\ny = 2\n");
            }
            Segment::Text(_) => panic!("expected code segment"),
        }
    }

    #[test]
    fn test_single_line_fence() {
        let segments = segment("```rust```");
        match &segments[0] {
            Segment::Code(code) => {
                assert_eq!(code.language, "rust");
                assert_eq!(code.code, "");
            }
            Segment::Text(_) => panic!("expected code segment"),
        }
    }

    #[test]
    fn test_roundtrip_reconstructs_input() {
        let cases = [
            "",
            "plain prose only",
            "Here:\n```python\nprint(1)\n```\nDone",
            "```\nno language\n```",
            "a\n```js\n1\n```\nb\n```go\n2\n```\nc",
            "unterminated ```python\nprint(1)",
            "``` \nweird header\n```",
            "edge``````edge",
        ];

        for case in cases {
            assert_eq!(roundtrip(case), case, "round-trip failed for {:?}", case);
        }
    }
}
