/// Structural classification of one physical prose line.
///
/// Classification is line-local: adjacent list items are independent views,
/// never grouped into a container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextLine {
    /// Unordered list item (`- `, `* `, `+ `)
    Bullet { content: String },
    /// Ordered list item; the literal number string is kept, never renumbered
    Numbered { number: String, content: String },
    /// Heading with level 1-6
    Heading { level: u8, content: String },
    /// Blockquote line
    Quote { content: String },
    /// Empty or whitespace-only line
    Blank,
    /// Anything else
    Paragraph { content: String },
}

/// Classify a single line, first match wins.
///
/// Order: bullet, numbered, heading, blockquote, blank, paragraph. The
/// structural patterns are anchored at line start, so overlap is limited;
/// the order is still fixed because a line like `1. ...` must stay a list
/// item even if later rules could match. Total function, never fails.
pub fn classify_line(line: &str) -> TextLine {
    if let Some(content) = strip_bullet_marker(line) {
        return TextLine::Bullet { content };
    }

    if let Some((number, content)) = strip_number_marker(line) {
        return TextLine::Numbered { number, content };
    }

    if let Some((level, content)) = strip_heading_marker(line) {
        return TextLine::Heading { level, content };
    }

    if let Some(content) = strip_quote_marker(line) {
        return TextLine::Quote { content };
    }

    if line.trim().is_empty() {
        return TextLine::Blank;
    }

    TextLine::Paragraph { content: line.to_string() }
}

/// `optional whitespace, one of -*+, one space`
fn strip_bullet_marker(line: &str) -> Option<String> {
    let trimmed = line.trim_start();
    let mut chars = trimmed.chars();
    match (chars.next(), chars.next()) {
        (Some('-' | '*' | '+'), Some(' ')) => Some(chars.as_str().to_string()),
        _ => None,
    }
}

/// `optional whitespace, digits, '.', one space`; captures the literal number
fn strip_number_marker(line: &str) -> Option<(String, String)> {
    let trimmed = line.trim_start();
    let digits_end = trimmed.find(|c: char| !c.is_ascii_digit())?;
    if digits_end == 0 {
        return None;
    }

    let rest = &trimmed[digits_end..];
    let content = rest.strip_prefix(". ")?;
    Some((trimmed[..digits_end].to_string(), content.to_string()))
}

/// `1-6 leading '#', one space`; 7+ hashes fall through to paragraph
fn strip_heading_marker(line: &str) -> Option<(u8, String)> {
    let hashes = line.chars().take_while(|&c| c == '#').count();
    if hashes == 0 || hashes > 6 {
        return None;
    }

    let content = line[hashes..].strip_prefix(' ')?;
    Some((hashes as u8, content.to_string()))
}

/// `optional whitespace, '>', one space`
fn strip_quote_marker(line: &str) -> Option<String> {
    let trimmed = line.trim_start();
    let rest = trimmed.strip_prefix('>')?;
    rest.strip_prefix(' ').map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bullet_variants() {
        assert_eq!(classify_line("- item"), TextLine::Bullet { content: "item".to_string() });
        assert_eq!(classify_line("* item"), TextLine::Bullet { content: "item".to_string() });
        assert_eq!(classify_line("+ item"), TextLine::Bullet { content: "item".to_string() });
        assert_eq!(classify_line("  - indented"), TextLine::Bullet { content: "indented".to_string() });
    }

    #[test]
    fn test_bullet_requires_space_after_marker() {
        assert_eq!(
            classify_line("*italic, not a bullet*"),
            TextLine::Paragraph { content: "*italic, not a bullet*".to_string() }
        );
        assert_eq!(classify_line("-dash"), TextLine::Paragraph { content: "-dash".to_string() });
    }

    #[test]
    fn test_numbered_keeps_literal_number() {
        assert_eq!(
            classify_line("3. third"),
            TextLine::Numbered { number: "3".to_string(), content: "third".to_string() }
        );
        assert_eq!(
            classify_line("  12. twelfth"),
            TextLine::Numbered { number: "12".to_string(), content: "twelfth".to_string() }
        );
    }

    #[test]
    fn test_numbered_requires_dot_and_space() {
        assert_eq!(classify_line("3) third"), TextLine::Paragraph { content: "3) third".to_string() });
        assert_eq!(classify_line("3.third"), TextLine::Paragraph { content: "3.third".to_string() });
    }

    #[test]
    fn test_heading_levels() {
        assert_eq!(classify_line("# A"), TextLine::Heading { level: 1, content: "A".to_string() });
        assert_eq!(classify_line("### Tiga"), TextLine::Heading { level: 3, content: "Tiga".to_string() });
        assert_eq!(classify_line("###### Z"), TextLine::Heading { level: 6, content: "Z".to_string() });
    }

    #[test]
    fn test_seven_hashes_is_a_paragraph() {
        assert_eq!(
            classify_line("####### Q"),
            TextLine::Paragraph { content: "####### Q".to_string() }
        );
    }

    #[test]
    fn test_heading_requires_space() {
        assert_eq!(classify_line("#tag"), TextLine::Paragraph { content: "#tag".to_string() });
    }

    #[test]
    fn test_blockquote() {
        assert_eq!(classify_line("> dikutip"), TextLine::Quote { content: "dikutip".to_string() });
        assert_eq!(classify_line("  > indented"), TextLine::Quote { content: "indented".to_string() });
        assert_eq!(classify_line(">no space"), TextLine::Paragraph { content: ">no space".to_string() });
    }

    #[test]
    fn test_blank_lines() {
        assert_eq!(classify_line(""), TextLine::Blank);
        assert_eq!(classify_line("   "), TextLine::Blank);
        assert_eq!(classify_line("\t"), TextLine::Blank);
    }

    #[test]
    fn test_paragraph_fallthrough() {
        assert_eq!(
            classify_line("Air sungai mulai naik."),
            TextLine::Paragraph { content: "Air sungai mulai naik.".to_string() }
        );
    }

    #[test]
    fn test_list_beats_later_rules() {
        // A bullet whose content starts with '#' stays a bullet.
        assert_eq!(
            classify_line("- # not a heading"),
            TextLine::Bullet { content: "# not a heading".to_string() }
        );
    }
}
