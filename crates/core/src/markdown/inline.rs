/// One run of inline content after emphasis, code, and link markers are
/// resolved. Flat by design: spans never nest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InlineSpan {
    Text(String),
    Bold(String),
    Italic(String),
    Code(String),
    Link { label: String, url: String },
}

/// Resolve inline markup in a single left-to-right pass.
///
/// Fixed precedence at each position: `**bold**` before `*italic*` (a `**`
/// opener can never be consumed as italic), then `` `code` `` and
/// `[label](url)`. Substitutions are flat; nested constructs inside a span
/// are kept verbatim, and whatever greedy first-match produces on
/// overlapping markers is accepted. Unclosed markers come out as literal
/// text. Total for all inputs.
pub fn parse_inline(text: &str) -> Vec<InlineSpan> {
    let mut spans = Vec::new();
    let mut plain = String::new();
    let mut rest = text;

    while !rest.is_empty() {
        if let Some(after) = rest.strip_prefix("**") {
            if let Some(close) = after.find("**") {
                flush_plain(&mut spans, &mut plain);
                spans.push(InlineSpan::Bold(after[..close].to_string()));
                rest = &after[close + 2..];
                continue;
            }
        } else if let Some(after) = rest.strip_prefix('*') {
            if let Some(close) = after.find('*') {
                flush_plain(&mut spans, &mut plain);
                spans.push(InlineSpan::Italic(after[..close].to_string()));
                rest = &after[close + 1..];
                continue;
            }
        } else if let Some(after) = rest.strip_prefix('`') {
            // Inline code needs at least one character between the ticks.
            if let Some(close) = after.find('`')
                && close > 0
            {
                flush_plain(&mut spans, &mut plain);
                spans.push(InlineSpan::Code(after[..close].to_string()));
                rest = &after[close + 1..];
                continue;
            }
        } else if rest.starts_with('[')
            && let Some((label, url, consumed)) = match_link(rest)
        {
            flush_plain(&mut spans, &mut plain);
            spans.push(InlineSpan::Link { label, url });
            rest = &rest[consumed..];
            continue;
        }

        let ch = rest.chars().next().expect("rest is non-empty");
        plain.push(ch);
        rest = &rest[ch.len_utf8()..];
    }

    flush_plain(&mut spans, &mut plain);
    spans
}

fn flush_plain(spans: &mut Vec<InlineSpan>, plain: &mut String) {
    if !plain.is_empty() {
        spans.push(InlineSpan::Text(std::mem::take(plain)));
    }
}

/// Match `[label](url)` at the start of `rest`; label and url are non-empty
fn match_link(rest: &str) -> Option<(String, String, usize)> {
    let label_end = rest.find(']')?;
    let label = &rest[1..label_end];
    if label.is_empty() || !rest[label_end..].starts_with("](") {
        return None;
    }

    let url_start = label_end + 2;
    let url_len = rest[url_start..].find(')')?;
    let url = &rest[url_start..url_start + url_len];
    if url.is_empty() {
        return None;
    }

    Some((label.to_string(), url.to_string(), url_start + url_len + 1))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str) -> InlineSpan {
        InlineSpan::Text(s.to_string())
    }

    #[test]
    fn test_plain_text_passes_through() {
        assert_eq!(parse_inline("tidak ada markup"), vec![text("tidak ada markup")]);
        assert_eq!(parse_inline(""), Vec::<InlineSpan>::new());
    }

    #[test]
    fn test_bold() {
        assert_eq!(
            parse_inline("ini **penting** sekali"),
            vec![text("ini "), InlineSpan::Bold("penting".to_string()), text(" sekali")]
        );
    }

    #[test]
    fn test_italic() {
        assert_eq!(
            parse_inline("agak *miring* saja"),
            vec![text("agak "), InlineSpan::Italic("miring".to_string()), text(" saja")]
        );
    }

    #[test]
    fn test_bold_has_precedence_over_italic() {
        // The inner single-star pair must not close the bold span early.
        let spans = parse_inline("**bold *nested* still**");
        assert_eq!(spans, vec![InlineSpan::Bold("bold *nested* still".to_string())]);

        let bold_count = spans.iter().filter(|s| matches!(s, InlineSpan::Bold(_))).count();
        assert_eq!(bold_count, 1);
    }

    #[test]
    fn test_inline_code() {
        assert_eq!(
            parse_inline("jalankan `cargo run` dulu"),
            vec![text("jalankan "), InlineSpan::Code("cargo run".to_string()), text(" dulu")]
        );
    }

    #[test]
    fn test_empty_code_is_literal() {
        assert_eq!(parse_inline("a `` b"), vec![text("a `` b")]);
    }

    #[test]
    fn test_link() {
        assert_eq!(
            parse_inline("lihat [BMKG](https://bmkg.go.id) sekarang"),
            vec![
                text("lihat "),
                InlineSpan::Link { label: "BMKG".to_string(), url: "https://bmkg.go.id".to_string() },
                text(" sekarang"),
            ]
        );
    }

    #[test]
    fn test_malformed_link_is_literal() {
        assert_eq!(parse_inline("[label saja]"), vec![text("[label saja]")]);
        assert_eq!(parse_inline("[a](  "), vec![text("[a](  ")]);
        assert_eq!(parse_inline("[](x)"), vec![text("[](x)")]);
    }

    #[test]
    fn test_unclosed_markers_are_literal() {
        assert_eq!(parse_inline("**tidak ditutup"), vec![text("**tidak ditutup")]);
        assert_eq!(parse_inline("*setengah"), vec![text("*setengah")]);
        assert_eq!(parse_inline("`terbuka"), vec![text("`terbuka")]);
    }

    #[test]
    fn test_mixed_markup() {
        assert_eq!(
            parse_inline("**Siaga 1** di *hulu*, cek `status` di [peta](https://p.id)"),
            vec![
                InlineSpan::Bold("Siaga 1".to_string()),
                text(" di "),
                InlineSpan::Italic("hulu".to_string()),
                text(", cek "),
                InlineSpan::Code("status".to_string()),
                text(" di "),
                InlineSpan::Link { label: "peta".to_string(), url: "https://p.id".to_string() },
            ]
        );
    }

    #[test]
    fn test_no_nesting_inside_spans() {
        // Flat substitution: markup inside a code span stays verbatim.
        assert_eq!(parse_inline("`**not bold**`"), vec![InlineSpan::Code("**not bold**".to_string())]);
    }
}
