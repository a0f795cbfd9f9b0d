use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Wrap text to a specific display width, returning one string per line.
///
/// Words wider than the full width are split at the character level so no
/// line ever exceeds the target.
pub(super) fn wrap_text_to_width(text: &str, max_width: usize) -> Vec<String> {
    let mut result = Vec::new();
    if max_width == 0 {
        return result;
    }

    let words: Vec<&str> = text.split_whitespace().collect();
    if words.is_empty() {
        return result;
    }

    let mut current_line = String::new();
    let mut current_width = 0;

    for word in words {
        let word_width = word.width();
        let space_width = if current_line.is_empty() { 0 } else { 1 };

        if current_width + space_width + word_width > max_width {
            if !current_line.is_empty() {
                result.push(current_line.clone());
                current_line = String::new();
                current_width = 0;
            }

            if word_width > max_width {
                let mut chunk_width = 0;
                let mut chunk = String::new();

                for ch in word.chars() {
                    let ch_width = ch.width().unwrap_or(0);

                    if chunk_width + ch_width > max_width {
                        result.push(chunk.clone());
                        chunk.clear();
                        chunk_width = 0;
                    }

                    chunk.push(ch);
                    chunk_width += ch_width;
                }

                if !chunk.is_empty() {
                    result.push(chunk);
                }
                continue;
            }
        }

        if !current_line.is_empty() {
            current_line.push(' ');
            current_width += 1;
        }
        current_line.push_str(word);
        current_width += word_width;
    }

    if !current_line.is_empty() {
        result.push(current_line);
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_text_stays_on_one_line() {
        assert_eq!(wrap_text_to_width("halo dunia", 20), vec!["halo dunia"]);
    }

    #[test]
    fn test_wraps_at_word_boundaries() {
        let wrapped = wrap_text_to_width("air sungai mulai naik cepat", 11);
        assert_eq!(wrapped, vec!["air sungai", "mulai naik", "cepat"]);
    }

    #[test]
    fn test_splits_overlong_words() {
        let wrapped = wrap_text_to_width("kata supercalifragilistic pendek", 10);
        assert!(wrapped.iter().all(|line| line.len() <= 10));
        assert!(wrapped.concat().contains("supercalifragilistic"));
    }

    #[test]
    fn test_zero_width_returns_nothing() {
        assert!(wrap_text_to_width("halo", 0).is_empty());
    }

    #[test]
    fn test_whitespace_only_returns_nothing() {
        assert!(wrap_text_to_width("   ", 10).is_empty());
    }
}
