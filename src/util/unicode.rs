use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// Display width in terminal cells.
pub fn display_width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

/// Truncate a string to fit within `max_cells` terminal cells, appending `…` if truncated.
pub fn truncate_to_width(s: &str, max_cells: usize) -> String {
    if max_cells == 0 {
        return String::new();
    }
    if display_width(s) <= max_cells {
        return s.to_string();
    }
    if max_cells <= 1 {
        return "\u{2026}".to_string();
    }
    let budget = max_cells - 1; // reserve 1 cell for '…'
    let mut width = 0;
    let mut result = String::new();
    for grapheme in s.graphemes(true) {
        let gw = display_width(grapheme);
        if width + gw > budget {
            break;
        }
        width += gw;
        result.push_str(grapheme);
    }
    result.push('\u{2026}');
    result
}

/// Remove the last grapheme cluster (Backspace in a text prompt).
pub fn pop_grapheme(s: &mut String) {
    if let Some((i, _)) = s.grapheme_indices(true).next_back() {
        s.truncate(i);
    }
}

/// Remove the last word and any whitespace after it (Ctrl-W in a text prompt).
pub fn pop_word(s: &mut String) {
    let trimmed = s.trim_end().len();
    s.truncate(trimmed);
    let start = s
        .unicode_word_indices()
        .next_back()
        .map_or(0, |(i, _)| i);
    s.truncate(start);
}

/// Greedy word wrap into lines of at most `width` cells. Words wider than a
/// line are truncated with `…`.
pub fn wrap_to_width(s: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return Vec::new();
    }
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_width = 0;
    for word in s.split_whitespace() {
        let word = truncate_to_width(word, width);
        let ww = display_width(&word);
        if current_width > 0 && current_width + 1 + ww > width {
            lines.push(std::mem::take(&mut current));
            current_width = 0;
        }
        if current_width > 0 {
            current.push(' ');
            current_width += 1;
        }
        current.push_str(&word);
        current_width += ww;
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn width_ascii_and_wide() {
        assert_eq!(display_width("abc"), 3);
        assert_eq!(display_width("日本"), 4);
        assert_eq!(display_width(""), 0);
    }

    #[test]
    fn truncate_fits() {
        assert_eq!(truncate_to_width("hello", 5), "hello");
        assert_eq!(truncate_to_width("hello", 10), "hello");
    }

    #[test]
    fn truncate_adds_ellipsis() {
        assert_eq!(truncate_to_width("hello world", 6), "hello\u{2026}");
        assert_eq!(truncate_to_width("hello", 1), "\u{2026}");
        assert_eq!(truncate_to_width("hello", 0), "");
    }

    #[test]
    fn truncate_never_splits_wide_chars() {
        // 日 is 2 cells; budget of 2 leaves room for one cell only
        assert_eq!(truncate_to_width("日本語", 3), "日\u{2026}");
    }

    #[test]
    fn pop_grapheme_handles_clusters() {
        let mut s = "cafe\u{301}".to_string(); // e + combining acute
        pop_grapheme(&mut s);
        assert_eq!(s, "caf");
        let mut empty = String::new();
        pop_grapheme(&mut empty);
        assert_eq!(empty, "");
    }

    #[test]
    fn pop_word_removes_trailing_word() {
        let mut s = "unity arcade ".to_string();
        pop_word(&mut s);
        assert_eq!(s, "unity ");
        pop_word(&mut s);
        assert_eq!(s, "");
        pop_word(&mut s);
        assert_eq!(s, "");
    }

    #[test]
    fn wrap_breaks_on_words() {
        assert_eq!(
            wrap_to_width("Noise-based terrain with LOD", 12),
            vec!["Noise-based", "terrain with", "LOD"]
        );
    }

    #[test]
    fn wrap_truncates_long_words() {
        assert_eq!(wrap_to_width("abcdefgh ij", 4), vec!["abc\u{2026}", "ij"]);
    }

    #[test]
    fn wrap_empty_and_zero_width() {
        assert!(wrap_to_width("", 10).is_empty());
        assert!(wrap_to_width("text", 0).is_empty());
    }
}
