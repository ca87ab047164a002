//! Width-budgeted truncation and padding.

use unicode_segmentation::UnicodeSegmentation;

use super::width::{display_width, grapheme_width};

pub fn grapheme_segments(text: &str) -> unicode_segmentation::Graphemes<'_> {
    UnicodeSegmentation::graphemes(text, true)
}

/// Longest prefix of `text` whose display width fits in `max_width`.
///
/// Glyphs are taken left to right and the scan stops at the first glyph that
/// would overflow the budget; a wide glyph is never split.
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    if max_width == 0 {
        return String::new();
    }
    if display_width(text) <= max_width {
        return text.to_string();
    }

    let mut truncated = String::new();
    let mut current_width = 0;
    for grapheme in grapheme_segments(text) {
        let width = grapheme_width(grapheme);
        if current_width + width > max_width {
            break;
        }
        truncated.push_str(grapheme);
        current_width += width;
    }
    truncated
}

/// Appends spaces until `text` is `width` columns wide. Never truncates.
pub fn pad_to_width(text: &str, width: usize) -> String {
    let padding_needed = width.saturating_sub(display_width(text));
    let mut padded = String::with_capacity(text.len() + padding_needed);
    padded.push_str(text);
    if padding_needed > 0 {
        padded.push_str(&" ".repeat(padding_needed));
    }
    padded
}

/// Truncates then pads, so the result is exactly `width` columns wide.
pub fn fit_to_width(text: &str, width: usize) -> String {
    pad_to_width(&truncate_to_width(text, width), width)
}

#[cfg(test)]
mod tests {
    use super::{fit_to_width, grapheme_segments, pad_to_width, truncate_to_width};
    use crate::core::text::width::display_width;

    #[test]
    fn truncate_returns_original_when_shorter() {
        assert_eq!(truncate_to_width("hello", 6), "hello");
    }

    #[test]
    fn truncate_cuts_at_budget() {
        assert_eq!(truncate_to_width("hello world", 5), "hello");
    }

    #[test]
    fn truncate_to_zero_is_empty() {
        assert_eq!(truncate_to_width("hello", 0), "");
    }

    #[test]
    fn truncate_never_splits_wide_glyph() {
        let truncated = truncate_to_width("你好", 3);
        assert_eq!(truncated, "你");
        assert_eq!(display_width(&truncated), 2);
    }

    #[test]
    fn truncate_stops_at_first_overflow() {
        // The trailing narrow glyph would fit, but the scan stops at the wide one.
        assert_eq!(truncate_to_width("ab你c", 3), "ab");
    }

    #[test]
    fn truncate_is_idempotent() {
        for input in ["hello world", "你好世界", "a😀b😀c", ""] {
            for budget in 0..8 {
                let once = truncate_to_width(input, budget);
                assert!(display_width(&once) <= budget);
                assert_eq!(truncate_to_width(&once, budget), once);
            }
        }
    }

    #[test]
    fn pad_appends_spaces_without_truncating() {
        assert_eq!(pad_to_width("hi", 4), "hi  ");
        assert_eq!(pad_to_width("hello", 3), "hello");
    }

    #[test]
    fn fit_is_exact_width() {
        assert_eq!(fit_to_width("你好", 3), "你 ");
        assert_eq!(display_width(&fit_to_width("hello world", 7)), 7);
    }

    #[test]
    fn grapheme_segments_splits_clusters() {
        let clusters: Vec<&str> = grapheme_segments("a🇺🇸").collect();
        assert_eq!(clusters, vec!["a", "🇺🇸"]);
    }
}
