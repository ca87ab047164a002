//! Grapheme and display width helpers.

use emojis::get as emoji_get;
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthChar;

const TAB_WIDTH: usize = 3;

/// Column width of a single user-perceived glyph.
pub fn grapheme_width(grapheme: &str) -> usize {
    if grapheme.is_empty() {
        return 0;
    }
    if grapheme == "\t" {
        return TAB_WIDTH;
    }

    if emoji_get(grapheme).is_some() {
        return 2;
    }

    let mut width = 0;
    for ch in grapheme.chars() {
        if ch == '\t' {
            width += TAB_WIDTH;
            continue;
        }
        if ch.is_control() {
            continue;
        }
        width += UnicodeWidthChar::width(ch).unwrap_or(0);
    }
    width
}

/// Number of terminal cells `input` occupies.
///
/// Text is walked as grapheme clusters, so a combining sequence or a ZWJ emoji
/// counts once.
pub fn display_width(input: &str) -> usize {
    if input.is_empty() {
        return 0;
    }
    input.graphemes(true).map(grapheme_width).sum()
}

#[cfg(test)]
mod tests {
    use super::{display_width, grapheme_width};

    #[test]
    fn ascii_is_one_column_per_char() {
        assert_eq!(display_width("hello"), 5);
        assert_eq!(display_width(""), 0);
    }

    #[test]
    fn cjk_glyphs_are_double_width() {
        assert_eq!(display_width("你好"), 4);
        assert_eq!(grapheme_width("你"), 2);
    }

    #[test]
    fn rgi_emoji_width_is_two() {
        assert_eq!(display_width("😀"), 2);
    }

    #[test]
    fn combining_sequence_counts_once() {
        assert_eq!(display_width("e\u{301}"), 1);
    }

    #[test]
    fn control_chars_have_no_width() {
        assert_eq!(display_width("a\u{7}b"), 2);
    }
}
