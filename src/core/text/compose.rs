//! Bordered line composition.
//!
//! A composed line is `left + center + right` where the center is truncated and
//! padded so the whole line is exactly the requested width.

use crate::core::line::{Line, Span};
use crate::core::style::Style;

use super::utils::{pad_to_width, truncate_to_width};
use super::width::display_width;

/// Plain-text composition. See [`compose_line`].
pub fn compose(left: &str, center: &str, right: &str, width: usize) -> String {
    compose_line(Span::raw(left), Span::raw(center), Span::raw(right), width).text()
}

/// Builds one row from two decorations and a payload; each segment keeps its
/// own style.
///
/// Decorations wider than `width` are cut down (left first, then right from
/// what remains) so the result is always exactly `width` columns.
pub fn compose_line(left: Span, center: Span, right: Span, width: usize) -> Line {
    let fill = center.style();
    compose_segments(left, Line::from(center), fill, right, width)
}

/// Like [`compose_line`] with a multi-span payload. Filler cells after the
/// payload take `fill`.
pub fn compose_segments(left: Span, center: Line, fill: Style, right: Span, width: usize) -> Line {
    let left_text = truncate_to_width(left.as_str(), width);
    let left_width = display_width(&left_text);
    let right_text = truncate_to_width(right.as_str(), width - left_width);
    let right_width = display_width(&right_text);

    let inner_width = width - left_width - right_width;
    let mut line = Line::default();
    if !left_text.is_empty() {
        line.push(Span::new(left_text, left.style()));
    }
    let center = center.truncated(inner_width);
    let padding = pad_to_width("", inner_width - center.width());
    for span in center.spans().iter().filter(|span| !span.is_empty()) {
        line.push(span.clone());
    }
    if !padding.is_empty() {
        line.push(Span::new(padding, fill));
    }
    if !right_text.is_empty() {
        line.push(Span::new(right_text, right.style()));
    }
    line
}

#[cfg(test)]
mod tests {
    use super::{compose, compose_line, compose_segments};
    use crate::core::line::{Line, Span};
    use crate::core::style::Style;
    use crate::core::text::width::display_width;

    #[test]
    fn pads_short_center() {
        let line = compose("[", "ab", "]", 6);
        assert_eq!(line, "[ab  ]");
        assert_eq!(display_width(&line), 6);
    }

    #[test]
    fn truncates_long_center() {
        assert_eq!(compose("[", "abcdefgh", "]", 6), "[abcd]");
    }

    #[test]
    fn wide_glyph_remainder_is_padded() {
        let line = compose("│", "你好", "│", 5);
        assert_eq!(line, "│你 │");
        assert_eq!(display_width(&line), 5);
    }

    #[test]
    fn oversized_decorations_still_fit() {
        assert_eq!(compose("<<<", "x", ">>>", 4), "<<<>");
        assert_eq!(compose("<<", "x", ">>", 0), "");
        assert_eq!(display_width(&compose("你你", "", "", 3)), 3);
    }

    #[test]
    fn width_is_exact_for_mixed_inputs() {
        let samples = ["", "a", "你", "😀x", "long payload text"];
        for left in samples {
            for center in samples {
                for right in samples {
                    for width in 0..12 {
                        let line = compose(left, center, right, width);
                        assert_eq!(display_width(&line), width, "{left:?} {center:?} {right:?}");
                    }
                }
            }
        }
    }

    #[test]
    fn segments_keep_their_styles() {
        let border = Style::rgb(0x00ffff);
        let item = Style::rgb(0xff0000).inverted();
        let line = compose_line(Span::new("│", border), Span::new("hi", item), Span::new("│", border), 6);
        assert_eq!(
            line.spans(),
            &[
                Span::new("│", border),
                Span::new("hi", item),
                Span::new("  ", item),
                Span::new("│", border),
            ]
        );
    }

    #[test]
    fn segments_fill_after_payload() {
        let border = Style::rgb(0xffffff);
        let title = Style::rgb(0x00ffff);
        let center = Line::new(vec![Span::new("Title", title), Span::new("══════════", border)]);
        let line = compose_segments(Span::new("╒", border), center, border, Span::new("╕", border), 9);
        assert_eq!(line.text(), "╒Title══╕");
        assert_eq!(line.spans()[1], Span::new("Title", title));
    }

    #[test]
    fn empty_center_is_all_filler() {
        let fill = Style::rgb(0x808080);
        let line = compose_line(Span::raw("│"), Span::new("", fill), Span::raw("│"), 4);
        assert_eq!(
            line.spans(),
            &[Span::raw("│"), Span::new("  ", fill), Span::raw("│")]
        );
    }
}
