//! Styled line model.
//!
//! Widgets render to `Vec<Line>`. A line is a sequence of spans so that each
//! part of a composed row (border, payload, border) keeps its own style tag.
//! Equality covers both text and style; the diff engine relies on that.

use crate::core::style::Style;
use crate::core::text::utils::grapheme_segments;
use crate::core::text::width::{display_width, grapheme_width};

/// A contiguous run of text sharing one style.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Span {
    text: String,
    style: Style,
}

impl Span {
    pub fn new(text: impl Into<String>, style: Style) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }

    pub fn raw(text: impl Into<String>) -> Self {
        Self::new(text, Style::default())
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn style(&self) -> Style {
        self.style
    }

    pub fn width(&self) -> usize {
        display_width(&self.text)
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

impl From<&str> for Span {
    fn from(text: &str) -> Self {
        Self::raw(text)
    }
}

impl From<String> for Span {
    fn from(text: String) -> Self {
        Self::raw(text)
    }
}

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Line {
    spans: Vec<Span>,
}

impl Line {
    pub fn new(spans: Vec<Span>) -> Self {
        Self { spans }
    }

    pub fn styled(text: impl Into<String>, style: Style) -> Self {
        Self::new(vec![Span::new(text, style)])
    }

    pub fn spans(&self) -> &[Span] {
        &self.spans
    }

    pub fn push(&mut self, span: Span) {
        self.spans.push(span);
    }

    pub fn width(&self) -> usize {
        self.spans.iter().map(Span::width).sum()
    }

    /// Concatenated text without styles.
    pub fn text(&self) -> String {
        let mut out = String::new();
        for span in &self.spans {
            out.push_str(span.as_str());
        }
        out
    }

    /// Truncates across span boundaries using the same greedy rule as
    /// [`crate::core::text::utils::truncate_to_width`].
    pub fn truncated(&self, max_width: usize) -> Line {
        if self.width() <= max_width {
            return self.clone();
        }

        let mut spans = Vec::new();
        let mut current_width = 0;
        'spans: for span in &self.spans {
            let mut text = String::new();
            for grapheme in grapheme_segments(span.as_str()) {
                let width = grapheme_width(grapheme);
                if current_width + width > max_width {
                    if !text.is_empty() {
                        spans.push(Span::new(text, span.style));
                    }
                    break 'spans;
                }
                text.push_str(grapheme);
                current_width += width;
            }
            if !text.is_empty() {
                spans.push(Span::new(text, span.style));
            }
        }
        Line::new(spans)
    }

    /// Appends a filler span so the line is at least `width` columns wide.
    pub fn padded(mut self, width: usize, style: Style) -> Line {
        let padding_needed = width.saturating_sub(self.width());
        if padding_needed > 0 {
            self.spans.push(Span::new(" ".repeat(padding_needed), style));
        }
        self
    }
}

impl From<&str> for Line {
    fn from(text: &str) -> Self {
        Self::new(vec![Span::raw(text)])
    }
}

impl From<String> for Line {
    fn from(text: String) -> Self {
        Self::new(vec![Span::raw(text)])
    }
}

impl From<Span> for Line {
    fn from(span: Span) -> Self {
        Self::new(vec![span])
    }
}

#[cfg(test)]
mod tests {
    use super::{Line, Span};
    use crate::core::style::Style;

    #[test]
    fn width_sums_spans() {
        let line = Line::new(vec![Span::raw("ab"), Span::raw("你")]);
        assert_eq!(line.width(), 4);
        assert_eq!(line.text(), "ab你");
    }

    #[test]
    fn truncation_crosses_span_boundaries() {
        let red = Style::rgb(0xff0000);
        let line = Line::new(vec![Span::raw("abc"), Span::new("def", red)]);
        let truncated = line.truncated(4);
        assert_eq!(
            truncated,
            Line::new(vec![Span::raw("abc"), Span::new("d", red)])
        );
    }

    #[test]
    fn truncation_drops_emptied_spans() {
        let line = Line::new(vec![Span::raw("ab"), Span::raw("cd")]);
        assert_eq!(line.truncated(2), Line::new(vec![Span::raw("ab")]));
        assert_eq!(line.truncated(0), Line::default());
    }

    #[test]
    fn truncation_keeps_wide_glyphs_whole() {
        let line = Line::from("你好");
        assert_eq!(line.truncated(3).text(), "你");
        assert_eq!(line.truncated(3).truncated(3), line.truncated(3));
    }

    #[test]
    fn style_only_difference_is_unequal() {
        let plain = Line::styled("row", Style::default());
        let selected = Line::styled("row", Style::default().inverted());
        assert_ne!(plain, selected);
    }

    #[test]
    fn padded_fills_to_width() {
        let line = Line::from("hi").padded(5, Style::default());
        assert_eq!(line.width(), 5);
        assert_eq!(line.text(), "hi   ");
    }
}
