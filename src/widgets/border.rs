//! Box-drawing border used by framed widgets.

use crate::core::line::{Line, Span};
use crate::core::style::Style;
use crate::core::text::compose::{compose_line, compose_segments};
use crate::core::text::width::display_width;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Border {
    pub top: String,
    pub top_left: String,
    pub top_right: String,
    pub bottom: String,
    pub bottom_left: String,
    pub bottom_right: String,
    pub left: String,
    pub right: String,
    pub style: Style,
}

impl Default for Border {
    fn default() -> Self {
        Self {
            top: "═".to_string(),
            top_left: "╒".to_string(),
            top_right: "╕".to_string(),
            bottom: "─".to_string(),
            bottom_left: "└".to_string(),
            bottom_right: "┘".to_string(),
            left: "│".to_string(),
            right: "│".to_string(),
            style: Style::default(),
        }
    }
}

impl Border {
    pub fn set_color(&mut self, color: u32) -> &mut Self {
        self.style = Style::rgb(color);
        self
    }

    /// Columns left for content between the side glyphs.
    pub fn inner_width(&self, width: usize) -> usize {
        width.saturating_sub(display_width(&self.left) + display_width(&self.right))
    }

    /// Top edge with an optional title drawn over the fill glyphs.
    pub fn top_line(&self, width: usize, title: &str, title_style: Style) -> Line {
        let mut center = Line::default();
        if !title.is_empty() {
            center.push(Span::new(title, title_style));
        }
        center.push(Span::new(repeat_to_cover(&self.top, width), self.style));
        compose_segments(
            Span::new(self.top_left.as_str(), self.style),
            center,
            self.style,
            Span::new(self.top_right.as_str(), self.style),
            width,
        )
    }

    pub fn bottom_line(&self, width: usize) -> Line {
        compose_line(
            Span::new(self.bottom_left.as_str(), self.style),
            Span::new(repeat_to_cover(&self.bottom, width), self.style),
            Span::new(self.bottom_right.as_str(), self.style),
            width,
        )
    }

    /// One content row framed by the side glyphs.
    pub fn row(&self, content: Span, width: usize) -> Line {
        compose_line(
            Span::new(self.left.as_str(), self.style),
            content,
            Span::new(self.right.as_str(), self.style),
            width,
        )
    }
}

/// Enough copies of `glyph` to cover `width` columns; truncation trims the rest.
fn repeat_to_cover(glyph: &str, width: usize) -> String {
    let glyph_width = display_width(glyph);
    if glyph_width == 0 {
        return String::new();
    }
    glyph.repeat(width.div_ceil(glyph_width))
}

#[cfg(test)]
mod tests {
    use super::Border;
    use crate::core::line::Span;
    use crate::core::style::Style;

    #[test]
    fn default_frame_lines() {
        let border = Border::default();
        assert_eq!(border.top_line(6, "", Style::default()).text(), "╒════╕");
        assert_eq!(border.bottom_line(6).text(), "└────┘");
        assert_eq!(border.row(Span::raw("ab"), 6).text(), "│ab  │");
        assert_eq!(border.inner_width(6), 4);
    }

    #[test]
    fn title_is_truncated_into_top_edge() {
        let border = Border::default();
        let cyan = Style::rgb(0x00ffff);
        let line = border.top_line(8, "Title", cyan);
        assert_eq!(line.text(), "╒Title═╕");
        assert_eq!(line.spans()[1], Span::new("Title", cyan));

        assert_eq!(border.top_line(5, "Title", cyan).text(), "╒Tit╕");
    }

    #[test]
    fn wide_fill_glyph_leaves_padding() {
        let border = Border {
            bottom: "你".to_string(),
            ..Border::default()
        };
        let line = border.bottom_line(5);
        assert_eq!(line.text(), "└你 ┘");
        assert_eq!(line.width(), 5);
    }

    #[test]
    fn set_color_styles_every_glyph() {
        let mut border = Border::default();
        border.set_color(0x00ff00);
        let line = border.bottom_line(4);
        assert!(line.spans().iter().all(|span| span.style() == Style::rgb(0x00ff00)));
    }
}
