//! Horizontal progress bar.

use crate::core::line::{Line, Span};
use crate::core::style::Style;
use crate::core::widget::{Rect, Widget};

/// One-row bar: the filled share is drawn with the style inverted.
///
/// The value is a percentage in `[0, 100]`. Advancing it over time is the
/// host's business; the bar only reflects what it was last given.
pub struct Progress {
    x: usize,
    y: usize,
    z: i32,
    width: usize,
    value: f64,
    style: Style,
}

impl Progress {
    pub fn new(x: usize, y: usize, width: usize) -> Self {
        Self {
            x,
            y,
            z: 0,
            width,
            value: 0.0,
            style: Style::default(),
        }
    }

    pub fn with_z(mut self, z: i32) -> Self {
        self.z = z;
        self
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    /// Set the percentage, clamped to `[0, 100]`. NaN counts as 0.
    pub fn set_value(&mut self, value: f64) {
        self.value = if value.is_nan() {
            0.0
        } else {
            value.clamp(0.0, 100.0)
        };
    }

    pub fn set_color(&mut self, color: u32) {
        self.style = Style::rgb(color);
    }

    pub fn set_width(&mut self, width: usize) {
        self.width = width;
    }

    /// Number of filled cells.
    pub fn filled(&self) -> usize {
        let filled = (self.value / 100.0 * self.width as f64).floor() as usize;
        filled.min(self.width)
    }
}

impl Widget for Progress {
    fn bounds(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, 1)
    }

    fn z_index(&self) -> i32 {
        self.z
    }

    fn render(&mut self) -> Vec<Line> {
        let filled = self.filled();
        let mut line = Line::default();
        if filled > 0 {
            line.push(Span::new(" ".repeat(filled), self.style.inverted()));
        }
        if filled < self.width {
            line.push(Span::new(" ".repeat(self.width - filled), self.style));
        }
        vec![line]
    }
}

#[cfg(test)]
mod tests {
    use super::Progress;
    use crate::core::line::Span;
    use crate::core::style::Style;
    use crate::core::widget::Widget;

    #[test]
    fn fills_proportionally() {
        let mut bar = Progress::new(0, 0, 10);
        bar.set_value(45.0);
        assert_eq!(bar.filled(), 4);
        let lines = bar.render();
        assert_eq!(
            lines[0].spans(),
            &[
                Span::new("    ", Style::default().inverted()),
                Span::new("      ", Style::default()),
            ]
        );
        assert_eq!(lines[0].width(), 10);
    }

    #[test]
    fn value_is_clamped() {
        let mut bar = Progress::new(0, 0, 8);
        bar.set_value(250.0);
        assert_eq!(bar.value(), 100.0);
        assert_eq!(bar.filled(), 8);
        bar.set_value(-3.0);
        assert_eq!(bar.filled(), 0);
        bar.set_value(f64::NAN);
        assert_eq!(bar.value(), 0.0);
    }

    #[test]
    fn empty_and_full_bars_have_one_span() {
        let mut bar = Progress::new(0, 0, 4);
        assert_eq!(bar.render()[0].spans().len(), 1);
        bar.set_value(100.0);
        assert_eq!(bar.render()[0].spans().len(), 1);
        assert!(bar.render()[0].spans()[0].style().inverse);
    }
}
