//! Single-line text label.

use crate::core::line::Line;
use crate::core::style::Style;
use crate::core::text::utils::{fit_to_width, truncate_to_width};
use crate::core::text::width::display_width;
use crate::core::widget::{Rect, Widget};

/// One line of styled text.
///
/// By default the label is exactly as wide as its text, so changing the text
/// changes its bounds. A fixed-width label pads to its width instead, which
/// lets an incremental redraw overwrite a longer previous text.
pub struct Label {
    x: usize,
    y: usize,
    z: i32,
    text: String,
    style: Style,
    fixed_width: Option<usize>,
}

impl Label {
    pub fn new(x: usize, y: usize) -> Self {
        Self {
            x,
            y,
            z: 0,
            text: String::new(),
            style: Style::default(),
            fixed_width: None,
        }
    }

    pub fn fixed(x: usize, y: usize, width: usize) -> Self {
        Self {
            fixed_width: Some(width),
            ..Self::new(x, y)
        }
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.set_text(text);
        self
    }

    pub fn with_z(mut self, z: i32) -> Self {
        self.z = z;
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn set_text_color(&mut self, color: u32) {
        self.style = Style::rgb(color);
    }

    pub fn set_style(&mut self, style: Style) {
        self.style = style;
    }

    pub fn move_to(&mut self, x: usize, y: usize) {
        self.x = x;
        self.y = y;
    }

    fn width(&self) -> usize {
        self.fixed_width
            .unwrap_or_else(|| display_width(&self.text))
    }
}

impl Widget for Label {
    fn bounds(&self) -> Rect {
        Rect::new(self.x, self.y, self.width(), 1)
    }

    fn z_index(&self) -> i32 {
        self.z
    }

    fn render(&mut self) -> Vec<Line> {
        let text = match self.fixed_width {
            Some(width) => fit_to_width(&self.text, width),
            None => truncate_to_width(&self.text, self.width()),
        };
        vec![Line::styled(text, self.style)]
    }
}
