//! Style tags carried alongside text.
//!
//! A [`Style`] is inert data. The core only compares styles; turning them into
//! terminal bytes is the sink's job.

/// 24-bit foreground colour.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// Splits a packed `0xRRGGBB` value.
    pub fn from_hex(color: u32) -> Self {
        Self(
            ((color >> 16) & 0xff) as u8,
            ((color >> 8) & 0xff) as u8,
            (color & 0xff) as u8,
        )
    }
}

#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct Style {
    pub color: Option<Rgb>,
    pub inverse: bool,
}

impl Style {
    pub fn rgb(color: u32) -> Self {
        Self {
            color: Some(Rgb::from_hex(color)),
            inverse: false,
        }
    }

    /// Same colour with foreground and background swapped.
    pub fn inverted(self) -> Self {
        Self {
            inverse: true,
            ..self
        }
    }

    pub fn is_plain(&self) -> bool {
        self.color.is_none() && !self.inverse
    }
}
