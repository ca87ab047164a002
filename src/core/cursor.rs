//! Cursor coordinates.

/// Zero-based cell position on the output grid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CursorPos {
    pub col: usize,
    pub row: usize,
}

impl CursorPos {
    pub fn new(col: usize, row: usize) -> Self {
        Self { col, row }
    }
}
