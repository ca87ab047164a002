//! Output sink trait.

use crate::core::style::Style;

/// Cursor-addressable output grid supplied by the host.
///
/// Coordinates are zero-based columns/rows on a fixed-pitch grid. Writes are
/// infallible from the caller's point of view; a sink that hits an I/O error
/// is expected to report it through its own channel.
pub trait Sink {
    /// Whether the sink supports cursor addressing at all.
    fn is_interactive(&self) -> bool;

    fn move_cursor(&mut self, col: usize, row: usize);

    /// Clear from the cursor to the end of the screen.
    fn clear_from_cursor(&mut self);

    /// Write `text` at the cursor, tinted by `style`.
    fn write(&mut self, text: &str, style: Style);

    /// Push buffered bytes out. Called once per redraw.
    fn flush(&mut self) {}
}
