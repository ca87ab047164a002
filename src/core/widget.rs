//! Widget and Focusable traits.

use std::cell::RefCell;
use std::rc::Rc;

use crate::core::cursor::CursorPos;
use crate::core::input_event::KeyEvent;
use crate::core::line::Line;

/// Bounding box in character cells.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Rect {
    pub x: usize,
    pub y: usize,
    pub width: usize,
    pub height: usize,
}

impl Rect {
    pub fn new(x: usize, y: usize, width: usize, height: usize) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

/// Shared handle through which the host and the surface both reach a widget.
pub type WidgetRc = Rc<RefCell<dyn Widget>>;

/// A rectangular, stateful visual component.
///
/// Widgets never write output themselves; the surface asks for lines and
/// decides what reaches the sink.
pub trait Widget {
    fn bounds(&self) -> Rect;

    /// Stacking order; lower values are drawn first on a full redraw.
    fn z_index(&self) -> i32 {
        0
    }

    /// Current visible content, top to bottom.
    ///
    /// At most `bounds().height` lines, each at most `bounds().width` columns.
    fn render(&mut self) -> Vec<Line>;

    /// React to a key event by mutating own state.
    fn handle_input(&mut self, _event: &KeyEvent) {}

    /// Where the caret should sit while this widget is focused, in absolute
    /// grid coordinates. `None` places it at the origin.
    fn cursor_pos(&self) -> Option<CursorPos> {
        None
    }

    /// Optional focusable behavior for widgets that track their focus flag.
    fn as_focusable(&mut self) -> Option<&mut dyn Focusable> {
        None
    }
}

/// Focusable behavior for widgets that track focus.
pub trait Focusable {
    fn set_focused(&mut self, focused: bool);
    fn is_focused(&self) -> bool;
}
