//! Runtime orchestration: registration, focus, dispatch, redraw.

pub mod focus;
pub mod registry;
pub mod surface;

pub use registry::{WidgetId, WidgetRegistry};
pub use surface::{Dispatch, Surface};
