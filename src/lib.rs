//! Cell-grid terminal UI with per-widget diff redraw.
//!
//! Invariant: single output gate. Only `core::output::OutputGate::flush(..)` writes to the
//! sink.
//!
//! # Public API Overview
//! - Implement [`Widget`] (and optionally [`Focusable`]) or use the built-ins: [`Label`],
//!   [`Progress`], [`ListBox`].
//! - Register widgets on a [`Surface`], focus one, and feed it decoded [`KeyEvent`]s via
//!   [`Surface::dispatch`]. The surface redraws only the rows that changed.
//! - Output goes through a [`Sink`]; [`AnsiSink`] speaks ANSI/VT to any byte writer.
//! - Width helpers count display columns, not bytes: wide CJK and emoji glyphs take two.

#![allow(clippy::new_without_default, clippy::type_complexity)]

pub mod config;
pub mod error;
pub mod logging;

pub mod core;
pub mod platform;
pub mod render;
pub mod runtime;
pub mod widgets;

/// Environment-driven configuration.
pub use crate::config::EnvConfig;
/// Error types.
pub use crate::error::{LoggingError, SurfaceError};

/// Widget contract and geometry.
pub use crate::core::cursor::CursorPos;
pub use crate::core::widget::{Focusable, Rect, Widget, WidgetRc};

/// Styled text model.
pub use crate::core::line::{Line, Span};
pub use crate::core::style::{Rgb, Style};

/// Decoded key events.
pub use crate::core::input_event::KeyEvent;

/// List selection and scroll model.
pub use crate::core::list_state::{ListItem, ListState};

/// Output sinks.
pub use crate::core::sink::Sink;
pub use crate::platform::ansi_sink::{terminal_size, AnsiSink};

/// Runtime surface and identifiers.
pub use crate::runtime::{Dispatch, Surface, WidgetId};

/// Built-in widgets.
pub use crate::widgets::{Border, Label, ListBox, Progress};

/// Column-aware text helpers.
pub use crate::core::text::compose::{compose, compose_line};
pub use crate::core::text::utils::{fit_to_width, pad_to_width, truncate_to_width};
pub use crate::core::text::width::display_width;

/// Wraps a widget for registration on a [`Surface`].
pub fn widget_rc<W: Widget + 'static>(widget: W) -> std::rc::Rc<std::cell::RefCell<W>> {
    std::rc::Rc::new(std::cell::RefCell::new(widget))
}
