//! Core interfaces and types.
//!
//! Everything here is pure data or pure functions; nothing in `core` performs I/O.

pub mod cursor;
pub mod input_event;
pub mod line;
pub mod list_state;
pub mod output;
pub mod sink;
pub mod style;
pub mod text;
pub mod widget;
