//! Text helpers (display width, truncation/padding, line composition).
//!
//! These helpers are pure (string in/string out) and live under `core` so widgets can depend on
//! them without importing anything from the render layer.

pub mod compose;
pub mod utils;
pub mod width;
