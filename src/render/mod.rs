//! Rendering pipeline.

pub mod renderer;

pub use renderer::{clamp_to_bounds, DiffRenderer};
