//! Platform-specific terminal integrations.

pub mod ansi_sink;

pub use ansi_sink::{terminal_size, AnsiSink};
