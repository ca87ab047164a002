//! Environment configuration.

use std::env;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvConfig {
    /// Panic when a widget renders more lines than its height or a line wider
    /// than its width, instead of clamping.
    pub strict_width: bool,
    /// Log the reason for every redraw at debug level.
    pub debug_redraw: bool,
    /// File that `logging::init_file_logging` writes to.
    pub log_file: Option<String>,
}

impl EnvConfig {
    pub fn from_env() -> Self {
        Self {
            strict_width: env_flag("TERMGRID_STRICT_WIDTH"),
            debug_redraw: env_flag("TERMGRID_DEBUG_REDRAW"),
            log_file: env_string_opt("TERMGRID_LOG_FILE"),
        }
    }
}

fn env_flag(key: &str) -> bool {
    env::var(key).map(|value| value == "1").unwrap_or(false)
}

fn env_string_opt(key: &str) -> Option<String> {
    env::var(key).ok().and_then(|value| {
        if value.trim().is_empty() {
            None
        } else {
            Some(value)
        }
    })
}
