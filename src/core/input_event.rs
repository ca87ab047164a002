//! Decoded key events delivered by the host.

/// Input event delivered to widgets.
///
/// Notes:
/// - Raw-byte decoding happens outside this crate; `raw` keeps the exact sequence the host's
///   decoder consumed so widgets can inspect it if they need to.
/// - `name` is the decoder's key name (`"up"`, `"pagedown"`, `"c"`, ...). An event without a
///   name could not be decoded and is dropped by the surface.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyEvent {
    pub name: Option<String>,
    pub ctrl: bool,
    pub meta: bool,
    pub shift: bool,
    pub raw: String,
}

impl KeyEvent {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    pub fn with_ctrl(mut self) -> Self {
        self.ctrl = true;
        self
    }

    pub fn with_meta(mut self) -> Self {
        self.meta = true;
        self
    }

    pub fn with_shift(mut self) -> Self {
        self.shift = true;
        self
    }

    pub fn with_raw(mut self, raw: impl Into<String>) -> Self {
        self.raw = raw.into();
        self
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Ctrl+C: the host should shut down instead of routing the event.
    pub fn is_termination(&self) -> bool {
        self.ctrl && self.name() == Some("c")
    }

    pub fn is_malformed(&self) -> bool {
        self.name().map_or(true, str::is_empty)
    }

    /// Matches an unmodified key by name.
    pub fn is(&self, name: &str) -> bool {
        !self.ctrl && !self.meta && self.name() == Some(name)
    }
}
