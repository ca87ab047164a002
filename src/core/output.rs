//! Typed output commands and a single output gate.
//!
//! Invariant: all sink writes must flow through `OutputGate::flush(..)`.

use crate::core::line::Span;
use crate::core::sink::Sink;
use crate::core::style::Style;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TerminalCmd {
    MoveTo { col: usize, row: usize },
    ClearFromCursor,
    Write { text: String, style: Style },
}

impl TerminalCmd {
    pub fn move_to(col: usize, row: usize) -> Self {
        Self::MoveTo { col, row }
    }

    pub fn span(span: &Span) -> Self {
        Self::Write {
            text: span.as_str().to_string(),
            style: span.style(),
        }
    }
}

#[derive(Debug, Default)]
pub struct OutputGate {
    cmds: Vec<TerminalCmd>,
}

impl OutputGate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, cmd: TerminalCmd) {
        self.cmds.push(cmd);
    }

    pub fn extend<I>(&mut self, cmds: I)
    where
        I: IntoIterator<Item = TerminalCmd>,
    {
        self.cmds.extend(cmds);
    }

    pub fn is_empty(&self) -> bool {
        self.cmds.is_empty()
    }

    pub fn len(&self) -> usize {
        self.cmds.len()
    }

    pub fn clear(&mut self) {
        self.cmds.clear();
    }

    /// Flush buffered commands to the sink.
    ///
    /// This is the single write gate: `Sink::write(..)` must not be called
    /// from anywhere else.
    pub fn flush<S: Sink>(&mut self, sink: &mut S) {
        for cmd in self.cmds.drain(..) {
            match cmd {
                TerminalCmd::MoveTo { col, row } => sink.move_cursor(col, row),
                TerminalCmd::ClearFromCursor => sink.clear_from_cursor(),
                TerminalCmd::Write { text, style } => {
                    if !text.is_empty() {
                        sink.write(&text, style);
                    }
                }
            }
        }
        sink.flush();
    }
}
