//! ANSI/VT escape-sequence sink.

use std::fmt::Write as _;
use std::io::{self, Write};

use crate::core::sink::Sink;
use crate::core::style::Style;

/// Sink that turns grid commands into CSI sequences on any byte writer.
///
/// Commands are buffered and handed to the writer in one `write_all` per
/// flush. The first I/O error is logged and the sink goes quiet after it; the
/// surface keeps running but nothing more reaches the terminal.
pub struct AnsiSink<W: Write> {
    writer: W,
    interactive: bool,
    buffer: String,
    failed: bool,
}

impl<W: Write> AnsiSink<W> {
    pub fn new(writer: W, interactive: bool) -> Self {
        Self {
            writer,
            interactive,
            buffer: String::new(),
            failed: false,
        }
    }

    pub fn writer(&self) -> &W {
        &self.writer
    }

    pub fn into_writer(self) -> W {
        self.writer
    }

    /// Whether a write has failed and output is being dropped.
    pub fn has_failed(&self) -> bool {
        self.failed
    }

    fn write_bytes(&mut self) -> io::Result<()> {
        self.writer.write_all(self.buffer.as_bytes())?;
        self.writer.flush()
    }
}

impl AnsiSink<io::Stdout> {
    /// Sink on the process stdout; interactive only when stdout is a tty.
    pub fn stdout() -> Self {
        Self::new(io::stdout(), stdout_is_tty())
    }
}

impl<W: Write> Sink for AnsiSink<W> {
    fn is_interactive(&self) -> bool {
        self.interactive
    }

    fn move_cursor(&mut self, col: usize, row: usize) {
        let _ = write!(self.buffer, "\x1b[{};{}H", row + 1, col + 1);
    }

    fn clear_from_cursor(&mut self) {
        self.buffer.push_str("\x1b[J");
    }

    fn write(&mut self, text: &str, style: Style) {
        if style.is_plain() {
            self.buffer.push_str(text);
            return;
        }
        if let Some(rgb) = style.color {
            let _ = write!(self.buffer, "\x1b[38;2;{};{};{}m", rgb.0, rgb.1, rgb.2);
        }
        if style.inverse {
            self.buffer.push_str("\x1b[7m");
        }
        self.buffer.push_str(text);
        self.buffer.push_str("\x1b[0m");
    }

    fn flush(&mut self) {
        if self.buffer.is_empty() {
            return;
        }
        if !self.failed {
            if let Err(err) = self.write_bytes() {
                tracing::warn!(error = %err, "terminal write failed; dropping further output");
                self.failed = true;
            }
        }
        self.buffer.clear();
    }
}

#[cfg(unix)]
fn stdout_is_tty() -> bool {
    unsafe { libc::isatty(libc::STDOUT_FILENO) == 1 }
}

#[cfg(not(unix))]
fn stdout_is_tty() -> bool {
    false
}

/// Current `(columns, rows)` of the terminal on stdout, if it is one.
#[cfg(unix)]
pub fn terminal_size() -> Option<(u16, u16)> {
    let mut size = libc::winsize {
        ws_row: 0,
        ws_col: 0,
        ws_xpixel: 0,
        ws_ypixel: 0,
    };
    let result = unsafe { libc::ioctl(libc::STDOUT_FILENO, libc::TIOCGWINSZ, &mut size) };
    if result == 0 && size.ws_col > 0 && size.ws_row > 0 {
        Some((size.ws_col, size.ws_row))
    } else {
        None
    }
}

#[cfg(not(unix))]
pub fn terminal_size() -> Option<(u16, u16)> {
    None
}

#[cfg(test)]
mod tests {
    use super::AnsiSink;
    use crate::core::sink::Sink;
    use crate::core::style::Style;
    use std::io;

    fn output(sink: AnsiSink<Vec<u8>>) -> String {
        String::from_utf8(sink.into_writer()).expect("utf8 output")
    }

    #[test]
    fn encodes_moves_clear_and_plain_text() {
        let mut sink = AnsiSink::new(Vec::new(), true);
        sink.move_cursor(0, 0);
        sink.clear_from_cursor();
        sink.move_cursor(4, 2);
        sink.write("hi", Style::default());
        sink.flush();
        assert_eq!(output(sink), "\x1b[1;1H\x1b[J\x1b[3;5Hhi");
    }

    #[test]
    fn encodes_colour_and_inverse() {
        let mut sink = AnsiSink::new(Vec::new(), true);
        sink.write("a", Style::rgb(0xff8000));
        sink.write("b", Style::rgb(0x0000ff).inverted());
        sink.write("c", Style::default().inverted());
        sink.flush();
        assert_eq!(
            output(sink),
            "\x1b[38;2;255;128;0ma\x1b[0m\x1b[38;2;0;0;255m\x1b[7mb\x1b[0m\x1b[7mc\x1b[0m"
        );
    }

    #[test]
    fn nothing_reaches_writer_before_flush() {
        let mut sink = AnsiSink::new(Vec::new(), true);
        sink.write("pending", Style::default());
        assert!(sink.writer().is_empty());
    }

    struct BrokenPipe {
        attempts: usize,
    }

    impl io::Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            self.attempts += 1;
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn goes_quiet_after_first_error() {
        let mut sink = AnsiSink::new(BrokenPipe { attempts: 0 }, true);
        sink.write("one", Style::default());
        sink.flush();
        assert!(sink.has_failed());
        sink.write("two", Style::default());
        sink.flush();
        assert_eq!(sink.writer().attempts, 1);
    }
}
