//! Per-widget line diff renderer.
//!
//! Each registered widget owns one `DiffRenderer` holding the lines it wrote
//! last. A full render writes every row; an incremental render writes rows that
//! changed plus rows appended past the previous frame. Rows that disappeared
//! (the widget shrank) are left on screen until the next full render.

use tracing::{trace, warn};

use crate::core::line::Line;
use crate::core::output::TerminalCmd;
use crate::core::widget::Rect;

#[derive(Debug, Default)]
pub struct DiffRenderer {
    previous_lines: Vec<Line>,
}

impl DiffRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn previous_lines(&self) -> &[Line] {
        &self.previous_lines
    }

    pub fn previous_lines_len(&self) -> usize {
        self.previous_lines.len()
    }

    /// Write every row unconditionally and replace the cache.
    pub fn full_render(&mut self, bounds: Rect, lines: Vec<Line>) -> Vec<TerminalCmd> {
        let mut cmds = Vec::new();
        for (i, line) in lines.iter().enumerate() {
            write_row(&mut cmds, bounds, i, line);
        }
        self.previous_lines = lines;
        cmds
    }

    /// Write only rows that differ from the cached frame, plus appended rows.
    pub fn diff_render(&mut self, bounds: Rect, lines: Vec<Line>) -> Vec<TerminalCmd> {
        let mut cmds = Vec::new();
        let shared = self.previous_lines.len().min(lines.len());

        for i in 0..shared {
            if self.previous_lines[i] != lines[i] {
                write_row(&mut cmds, bounds, i, &lines[i]);
            }
        }
        for i in shared..lines.len() {
            write_row(&mut cmds, bounds, i, &lines[i]);
        }

        self.previous_lines = lines;
        cmds
    }
}

/// Cut widget output down to its bounds.
///
/// Output outside the bounds is a widget bug: it is logged and clamped, or
/// panics when `strict` is set.
pub fn clamp_to_bounds(mut lines: Vec<Line>, bounds: Rect, strict: bool) -> Vec<Line> {
    if lines.len() > bounds.height {
        if strict {
            panic!(
                "Widget rendered {} lines but its height is {}. TERMGRID_STRICT_WIDTH is set.",
                lines.len(),
                bounds.height
            );
        }
        warn!(
            rendered = lines.len(),
            height = bounds.height,
            "widget rendered more lines than its height"
        );
        lines.truncate(bounds.height);
    }

    for (i, line) in lines.iter_mut().enumerate() {
        let line_width = line.width();
        if line_width > bounds.width {
            if strict {
                panic!(
                    "Rendered line {} exceeds widget width ({} > {}). TERMGRID_STRICT_WIDTH is set.",
                    i, line_width, bounds.width
                );
            }
            warn!(
                row = i,
                width = line_width,
                max = bounds.width,
                "widget line exceeds its width"
            );
            *line = line.truncated(bounds.width);
        }
    }
    lines
}

fn write_row(cmds: &mut Vec<TerminalCmd>, bounds: Rect, row: usize, line: &Line) {
    trace!(col = bounds.x, row = bounds.y + row, "write row");
    cmds.push(TerminalCmd::move_to(bounds.x, bounds.y + row));
    cmds.extend(line.spans().iter().map(TerminalCmd::span));
}

#[cfg(test)]
mod tests {
    use super::{clamp_to_bounds, DiffRenderer};
    use crate::core::line::Line;
    use crate::core::output::TerminalCmd;
    use crate::core::style::Style;
    use crate::core::widget::Rect;
    use pretty_assertions::assert_eq;

    fn lines(rows: &[&str]) -> Vec<Line> {
        rows.iter().map(|row| Line::from(*row)).collect()
    }

    fn write(text: &str) -> TerminalCmd {
        TerminalCmd::Write {
            text: text.to_string(),
            style: Style::default(),
        }
    }

    const BOUNDS: Rect = Rect {
        x: 2,
        y: 3,
        width: 10,
        height: 4,
    };

    #[test]
    fn full_render_writes_every_row() {
        let mut renderer = DiffRenderer::new();
        let cmds = renderer.full_render(BOUNDS, lines(&["one", "two"]));
        assert_eq!(
            cmds,
            vec![
                TerminalCmd::move_to(2, 3),
                write("one"),
                TerminalCmd::move_to(2, 4),
                write("two"),
            ]
        );
        assert_eq!(renderer.previous_lines_len(), 2);
    }

    #[test]
    fn diff_renders_only_changed_rows() {
        let mut renderer = DiffRenderer::new();
        renderer.full_render(BOUNDS, lines(&["one", "two"]));
        let cmds = renderer.diff_render(BOUNDS, lines(&["one", "tWO"]));
        assert_eq!(cmds, vec![TerminalCmd::move_to(2, 4), write("tWO")]);
    }

    #[test]
    fn identical_render_produces_no_output() {
        let mut renderer = DiffRenderer::new();
        renderer.diff_render(BOUNDS, lines(&["line"]));
        let cmds = renderer.diff_render(BOUNDS, lines(&["line"]));
        assert!(cmds.is_empty(), "expected no output, got: {cmds:?}");
    }

    #[test]
    fn appended_rows_are_written() {
        let mut renderer = DiffRenderer::new();
        renderer.diff_render(BOUNDS, lines(&["a"]));
        let cmds = renderer.diff_render(BOUNDS, lines(&["a", "b", "c"]));
        assert_eq!(
            cmds,
            vec![
                TerminalCmd::move_to(2, 4),
                write("b"),
                TerminalCmd::move_to(2, 5),
                write("c"),
            ]
        );
    }

    #[test]
    fn shrinking_does_not_blank_stale_rows() {
        let mut renderer = DiffRenderer::new();
        renderer.diff_render(BOUNDS, lines(&["a", "b", "c"]));
        let cmds = renderer.diff_render(BOUNDS, lines(&["a"]));
        assert!(cmds.is_empty());
        assert_eq!(renderer.previous_lines(), lines(&["a"]).as_slice());
    }

    #[test]
    fn style_change_rewrites_row() {
        let mut renderer = DiffRenderer::new();
        renderer.diff_render(BOUNDS, vec![Line::styled("row", Style::default())]);
        let selected = Style::default().inverted();
        let cmds = renderer.diff_render(BOUNDS, vec![Line::styled("row", selected)]);
        assert_eq!(
            cmds,
            vec![
                TerminalCmd::move_to(2, 3),
                TerminalCmd::Write {
                    text: "row".to_string(),
                    style: selected,
                },
            ]
        );
    }

    #[test]
    fn clamp_truncates_rows_and_width() {
        let bounds = Rect::new(0, 0, 3, 2);
        let clamped = clamp_to_bounds(lines(&["abcdef", "gh", "ij"]), bounds, false);
        assert_eq!(clamped, lines(&["abc", "gh"]));
    }

    #[test]
    fn clamp_panics_in_strict_mode() {
        let bounds = Rect::new(0, 0, 3, 2);
        let result = std::panic::catch_unwind(|| clamp_to_bounds(lines(&["abcdef"]), bounds, true));
        assert!(result.is_err());
    }
}
