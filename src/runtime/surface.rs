//! Widget compositor.
//!
//! The surface owns registration, stacking order, focus, and one line cache
//! per widget. It is the only place that talks to the sink, always through the
//! output gate.
//!
//! Event delivery and redraws take `&mut self`, so the host cannot run them
//! concurrently or re-enter dispatch from inside a widget.

use std::cell::RefCell;
use std::rc::Rc;

use tracing::debug;

use crate::config::EnvConfig;
use crate::core::cursor::CursorPos;
use crate::core::input_event::KeyEvent;
use crate::core::line::Line;
use crate::core::output::{OutputGate, TerminalCmd};
use crate::core::sink::Sink;
use crate::core::widget::{Rect, WidgetRc};
use crate::error::SurfaceError;
use crate::render::clamp_to_bounds;
use crate::runtime::focus::FocusState;
use crate::runtime::registry::{WidgetEntry, WidgetId, WidgetRegistry};

/// What `Surface::dispatch` did with an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatch {
    /// Ctrl+C; nothing was routed and the host should shut down.
    Terminate,
    /// Malformed event or nothing focused.
    Ignored,
    /// The focused widget kept its bounds; only it was diffed.
    Incremental(WidgetId),
    /// The focused widget moved or resized; everything was redrawn.
    Full(WidgetId),
}

pub struct Surface<S: Sink> {
    sink: S,
    output: OutputGate,
    registry: WidgetRegistry,
    focus: FocusState,
    config: EnvConfig,
    on_terminate: Option<Box<dyn FnMut()>>,
    on_input: Option<Box<dyn FnMut(WidgetId, &KeyEvent)>>,
}

impl<S: Sink> Surface<S> {
    pub fn new(sink: S) -> Result<Self, SurfaceError> {
        Self::with_config(sink, EnvConfig::from_env())
    }

    pub fn with_config(sink: S, config: EnvConfig) -> Result<Self, SurfaceError> {
        if !sink.is_interactive() {
            return Err(SurfaceError::NotInteractive);
        }
        Ok(Self {
            sink,
            output: OutputGate::new(),
            registry: WidgetRegistry::new(),
            focus: FocusState::new(),
            config,
            on_terminate: None,
            on_input: None,
        })
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }

    pub fn config(&self) -> &EnvConfig {
        &self.config
    }

    /// Register a widget. Adding the same widget again returns its existing id.
    pub fn add(&mut self, widget: WidgetRc) -> WidgetId {
        self.registry.register(widget)
    }

    pub fn id_of<W: ?Sized>(&self, widget: &Rc<RefCell<W>>) -> Option<WidgetId> {
        self.registry.find(widget)
    }

    pub fn widget(&self, id: WidgetId) -> Option<WidgetRc> {
        self.registry.widget(id)
    }

    /// Registered ids in drawing order.
    pub fn widget_ids(&self) -> Vec<WidgetId> {
        self.registry.ids()
    }

    pub fn len(&self) -> usize {
        self.registry.len()
    }

    pub fn is_empty(&self) -> bool {
        self.registry.is_empty()
    }

    /// Focus `widget`, clearing focus on every other widget.
    ///
    /// An unregistered widget leaves nothing focused and returns `None`.
    pub fn focus<W: ?Sized>(&mut self, widget: &Rc<RefCell<W>>) -> Option<WidgetId> {
        let id = self.registry.find(widget);
        self.focus.set_focus(id, &self.registry);
        self.focus.focused()
    }

    pub fn focus_id(&mut self, id: WidgetId) {
        self.focus.set_focus(Some(id), &self.registry);
    }

    pub fn clear_focus(&mut self) {
        self.focus.clear(&self.registry);
    }

    pub fn focused(&self) -> Option<WidgetId> {
        self.focus.focused()
    }

    /// Called when a termination key combination arrives.
    pub fn set_on_terminate(&mut self, handler: Option<Box<dyn FnMut()>>) {
        self.on_terminate = handler;
    }

    /// Called after the focused widget handled an event.
    pub fn set_on_input(&mut self, handler: Option<Box<dyn FnMut(WidgetId, &KeyEvent)>>) {
        self.on_input = handler;
    }

    /// Clear the screen and redraw every widget in ascending stacking order.
    pub fn full_redraw(&mut self) {
        if self.config.debug_redraw {
            debug!(widgets = self.registry.len(), "full redraw");
        }
        self.registry.sort_by_z();
        self.output.push(TerminalCmd::move_to(0, 0));
        self.output.push(TerminalCmd::ClearFromCursor);

        let strict = self.config.strict_width;
        for entry in self.registry.iter_mut() {
            let (bounds, lines) = render_entry(entry, strict);
            self.output.extend(entry.renderer.full_render(bounds, lines));
        }
        self.finish_redraw();
    }

    /// Diff every widget against its previous frame.
    pub fn redraw(&mut self) {
        if self.config.debug_redraw {
            debug!(widgets = self.registry.len(), "incremental redraw");
        }
        let strict = self.config.strict_width;
        for entry in self.registry.iter_mut() {
            let (bounds, lines) = render_entry(entry, strict);
            self.output.extend(entry.renderer.diff_render(bounds, lines));
        }
        self.finish_redraw();
    }

    /// Diff one widget against its previous frame.
    ///
    /// Returns `false` when `id` is not registered.
    pub fn redraw_widget(&mut self, id: WidgetId) -> bool {
        let strict = self.config.strict_width;
        let Some(entry) = self.registry.get_mut(id) else {
            return false;
        };
        if self.config.debug_redraw {
            debug!(widget = id.raw(), "incremental redraw");
        }
        let (bounds, lines) = render_entry(entry, strict);
        self.output.extend(entry.renderer.diff_render(bounds, lines));
        self.finish_redraw();
        true
    }

    /// The host reports a terminal resize.
    pub fn handle_resize(&mut self) {
        self.full_redraw();
    }

    /// Route a decoded key event to the focused widget and redraw.
    pub fn dispatch(&mut self, event: &KeyEvent) -> Dispatch {
        if event.is_termination() {
            if self.config.debug_redraw {
                debug!("termination key received");
            }
            if let Some(handler) = self.on_terminate.as_mut() {
                handler();
            }
            return Dispatch::Terminate;
        }
        if event.is_malformed() {
            return Dispatch::Ignored;
        }

        let Some(id) = self.focus.focused() else {
            return Dispatch::Ignored;
        };
        let Some(widget) = self.registry.widget(id) else {
            return Dispatch::Ignored;
        };

        let before = widget.borrow().bounds();
        widget.borrow_mut().handle_input(event);
        let after = widget.borrow().bounds();

        if let Some(handler) = self.on_input.as_mut() {
            handler(id, event);
        }

        if before != after {
            if self.config.debug_redraw {
                debug!(widget = id.raw(), ?before, ?after, "focused widget moved");
            }
            self.full_redraw();
            Dispatch::Full(id)
        } else {
            self.redraw_widget(id);
            Dispatch::Incremental(id)
        }
    }

    fn finish_redraw(&mut self) {
        let cursor = self.cursor_target();
        self.output.push(TerminalCmd::move_to(cursor.col, cursor.row));
        self.output.flush(&mut self.sink);
    }

    fn cursor_target(&self) -> CursorPos {
        self.focus
            .focused()
            .and_then(|id| self.registry.widget(id))
            .and_then(|widget| widget.borrow().cursor_pos())
            .unwrap_or_default()
    }
}

fn render_entry(entry: &mut WidgetEntry, strict: bool) -> (Rect, Vec<Line>) {
    let mut widget = entry.widget.borrow_mut();
    let bounds = widget.bounds();
    let lines = clamp_to_bounds(widget.render(), bounds, strict);
    (bounds, lines)
}
