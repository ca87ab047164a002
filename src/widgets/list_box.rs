//! Bordered, scrollable list.

use crate::core::cursor::CursorPos;
use crate::core::input_event::KeyEvent;
use crate::core::line::{Line, Span};
use crate::core::list_state::{ListItem, ListState};
use crate::core::style::Style;
use crate::core::widget::{Focusable, Rect, Widget};
use crate::widgets::border::Border;

/// A framed list with a title in the top edge.
///
/// Item rows sit between the top and bottom border, so `height - 2` items are
/// visible at once. Up/down move the selection; page up/down move the window
/// without touching the selection.
pub struct ListBox<T> {
    bounds: Rect,
    z: i32,
    border: Border,
    title: String,
    title_style: Style,
    item_style: Style,
    state: ListState<T>,
    focused: bool,
    on_selection_change: Option<Box<dyn FnMut(usize, &ListItem<T>)>>,
}

impl<T> ListBox<T> {
    pub fn new(x: usize, y: usize, width: usize, height: usize) -> Self {
        Self {
            bounds: Rect::new(x, y, width, height),
            z: 0,
            border: Border::default(),
            title: String::new(),
            title_style: Style::default(),
            item_style: Style::default(),
            state: ListState::new(item_rows(height)),
            focused: false,
            on_selection_change: None,
        }
    }

    pub fn with_z(mut self, z: i32) -> Self {
        self.z = z;
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn set_title_color(&mut self, color: u32) {
        self.title_style = Style::rgb(color);
    }

    /// Style for items that do not carry their own.
    pub fn set_color(&mut self, color: u32) {
        self.item_style = Style::rgb(color);
    }

    pub fn border(&self) -> &Border {
        &self.border
    }

    pub fn border_mut(&mut self) -> &mut Border {
        &mut self.border
    }

    pub fn move_to(&mut self, x: usize, y: usize) {
        self.bounds.x = x;
        self.bounds.y = y;
    }

    pub fn resize(&mut self, width: usize, height: usize) {
        self.bounds.width = width;
        self.bounds.height = height;
        self.state.set_visible_rows(item_rows(height));
    }

    pub fn state(&self) -> &ListState<T> {
        &self.state
    }

    pub fn items(&self) -> &[ListItem<T>] {
        self.state.items()
    }

    pub fn push(&mut self, item: ListItem<T>) {
        self.state.push(item);
    }

    pub fn remove(&mut self, index: usize) -> Option<ListItem<T>> {
        self.state.remove(index)
    }

    pub fn set_items(&mut self, items: Vec<ListItem<T>>) {
        self.state.set_items(items);
    }

    pub fn clear(&mut self) {
        self.state.clear();
    }

    pub fn selected_index(&self) -> usize {
        self.state.selected_index()
    }

    pub fn selected_item(&self) -> Option<&ListItem<T>> {
        self.state.selected_item()
    }

    pub fn select(&mut self, index: usize) {
        if self.state.select(index) {
            self.notify_selection_change();
        }
    }

    pub fn scroll_to(&mut self, index: usize) {
        self.state.scroll_to(index);
    }

    pub fn set_on_selection_change(&mut self, handler: Option<Box<dyn FnMut(usize, &ListItem<T>)>>) {
        self.on_selection_change = handler;
    }

    fn notify_selection_change(&mut self) {
        let index = self.state.selected_index();
        let Some(item) = self.state.selected_item() else {
            return;
        };
        if let Some(handler) = self.on_selection_change.as_mut() {
            handler(index, item);
        }
    }

    fn render_item_row(&self, index: usize) -> Line {
        let width = self.bounds.width;
        let Some(item) = self.state.items().get(index) else {
            return self.border.row(Span::raw(""), width);
        };
        let mut style = item.style.unwrap_or(self.item_style);
        if index == self.state.selected_index() {
            style = style.inverted();
        }
        self.border.row(Span::new(item.text.as_str(), style), width)
    }
}

impl<T: PartialEq> ListBox<T> {
    /// Append `item` unless an equal one is already listed.
    pub fn add(&mut self, item: ListItem<T>) -> bool {
        self.state.push_unique(item)
    }
}

impl<T> Widget for ListBox<T> {
    fn bounds(&self) -> Rect {
        self.bounds
    }

    fn z_index(&self) -> i32 {
        self.z
    }

    fn render(&mut self) -> Vec<Line> {
        let Rect { width, height, .. } = self.bounds;
        if height == 0 {
            return Vec::new();
        }

        let mut lines = Vec::with_capacity(height);
        lines.push(self.border.top_line(width, &self.title, self.title_style));
        let scroll = self.state.scroll_index();
        for row in 0..item_rows(height) {
            lines.push(self.render_item_row(scroll + row));
        }
        if height >= 2 {
            lines.push(self.border.bottom_line(width));
        }
        lines
    }

    fn handle_input(&mut self, event: &KeyEvent) {
        let changed = if event.is("down") {
            self.state.select_next()
        } else if event.is("up") {
            self.state.select_previous()
        } else if event.is("pagedown") {
            self.state.page_down();
            false
        } else if event.is("pageup") {
            self.state.page_up();
            false
        } else {
            false
        };
        if changed {
            self.notify_selection_change();
        }
    }

    fn cursor_pos(&self) -> Option<CursorPos> {
        Some(CursorPos::new(
            self.bounds.x + self.bounds.width.saturating_sub(1),
            self.bounds.y + self.state.cursor_row(),
        ))
    }

    fn as_focusable(&mut self) -> Option<&mut dyn Focusable> {
        Some(self)
    }
}

impl<T> Focusable for ListBox<T> {
    fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    fn is_focused(&self) -> bool {
        self.focused
    }
}

fn item_rows(height: usize) -> usize {
    height.saturating_sub(2)
}
