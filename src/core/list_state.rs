//! Scroll/selection state for list widgets.
//!
//! Two independent axes: `selected_index` (which item is highlighted) and
//! `scroll_index` (first item shown). Selecting always scrolls the selection
//! into view; scrolling never moves the selection.
//!
//! Invariants after every operation, with `N` items and `V` visible rows:
//! - `selected_index < N`, or `selected_index == 0` when empty
//! - `scroll_index <= max(0, N - V)`

use crate::core::style::Style;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListItem<T> {
    pub text: String,
    /// Falls back to the list's item style when unset.
    pub style: Option<Style>,
    pub value: Option<T>,
}

impl<T> ListItem<T> {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: None,
            value: None,
        }
    }

    pub fn with_value(value: T, text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: None,
            value: Some(value),
        }
    }

    pub fn with_style(mut self, style: Style) -> Self {
        self.style = Some(style);
        self
    }

    pub fn set_color(&mut self, color: u32) -> &mut Self {
        self.style = Some(Style::rgb(color));
        self
    }
}

#[derive(Clone, Debug)]
pub struct ListState<T> {
    items: Vec<ListItem<T>>,
    selected_index: usize,
    scroll_index: usize,
    visible_rows: usize,
}

impl<T> ListState<T> {
    pub fn new(visible_rows: usize) -> Self {
        Self {
            items: Vec::new(),
            selected_index: 0,
            scroll_index: 0,
            visible_rows,
        }
    }

    pub fn items(&self) -> &[ListItem<T>] {
        &self.items
    }

    pub fn item_mut(&mut self, index: usize) -> Option<&mut ListItem<T>> {
        self.items.get_mut(index)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn selected_index(&self) -> usize {
        self.selected_index
    }

    pub fn scroll_index(&self) -> usize {
        self.scroll_index
    }

    pub fn selected_item(&self) -> Option<&ListItem<T>> {
        self.items.get(self.selected_index)
    }

    pub fn visible_rows(&self) -> usize {
        self.visible_rows
    }

    pub fn set_visible_rows(&mut self, visible_rows: usize) {
        self.visible_rows = visible_rows;
        self.reclamp();
    }

    /// Indices of the items currently inside the window.
    pub fn visible_range(&self) -> std::ops::Range<usize> {
        let start = self.scroll_index.min(self.items.len());
        let end = (self.scroll_index + self.rows()).min(self.items.len());
        start..end
    }

    pub fn push(&mut self, item: ListItem<T>) {
        self.items.push(item);
    }

    pub fn remove(&mut self, index: usize) -> Option<ListItem<T>> {
        if index >= self.items.len() {
            return None;
        }
        let item = self.items.remove(index);
        self.reclamp();
        Some(item)
    }

    pub fn set_items(&mut self, items: Vec<ListItem<T>>) {
        self.items = items;
        self.reclamp();
    }

    pub fn clear(&mut self) {
        self.items.clear();
        self.reclamp();
    }

    /// Select `index` (clamped to the item range) and scroll it into view.
    ///
    /// Returns whether the selected index changed.
    pub fn select(&mut self, index: usize) -> bool {
        let previous = self.selected_index;
        self.selected_index = index.min(self.items.len().saturating_sub(1));

        let rows = self.rows();
        if self.selected_index < self.scroll_index {
            self.scroll_index = self.selected_index;
        } else if self.selected_index >= self.scroll_index + rows {
            self.scroll_index = self.selected_index + 1 - rows;
        }

        previous != self.selected_index
    }

    pub fn select_next(&mut self) -> bool {
        self.select(self.selected_index.saturating_add(1))
    }

    pub fn select_previous(&mut self) -> bool {
        self.select(self.selected_index.saturating_sub(1))
    }

    /// Move the window to start at `index`, clamped to the valid range.
    /// The selection is left where it is.
    pub fn scroll_to(&mut self, index: usize) {
        self.scroll_index = index.min(self.max_scroll());
    }

    pub fn page_down(&mut self) {
        self.scroll_to(self.scroll_index.saturating_add(self.page_step()));
    }

    pub fn page_up(&mut self) {
        self.scroll_to(self.scroll_index.saturating_sub(self.page_step()));
    }

    pub fn max_scroll(&self) -> usize {
        self.items.len().saturating_sub(self.rows())
    }

    /// Row (relative to the widget top, border included) for a scrollbar-style
    /// caret: pinned to the first item row when everything fits, otherwise
    /// proportional to how far the window has scrolled.
    pub fn cursor_row(&self) -> usize {
        let rows = self.rows();
        if self.items.len() < rows {
            return 1;
        }
        let span = self.max_scroll().max(1);
        self.scroll_index * (rows - 1) / span + 1
    }

    fn rows(&self) -> usize {
        self.visible_rows.max(1)
    }

    fn page_step(&self) -> usize {
        self.rows().saturating_sub(2).max(1)
    }

    fn reclamp(&mut self) {
        self.scroll_index = self.scroll_index.min(self.max_scroll());
        self.select(self.selected_index);
    }
}

impl<T: PartialEq> ListState<T> {
    /// Append `item` unless an equal item is already listed.
    ///
    /// Returns whether it was added.
    pub fn push_unique(&mut self, item: ListItem<T>) -> bool {
        if self.items.contains(&item) {
            return false;
        }
        self.items.push(item);
        true
    }
}

impl<T> Default for ListState<T> {
    fn default() -> Self {
        Self::new(1)
    }
}
