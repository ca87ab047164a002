//! Widget registry and identifiers.

use std::cell::RefCell;
use std::rc::Rc;

use crate::core::widget::WidgetRc;
use crate::render::DiffRenderer;

/// Stable identifier for a widget registered with a single `Surface`.
///
/// Semantics:
/// - IDs are unique within a surface.
/// - IDs are never reused for the lifetime of the surface.
#[repr(transparent)]
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct WidgetId(u64);

impl WidgetId {
    pub fn raw(self) -> u64 {
        self.0
    }
}

pub(crate) struct WidgetEntry {
    pub(crate) id: WidgetId,
    pub(crate) widget: WidgetRc,
    pub(crate) renderer: DiffRenderer,
}

#[derive(Default)]
pub struct WidgetRegistry {
    entries: Vec<WidgetEntry>,
    next_id: u64,
}

impl WidgetRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `widget`, or return its existing id if it is already present.
    pub fn register(&mut self, widget: WidgetRc) -> WidgetId {
        if let Some(id) = self.find(&widget) {
            return id;
        }
        let id = WidgetId(self.next_id);
        self.next_id = self
            .next_id
            .checked_add(1)
            .expect("widget id overflowed u64");
        self.entries.push(WidgetEntry {
            id,
            widget,
            renderer: DiffRenderer::new(),
        });
        id
    }

    /// Id of `widget`, matched by pointer identity. Accepts a concrete handle
    /// as well as the type-erased [`WidgetRc`].
    pub fn find<W: ?Sized>(&self, widget: &Rc<RefCell<W>>) -> Option<WidgetId> {
        self.entries
            .iter()
            .find(|entry| same_widget(&entry.widget, widget))
            .map(|entry| entry.id)
    }

    pub fn contains(&self, id: WidgetId) -> bool {
        self.get(id).is_some()
    }

    pub fn widget(&self, id: WidgetId) -> Option<WidgetRc> {
        self.get(id).map(|entry| Rc::clone(&entry.widget))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Ids in drawing order.
    pub fn ids(&self) -> Vec<WidgetId> {
        self.entries.iter().map(|entry| entry.id).collect()
    }

    /// Stable sort by ascending stacking order.
    pub fn sort_by_z(&mut self) {
        self.entries
            .sort_by_key(|entry| entry.widget.borrow().z_index());
    }

    pub(crate) fn get(&self, id: WidgetId) -> Option<&WidgetEntry> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    pub(crate) fn get_mut(&mut self, id: WidgetId) -> Option<&mut WidgetEntry> {
        self.entries.iter_mut().find(|entry| entry.id == id)
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = &WidgetEntry> {
        self.entries.iter()
    }

    pub(crate) fn iter_mut(&mut self) -> impl Iterator<Item = &mut WidgetEntry> {
        self.entries.iter_mut()
    }
}

/// Pointer identity, ignoring the vtable half of the fat pointer.
fn same_widget<W: ?Sized>(a: &WidgetRc, b: &Rc<RefCell<W>>) -> bool {
    Rc::as_ptr(a) as *const () == Rc::as_ptr(b) as *const ()
}
