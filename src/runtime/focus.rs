//! Focus management.

use crate::runtime::registry::{WidgetId, WidgetRegistry};

/// At most one focused widget; focusing one clears every other.
#[derive(Debug, Default)]
pub struct FocusState {
    focused: Option<WidgetId>,
}

impl FocusState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Focus `target` and clear the flag on every other widget.
    ///
    /// A target that is not registered leaves nothing focused.
    pub fn set_focus(&mut self, target: Option<WidgetId>, registry: &WidgetRegistry) {
        let target = target.filter(|id| registry.contains(*id));
        for entry in registry.iter() {
            let mut widget = entry.widget.borrow_mut();
            if let Some(focusable) = widget.as_focusable() {
                focusable.set_focused(Some(entry.id) == target);
            }
        }
        self.focused = target;
    }

    pub fn clear(&mut self, registry: &WidgetRegistry) {
        self.set_focus(None, registry);
    }

    pub fn focused(&self) -> Option<WidgetId> {
        self.focused
    }
}
