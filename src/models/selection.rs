//! Session-scoped route selection.

use super::route::RouteId;

/// At most one selected route id for the current session.
///
/// The selection is an explicit context object passed into each render call,
/// never ambient global state. Selecting does not validate against the
/// current filter: a route outside the filtered view stays selected (its
/// detail view still renders from the full table) until cleared or replaced.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Selection {
    selected: Option<RouteId>,
}

impl Selection {
    /// Creates an empty selection.
    #[must_use]
    pub const fn new() -> Self {
        Self { selected: None }
    }

    /// Selects a route unconditionally, replacing any previous selection.
    pub fn select(&mut self, id: RouteId) {
        self.selected = Some(id);
    }

    /// Clears the selection.
    pub fn clear(&mut self) {
        self.selected = None;
    }

    /// The currently selected route id, if any.
    #[must_use]
    pub const fn selected(&self) -> Option<&RouteId> {
        self.selected.as_ref()
    }

    /// Whether the given id is the current selection.
    #[must_use]
    pub fn is_selected(&self, id: &RouteId) -> bool {
        self.selected.as_ref() == Some(id)
    }

    /// Whether nothing is selected.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.selected.is_none()
    }
}
