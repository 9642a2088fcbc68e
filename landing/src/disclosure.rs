//! Disclosure ("details") state for the expandable lists on the page.
//!
//! Each item owns one [`DisclosureState`] cell. A [`DisclosureList`] keeps the
//! cells of one rendered list in order, keyed by the item index the markup
//! uses. In [`DisclosureMode::Independent`] the cells never touch each other;
//! [`DisclosureMode::Exclusive`] turns the list into an accordion.

use serde::Deserialize;

/// How the items of one list relate to each other.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisclosureMode {
    /// Every item toggles on its own.
    #[default]
    Independent,
    /// Expanding an item collapses its siblings.
    Exclusive,
}

/// Open/closed state of a single disclosure item.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DisclosureState {
    expanded: bool,
}

impl DisclosureState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip the state. Returns the new value.
    pub fn toggle(&mut self) -> bool {
        self.expanded = !self.expanded;
        self.expanded
    }

    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    /// The body is visible exactly when the item is expanded.
    pub fn body_visible(&self) -> bool {
        self.expanded
    }

    fn collapse(&mut self) {
        self.expanded = false;
    }
}

/// The disclosure items of one list, in render order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisclosureList {
    mode: DisclosureMode,
    cells: Vec<(usize, DisclosureState)>,
}

impl DisclosureList {
    /// Build a list of collapsed items. Duplicate indices are kept once.
    pub fn new(mode: DisclosureMode, indices: impl IntoIterator<Item = usize>) -> Self {
        let mut cells: Vec<(usize, DisclosureState)> = Vec::new();
        for idx in indices {
            if cells.iter().all(|(existing, _)| *existing != idx) {
                cells.push((idx, DisclosureState::new()));
            }
        }
        Self { mode, cells }
    }

    pub fn mode(&self) -> DisclosureMode {
        self.mode
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Toggle the item at `idx` and return its new state.
    ///
    /// Unknown indices leave the list untouched and return `None`.
    pub fn toggle(&mut self, idx: usize) -> Option<bool> {
        let Some(pos) = self.cells.iter().position(|(i, _)| *i == idx) else {
            tracing::warn!(idx, "toggle on unknown disclosure item");
            return None;
        };

        let expanded = self.cells[pos].1.toggle();
        if expanded && self.mode == DisclosureMode::Exclusive {
            for (other, cell) in self.cells.iter_mut().enumerate() {
                if other != pos {
                    cell.1.collapse();
                }
            }
        }

        tracing::debug!(idx, expanded, mode = ?self.mode, "disclosure toggled");
        Some(expanded)
    }

    /// Unknown indices report collapsed.
    pub fn is_expanded(&self, idx: usize) -> bool {
        self.state(idx).is_some_and(|s| s.is_expanded())
    }

    pub fn state(&self, idx: usize) -> Option<DisclosureState> {
        self.cells.iter().find(|(i, _)| *i == idx).map(|(_, s)| *s)
    }

    pub fn expanded_indices(&self) -> Vec<usize> {
        self.cells
            .iter()
            .filter(|(_, s)| s.is_expanded())
            .map(|(i, _)| *i)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_collapsed_with_hidden_body() {
        let state = DisclosureState::new();
        assert!(!state.is_expanded());
        assert!(!state.body_visible());
    }

    #[test]
    fn single_toggle_expands() {
        let mut state = DisclosureState::new();
        assert!(state.toggle());
        assert!(state.is_expanded());
        assert!(state.body_visible());
    }

    #[test]
    fn double_toggle_restores_initial_state() {
        let mut state = DisclosureState::new();
        state.toggle();
        state.toggle();
        assert_eq!(state, DisclosureState::new());
    }

    #[test]
    fn feature_list_scenario() {
        let mut list = DisclosureList::new(DisclosureMode::Independent, 0..4);
        assert!(list.expanded_indices().is_empty());

        assert_eq!(list.toggle(2), Some(true));
        assert_eq!(list.expanded_indices(), vec![2]);
        for idx in [0, 1, 3] {
            assert!(!list.is_expanded(idx));
        }

        assert_eq!(list.toggle(2), Some(false));
        assert!(list.expanded_indices().is_empty());
    }

    #[test]
    fn independent_items_do_not_affect_each_other() {
        let mut list = DisclosureList::new(DisclosureMode::Independent, 1..=4);
        list.toggle(1);
        list.toggle(3);
        assert_eq!(list.expanded_indices(), vec![1, 3]);

        list.toggle(1);
        assert_eq!(list.expanded_indices(), vec![3]);
    }

    #[test]
    fn exclusive_mode_keeps_one_item_open() {
        let mut list = DisclosureList::new(DisclosureMode::Exclusive, 0..4);
        list.toggle(0);
        list.toggle(3);
        assert_eq!(list.expanded_indices(), vec![3]);

        list.toggle(3);
        assert!(list.expanded_indices().is_empty());
    }

    #[test]
    fn unknown_index_is_a_no_op() {
        let mut list = DisclosureList::new(DisclosureMode::Exclusive, 1..=4);
        list.toggle(2);
        let before = list.clone();

        assert_eq!(list.toggle(0), None);
        assert_eq!(list, before);
        assert!(!list.is_expanded(0));
        assert_eq!(list.state(0), None);
    }

    #[test]
    fn duplicate_indices_collapse_to_one_cell() {
        let list = DisclosureList::new(DisclosureMode::Independent, [1, 1, 2]);
        assert_eq!(list.len(), 2);
        assert!(!list.is_empty());
        assert_eq!(list.mode(), DisclosureMode::Independent);
    }
}
