//! Single-row selection over an ordered list.
//!
//! The selection is either empty or names exactly one index that is in
//! bounds for the list length it was last checked against.

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SelectionState {
    selected_index: Option<usize>,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self) -> Option<usize> {
        self.selected_index
    }

    /// Select `index` if it is within `len`, otherwise clear the selection.
    pub fn select(&mut self, index: Option<usize>, len: usize) {
        self.selected_index = index.filter(|&idx| idx < len);
    }

    pub fn clear(&mut self) {
        self.selected_index = None;
    }

    pub fn next(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        self.selected_index = Some(match self.selected_index {
            Some(idx) => (idx + 1).min(len - 1),
            None => 0,
        });
    }

    pub fn prev(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        self.selected_index = Some(match self.selected_index {
            Some(idx) => idx.saturating_sub(1),
            None => len - 1,
        });
    }

    pub fn first(&mut self, len: usize) {
        if len > 0 {
            self.selected_index = Some(0);
        }
    }

    pub fn last(&mut self, len: usize) {
        if len > 0 {
            self.selected_index = Some(len - 1);
        }
    }

    pub fn is_selected(&self, index: usize) -> bool {
        self.selected_index == Some(index)
    }

    pub fn has_selection(&self) -> bool {
        self.selected_index.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_selection_is_empty() {
        let selection = SelectionState::new();
        assert!(selection.get().is_none());
        assert!(!selection.has_selection());
    }

    #[test]
    fn test_select_in_bounds() {
        let mut selection = SelectionState::new();
        selection.select(Some(2), 3);
        assert_eq!(selection.get(), Some(2));
        assert!(selection.is_selected(2));
        assert!(!selection.is_selected(1));
    }

    #[test]
    fn test_select_out_of_bounds_clears() {
        let mut selection = SelectionState::new();
        selection.select(Some(1), 3);
        selection.select(Some(3), 3);
        assert!(selection.get().is_none());

        selection.select(Some(0), 0);
        assert!(selection.get().is_none());
    }

    #[test]
    fn test_next_stops_at_end() {
        let mut selection = SelectionState::new();
        selection.next(3);
        assert_eq!(selection.get(), Some(0));
        selection.next(3);
        selection.next(3);
        selection.next(3);
        assert_eq!(selection.get(), Some(2));
    }

    #[test]
    fn test_prev_from_none_selects_last() {
        let mut selection = SelectionState::new();
        selection.prev(4);
        assert_eq!(selection.get(), Some(3));
        selection.select(Some(0), 4);
        selection.prev(4);
        assert_eq!(selection.get(), Some(0));
    }

    #[test]
    fn test_navigation_on_empty_list_keeps_none() {
        let mut selection = SelectionState::new();
        selection.next(0);
        selection.prev(0);
        selection.first(0);
        selection.last(0);
        assert!(selection.get().is_none());
    }

    #[test]
    fn test_first_last() {
        let mut selection = SelectionState::new();
        selection.last(10);
        assert_eq!(selection.get(), Some(9));
        selection.first(10);
        assert_eq!(selection.get(), Some(0));
    }
}
