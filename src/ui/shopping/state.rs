use crate::model::ShoppingItem;
use crate::ui::add_dialog::AddDialogState;
use crate::ui::mvi::UiState;

/// Everything the shopping list screen renders.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ShoppingListState {
    /// Insertion order; ids are `1..=len`.
    pub items: Vec<ShoppingItem>,
    pub dialog: AddDialogState,
    /// Highlighted row, always `< items.len()` when set.
    pub selected: Option<usize>,
}

impl UiState for ShoppingListState {}

impl ShoppingListState {
    pub fn is_dialog_open(&self) -> bool {
        self.dialog.is_visible()
    }

    pub fn selected_item(&self) -> Option<&ShoppingItem> {
        self.selected.and_then(|index| self.items.get(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_empty_and_closed() {
        let state = ShoppingListState::default();
        assert!(state.items.is_empty());
        assert!(!state.is_dialog_open());
        assert!(state.selected_item().is_none());
    }

    #[test]
    fn selected_item_follows_index() {
        let state = ShoppingListState {
            items: vec![
                ShoppingItem::new(0, "Milk", "2"),
                ShoppingItem::new(1, "Eggs", "12"),
            ],
            dialog: AddDialogState::Hidden,
            selected: Some(1),
        };
        assert_eq!(state.selected_item().map(|item| item.id), Some(2));
    }
}
