use crate::model::{is_blank, ShoppingItem};
use crate::ui::add_dialog::{AddDialogReducer, AddDialogState};
use crate::ui::mvi::Reducer;
use crate::ui::shopping::intent::ShoppingListIntent;
use crate::ui::shopping::state::ShoppingListState;

pub struct ShoppingListReducer;

impl Reducer for ShoppingListReducer {
    type State = ShoppingListState;
    type Intent = ShoppingListIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            ShoppingListIntent::OpenAddDialog => {
                if state.dialog.is_visible() {
                    return state;
                }
                ShoppingListState {
                    dialog: AddDialogState::opened(),
                    ..state
                }
            }
            ShoppingListIntent::CloseAddDialog => ShoppingListState {
                dialog: AddDialogState::Hidden,
                ..state
            },
            ShoppingListIntent::AddItem { name, quantity } => add_item(state, name, &quantity),
            ShoppingListIntent::SubmitDialog => {
                let pending = state
                    .dialog
                    .pending()
                    .map(|(name, quantity)| (name.to_string(), quantity.to_string()));
                match pending {
                    Some((name, quantity)) => add_item(state, name, &quantity),
                    None => state,
                }
            }
            ShoppingListIntent::Dialog(dialog_intent) => {
                let ShoppingListState {
                    items,
                    dialog,
                    selected,
                } = state;
                ShoppingListState {
                    items,
                    dialog: AddDialogReducer::reduce(dialog, dialog_intent),
                    selected,
                }
            }
            ShoppingListIntent::SelectNext => {
                let last = match state.items.len() {
                    0 => return state,
                    len => len - 1,
                };
                let selected = state.selected.map_or(0, |index| (index + 1).min(last));
                ShoppingListState {
                    selected: Some(selected),
                    ..state
                }
            }
            ShoppingListIntent::SelectPrevious => {
                if state.items.is_empty() {
                    return state;
                }
                let selected = state.selected.map_or(0, |index| index.saturating_sub(1));
                ShoppingListState {
                    selected: Some(selected),
                    ..state
                }
            }
            ShoppingListIntent::EditRequested { .. }
            | ShoppingListIntent::DeleteRequested { .. } => state,
        }
    }
}

fn add_item(state: ShoppingListState, name: String, quantity: &str) -> ShoppingListState {
    if is_blank(&name) || is_blank(quantity) {
        return state;
    }

    let ShoppingListState { mut items, .. } = state;
    items.push(ShoppingItem::new(items.len(), name, quantity));
    let selected = Some(items.len() - 1);
    ShoppingListState {
        items,
        dialog: AddDialogState::Hidden,
        selected,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_keeps_pending_text_when_already_open() {
        let state = ShoppingListState {
            dialog: AddDialogState::Visible {
                name: "Mi".to_string(),
                quantity: String::new(),
                focus: Default::default(),
            },
            ..Default::default()
        };
        let next = ShoppingListReducer::reduce(state.clone(), ShoppingListIntent::OpenAddDialog);
        assert_eq!(next, state);
    }

    #[test]
    fn submit_while_hidden_is_noop() {
        let state = ShoppingListState::default();
        let next = ShoppingListReducer::reduce(state.clone(), ShoppingListIntent::SubmitDialog);
        assert_eq!(next, state);
    }

    #[test]
    fn select_on_empty_list_is_noop() {
        let state = ShoppingListState::default();
        let next = ShoppingListReducer::reduce(state, ShoppingListIntent::SelectNext);
        assert_eq!(next.selected, None);
    }
}
