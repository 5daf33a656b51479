use crate::ui::add_dialog::intent::AddDialogIntent;
use crate::ui::add_dialog::state::{AddDialogState, DialogField};
use crate::ui::mvi::Reducer;

pub struct AddDialogReducer;

impl Reducer for AddDialogReducer {
    type State = AddDialogState;
    type Intent = AddDialogIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        let AddDialogState::Visible {
            mut name,
            mut quantity,
            focus,
        } = state
        else {
            return AddDialogState::Hidden;
        };

        let focus = match intent {
            AddDialogIntent::FocusNext => focus.next(),
            AddDialogIntent::FocusPrevious => focus.previous(),
            AddDialogIntent::InsertChar(ch) => {
                if let Some(field) = focused_text(focus, &mut name, &mut quantity) {
                    if !ch.is_control() {
                        field.push(ch);
                    }
                }
                focus
            }
            AddDialogIntent::InsertText(text) => {
                if let Some(field) = focused_text(focus, &mut name, &mut quantity) {
                    field.extend(text.chars().filter(|ch| !ch.is_control()));
                }
                focus
            }
            AddDialogIntent::Backspace => {
                if let Some(field) = focused_text(focus, &mut name, &mut quantity) {
                    field.pop();
                }
                focus
            }
        };

        AddDialogState::Visible {
            name,
            quantity,
            focus,
        }
    }
}

fn focused_text<'a>(
    focus: DialogField,
    name: &'a mut String,
    quantity: &'a mut String,
) -> Option<&'a mut String> {
    match focus {
        DialogField::Name => Some(name),
        DialogField::Quantity => Some(quantity),
        DialogField::AddButton | DialogField::CancelButton => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn visible(name: &str, quantity: &str, focus: DialogField) -> AddDialogState {
        AddDialogState::Visible {
            name: name.to_string(),
            quantity: quantity.to_string(),
            focus,
        }
    }

    #[test]
    fn hidden_ignores_edits() {
        let state = AddDialogReducer::reduce(
            AddDialogState::Hidden,
            AddDialogIntent::InsertChar('x'),
        );
        assert_eq!(state, AddDialogState::Hidden);
    }

    #[test]
    fn typing_goes_to_focused_field() {
        let state = visible("", "", DialogField::Name);
        let state = AddDialogReducer::reduce(state, AddDialogIntent::InsertChar('M'));
        let state = AddDialogReducer::reduce(state, AddDialogIntent::FocusNext);
        let state = AddDialogReducer::reduce(state, AddDialogIntent::InsertChar('2'));
        assert_eq!(state, visible("M", "2", DialogField::Quantity));
    }

    #[test]
    fn buttons_swallow_text() {
        let state = visible("Milk", "2", DialogField::AddButton);
        let state = AddDialogReducer::reduce(state, AddDialogIntent::InsertChar('x'));
        let state = AddDialogReducer::reduce(state, AddDialogIntent::Backspace);
        assert_eq!(state, visible("Milk", "2", DialogField::AddButton));
    }

    #[test]
    fn backspace_on_empty_field_is_noop() {
        let state = visible("", "", DialogField::Quantity);
        let state = AddDialogReducer::reduce(state, AddDialogIntent::Backspace);
        assert_eq!(state, visible("", "", DialogField::Quantity));
    }

    #[test]
    fn paste_drops_control_chars() {
        let state = visible("", "", DialogField::Name);
        let state = AddDialogReducer::reduce(
            state,
            AddDialogIntent::InsertText("Oat\nmilk\t".to_string()),
        );
        assert_eq!(state, visible("Oatmilk", "", DialogField::Name));
    }
}
