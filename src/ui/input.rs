use crate::ui::add_dialog::{AddDialogIntent, DialogField};
use crate::ui::app::App;
use crate::ui::shopping::{ShoppingListIntent, ShoppingListState};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// What a key press means for the current screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputAction {
    /// Key has no binding here.
    None,
    Quit,
    Dispatch(ShoppingListIntent),
}

pub fn handle_key(app: &mut App, key: KeyEvent) {
    apply(app, map_key(app.state(), key));
}

pub fn handle_paste(app: &mut App, text: &str) {
    apply(app, map_paste(app.state(), text));
}

fn apply(app: &mut App, action: InputAction) {
    match action {
        InputAction::None => {}
        InputAction::Quit => app.request_quit(),
        InputAction::Dispatch(intent) => app.dispatch(intent),
    }
}

pub fn map_key(state: &ShoppingListState, key: KeyEvent) -> InputAction {
    if key.kind != KeyEventKind::Press {
        return InputAction::None;
    }

    if is_ctrl_char(key, 'q') {
        return InputAction::Quit;
    }

    match state.dialog.focus() {
        Some(focus) => map_dialog_key(focus, key),
        None => map_list_key(state, key),
    }
}

/// Pasted text only lands in an open dialog.
pub fn map_paste(state: &ShoppingListState, text: &str) -> InputAction {
    if !state.is_dialog_open() || text.is_empty() {
        return InputAction::None;
    }
    dialog(AddDialogIntent::InsertText(text.to_string()))
}

fn map_dialog_key(focus: DialogField, key: KeyEvent) -> InputAction {
    match key.code {
        KeyCode::Esc => InputAction::Dispatch(ShoppingListIntent::CloseAddDialog),
        KeyCode::Enter if focus == DialogField::CancelButton => {
            InputAction::Dispatch(ShoppingListIntent::CloseAddDialog)
        }
        KeyCode::Enter => InputAction::Dispatch(ShoppingListIntent::SubmitDialog),
        KeyCode::Tab | KeyCode::Down => dialog(AddDialogIntent::FocusNext),
        KeyCode::BackTab | KeyCode::Up => dialog(AddDialogIntent::FocusPrevious),
        KeyCode::Backspace => dialog(AddDialogIntent::Backspace),
        KeyCode::Char(ch)
            if !key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            dialog(AddDialogIntent::InsertChar(ch))
        }
        _ => InputAction::None,
    }
}

fn map_list_key(state: &ShoppingListState, key: KeyEvent) -> InputAction {
    if key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) {
        return InputAction::None;
    }
    let selected_id = state.selected_item().map(|item| item.id);

    match key.code {
        KeyCode::Char('a') => InputAction::Dispatch(ShoppingListIntent::OpenAddDialog),
        KeyCode::Up | KeyCode::Char('k') => {
            InputAction::Dispatch(ShoppingListIntent::SelectPrevious)
        }
        KeyCode::Down | KeyCode::Char('j') => InputAction::Dispatch(ShoppingListIntent::SelectNext),
        KeyCode::Char('e') => match selected_id {
            Some(id) => InputAction::Dispatch(ShoppingListIntent::EditRequested { id }),
            None => InputAction::None,
        },
        KeyCode::Char('d') | KeyCode::Delete => match selected_id {
            Some(id) => InputAction::Dispatch(ShoppingListIntent::DeleteRequested { id }),
            None => InputAction::None,
        },
        KeyCode::Char('q') | KeyCode::Esc => InputAction::Quit,
        _ => InputAction::None,
    }
}

fn dialog(intent: AddDialogIntent) -> InputAction {
    InputAction::Dispatch(ShoppingListIntent::Dialog(intent))
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}
