use crate::ui::mvi::Intent;

/// Keystroke-level edits inside the open "Add Item" dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddDialogIntent {
    InsertChar(char),
    /// Bracketed paste. Control characters are dropped.
    InsertText(String),
    Backspace,
    FocusNext,
    FocusPrevious,
}

impl Intent for AddDialogIntent {}
