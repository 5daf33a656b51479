use crate::ui::add_dialog::AddDialogIntent;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShoppingListIntent {
    OpenAddDialog,
    /// Cancel button and dialog dismiss. Pending text is dropped.
    CloseAddDialog,
    /// Appends an item unless either input is blank.
    AddItem { name: String, quantity: String },
    /// "Add" button: [`ShoppingListIntent::AddItem`] with the pending text.
    SubmitDialog,
    /// Field edit inside the open dialog.
    Dialog(AddDialogIntent),
    SelectNext,
    SelectPrevious,
    /// Edit icon. Not wired: leaves the state untouched.
    EditRequested { id: u32 },
    /// Delete icon. Not wired: leaves the state untouched.
    DeleteRequested { id: u32 },
}

impl Intent for ShoppingListIntent {}
