//! The list state container: items, selection and the add dialog.

mod intent;
mod reducer;
mod state;

pub use intent::ShoppingListIntent;
pub use reducer::ShoppingListReducer;
pub use state::ShoppingListState;
