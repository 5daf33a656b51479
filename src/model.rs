//! Shopping list domain values.

/// One line of the shopping list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShoppingItem {
    /// `count + 1` at insertion time.
    pub id: u32,
    /// Display name, stored exactly as typed.
    pub name: String,
    pub quantity: i32,
    /// Never toggled; edit mode is not wired.
    pub is_editing: bool,
}

impl ShoppingItem {
    /// Builds the item appended after `existing` items.
    ///
    /// Callers are expected to have rejected blank inputs already
    /// (see [`is_blank`]).
    pub fn new(existing: usize, name: impl Into<String>, quantity_text: &str) -> Self {
        Self {
            id: next_id(existing),
            name: name.into(),
            quantity: parse_quantity(quantity_text),
            is_editing: false,
        }
    }
}

fn next_id(existing: usize) -> u32 {
    u32::try_from(existing)
        .unwrap_or(u32::MAX)
        .saturating_add(1)
}

/// Parses quantity text as a signed integer, falling back to 0.
///
/// No trimming happens here: `" 2"` is not a number and yields 0.
pub fn parse_quantity(text: &str) -> i32 {
    text.parse::<i32>().unwrap_or(0)
}

/// Empty or whitespace-only.
pub fn is_blank(text: &str) -> bool {
    text.trim().is_empty()
}
