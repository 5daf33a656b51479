//! Shared test helpers.

#![allow(dead_code)]

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use shoplist::config::UiConfig;
use shoplist::ui::app::App;
use shoplist::ui::input::handle_key;
use shoplist::ui::mvi::Reducer;
use shoplist::ui::shopping::{ShoppingListIntent, ShoppingListReducer, ShoppingListState};

pub fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

pub fn ctrl(ch: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(ch), KeyModifiers::CONTROL)
}

pub fn add_item(name: &str, quantity: &str) -> ShoppingListIntent {
    ShoppingListIntent::AddItem {
        name: name.to_string(),
        quantity: quantity.to_string(),
    }
}

/// Folds `intents` over `state`.
pub fn reduce_all(
    state: ShoppingListState,
    intents: impl IntoIterator<Item = ShoppingListIntent>,
) -> ShoppingListState {
    intents
        .into_iter()
        .fold(state, ShoppingListReducer::reduce)
}

/// State with one item per `(name, quantity)` pair and the dialog closed.
pub fn state_with_items(items: &[(&str, &str)]) -> ShoppingListState {
    reduce_all(
        ShoppingListState::default(),
        items
            .iter()
            .map(|(name, quantity)| add_item(name, quantity)),
    )
}

pub fn type_text(app: &mut App, text: &str) {
    for ch in text.chars() {
        handle_key(app, key(KeyCode::Char(ch)));
    }
}

pub fn new_app() -> App {
    App::new(UiConfig::default())
}
