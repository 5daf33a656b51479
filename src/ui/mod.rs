pub mod add_dialog;
pub mod app;
pub mod events;
pub mod footer;
pub mod header;
pub mod input;
pub mod item_list;
pub mod layout;
pub mod mvi;
pub mod render;
pub mod runtime;
pub mod shopping;
pub mod terminal_guard;
pub mod text;
pub mod theme;
