mod common;

use common::{key, new_app, type_text};
use crossterm::event::KeyCode;
use ratatui::backend::TestBackend;
use ratatui::layout::Position;
use ratatui::Terminal;
use shoplist::ui::app::App;
use shoplist::ui::input::{handle_key, handle_paste};
use shoplist::ui::render::draw;

fn render(app: &App, width: u16, height: u16) -> Vec<String> {
    render_with_cursor(app, width, height).0
}

/// Rendered rows (one char per cell, so char index == column) and the
/// cursor position after the draw.
fn render_with_cursor(app: &App, width: u16, height: u16) -> (Vec<String>, Position) {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal.draw(|frame| draw(frame, app)).unwrap();
    let cursor = terminal.get_cursor_position().unwrap();
    let buffer = terminal.backend().buffer();
    let lines: Vec<String> = (0..buffer.area.height)
        .map(|y| {
            (0..buffer.area.width)
                .map(|x| buffer[(x, y)].symbol())
                .collect::<String>()
        })
        .collect();
    (lines, cursor)
}

/// Column of `needle` in a row rendered by `render_with_cursor`.
fn column_of(line: &str, needle: &str) -> Option<usize> {
    let byte = line.find(needle)?;
    Some(line[..byte].chars().count())
}

fn screen_contains(lines: &[String], needle: &str) -> bool {
    lines.iter().any(|line| line.contains(needle))
}

fn add(app: &mut App, name: &str, quantity: &str) {
    handle_key(app, key(KeyCode::Char('a')));
    type_text(app, name);
    handle_key(app, key(KeyCode::Tab));
    type_text(app, quantity);
    handle_key(app, key(KeyCode::Enter));
}

#[test]
fn empty_list_shows_hint_and_add_button() {
    let app = new_app();
    let lines = render(&app, 80, 24);
    assert!(screen_contains(&lines, "Shopping List"));
    assert!(screen_contains(&lines, "Add Item"));
    assert!(screen_contains(&lines, "No items yet"));
}

#[test]
fn items_render_with_quantity() {
    let mut app = new_app();
    add(&mut app, "Milk", "2");
    add(&mut app, "Eggs", "abc");
    let lines = render(&app, 80, 24);
    assert!(screen_contains(&lines, "Milk"));
    assert!(screen_contains(&lines, "Qty: 2"));
    assert!(screen_contains(&lines, "Eggs"));
    assert!(screen_contains(&lines, "Qty: 0"));
    assert!(screen_contains(&lines, "2 items"));
    assert!(!screen_contains(&lines, "No items yet"));
}

#[test]
fn dialog_renders_fields_and_buttons() {
    let mut app = new_app();
    handle_key(&mut app, key(KeyCode::Char('a')));
    type_text(&mut app, "Bread");
    let lines = render(&app, 80, 24);
    assert!(screen_contains(&lines, "Item Name"));
    assert!(screen_contains(&lines, "Item Quantity"));
    assert!(screen_contains(&lines, "Bread"));
    assert!(screen_contains(&lines, "[ Add ]"));
    assert!(screen_contains(&lines, "[ Cancel ]"));
}

#[test]
fn dialog_disappears_after_cancel() {
    let mut app = new_app();
    handle_key(&mut app, key(KeyCode::Char('a')));
    handle_key(&mut app, key(KeyCode::Esc));
    let lines = render(&app, 80, 24);
    assert!(!screen_contains(&lines, "Item Name"));
}

#[test]
fn long_list_keeps_selection_visible() {
    let mut app = new_app();
    for index in 0..30 {
        add(&mut app, &format!("Item{index:02}"), "1");
    }
    let lines = render(&app, 80, 24);
    assert!(screen_contains(&lines, "Item29"));
    assert!(!screen_contains(&lines, "Item00"));
}

#[test]
fn tiny_terminal_does_not_panic() {
    let mut app = new_app();
    add(&mut app, "Milk", "2");
    handle_key(&mut app, key(KeyCode::Char('a')));
    render(&app, 10, 5);
}

#[test]
fn long_name_is_truncated_so_quantity_and_icons_fit() {
    let mut app = new_app();
    add(&mut app, &"x".repeat(70), "7");
    let lines = render(&app, 80, 24);
    let row = lines
        .iter()
        .find(|line| line.contains("xxx"))
        .expect("item row rendered");
    assert!(row.contains("…"));
    assert!(row.contains("Qty: 7"));
    assert!(row.contains("✎"));
    assert!(row.contains("✖"));
}

#[test]
fn wide_name_keeps_quantity_visible() {
    let mut app = new_app();
    add(&mut app, &"食".repeat(40), "3");
    add(&mut app, "Milk", "2");
    let lines = render(&app, 80, 24);
    assert!(screen_contains(&lines, "Qty: 3"));
    assert!(screen_contains(&lines, "Qty: 2"));
}

#[test]
fn wide_input_keeps_typed_tail_and_cursor_after_it() {
    let mut app = new_app();
    handle_key(&mut app, key(KeyCode::Char('a')));
    handle_paste(&mut app, &"食".repeat(29));
    type_text(&mut app, "END");

    let (lines, cursor) = render_with_cursor(&app, 80, 24);
    let (row, line) = lines
        .iter()
        .enumerate()
        .find(|(_, line)| line.contains("END"))
        .expect("typed tail is visible");
    let end_column = column_of(line, "END").unwrap();
    assert_eq!(cursor.y as usize, row);
    assert_eq!(cursor.x as usize, end_column + 3);
}
