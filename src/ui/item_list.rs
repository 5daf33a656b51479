use crate::model::ShoppingItem;
use crate::ui::text::{display_width, pad_to_width, truncate_to_width};
use crate::ui::theme::{ACCENT, ACTIVE_HIGHLIGHT, DELETE_ICON, GLOBAL_BORDER, MUTED_TEXT, TEXT};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph};
use ratatui::Frame;

const HIGHLIGHT_SYMBOL: &str = "› ";
const EDIT_ICON: &str = "✎";
const DELETE_ICON_GLYPH: &str = "✖";
const NAME_GAP: &str = "   ";
const EMPTY_HINT: &str = "No items yet. Press 'a' to add one.";

/// Renders the scrollable item list. Each row: name, `Qty: n`, and the
/// edit/delete icons right-aligned.
pub fn render_item_list(
    frame: &mut Frame<'_>,
    area: Rect,
    items: &[ShoppingItem],
    selected: Option<usize>,
) {
    let block = Block::default()
        .title(Span::styled(" Items ", Style::default().fg(ACCENT)))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(GLOBAL_BORDER));

    if items.is_empty() {
        let hint = Paragraph::new(Line::from(Span::styled(
            EMPTY_HINT,
            Style::default().fg(MUTED_TEXT),
        )))
        .block(block);
        frame.render_widget(hint, area);
        return;
    }

    let row_width = block
        .inner(area)
        .width
        .saturating_sub(display_width(HIGHLIGHT_SYMBOL) as u16) as usize;
    let name_width = items
        .iter()
        .map(|item| display_width(&item.name))
        .max()
        .unwrap_or(0)
        .min(row_width / 2);

    let rows: Vec<ListItem> = items
        .iter()
        .map(|item| ListItem::new(item_line(item, name_width, row_width)))
        .collect();

    let list = List::new(rows)
        .block(block)
        .highlight_style(Style::default().bg(ACTIVE_HIGHLIGHT))
        .highlight_symbol(HIGHLIGHT_SYMBOL);

    let mut list_state = ListState::default().with_selected(selected);
    frame.render_stateful_widget(list, area, &mut list_state);
}

fn item_line(item: &ShoppingItem, name_width: usize, row_width: usize) -> Line<'static> {
    let quantity = format!("Qty: {}", item.quantity);
    let icons_width = display_width(EDIT_ICON) + display_width(DELETE_ICON_GLYPH) + 3;
    // Gap after the name plus at least one column before the icons.
    let fixed_width = NAME_GAP.len() + display_width(&quantity) + 1 + icons_width;
    let name_width = name_width.min(row_width.saturating_sub(fixed_width));
    let name = pad_to_width(&truncate_to_width(&item.name, name_width), name_width);
    let padding = row_width
        .saturating_sub(name_width)
        .saturating_sub(fixed_width)
        + 1;

    Line::from(vec![
        Span::styled(name, Style::default().fg(TEXT).add_modifier(Modifier::BOLD)),
        Span::raw(NAME_GAP),
        Span::styled(quantity, Style::default().fg(TEXT)),
        Span::raw(" ".repeat(padding)),
        Span::styled(EDIT_ICON, Style::default().fg(ACCENT)),
        Span::raw("  "),
        Span::styled(DELETE_ICON_GLYPH, Style::default().fg(DELETE_ICON)),
        Span::raw(" "),
    ])
}
