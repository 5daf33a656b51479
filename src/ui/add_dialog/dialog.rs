use crate::ui::add_dialog::state::{AddDialogState, DialogField};
use crate::ui::layout::centered_rect_by_size;
use crate::ui::text::{display_width, tail_to_width};
use crate::ui::theme::{ACCENT, ACTIVE_HIGHLIGHT, MUTED_TEXT, POPUP_BORDER, TEXT};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

/// Borders plus label/input/label/input/spacer/buttons.
pub const DIALOG_HEIGHT: u16 = 12;
pub const MIN_DIALOG_WIDTH: u16 = 24;

pub fn render_add_dialog(frame: &mut Frame<'_>, area: Rect, state: &AddDialogState, width: u16) {
    let AddDialogState::Visible {
        name,
        quantity,
        focus,
    } = state
    else {
        return;
    };

    let area = centered_rect_by_size(area, width.max(MIN_DIALOG_WIDTH), DIALOG_HEIGHT);
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(Span::styled(
            " Add Item ",
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(POPUP_BORDER));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(inner);

    frame.render_widget(label("Item Name"), rows[0]);
    render_input(frame, rows[1], name, *focus == DialogField::Name);
    frame.render_widget(label("Item Quantity"), rows[2]);
    render_input(frame, rows[3], quantity, *focus == DialogField::Quantity);
    frame.render_widget(button_row(*focus, rows[5].width), rows[5]);
}

fn label(text: &'static str) -> Paragraph<'static> {
    Paragraph::new(Line::from(Span::styled(text, Style::default().fg(MUTED_TEXT))))
}

fn render_input(frame: &mut Frame<'_>, area: Rect, value: &str, focused: bool) {
    let border = if focused { ACCENT } else { MUTED_TEXT };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border));
    let inner = block.inner(area);

    // Keep the tail visible, leaving one column for the cursor.
    let visible = tail_to_width(value, inner.width.saturating_sub(1) as usize);
    let visible_width = display_width(visible) as u16;

    frame.render_widget(
        Paragraph::new(Span::styled(visible, Style::default().fg(TEXT))).block(block),
        area,
    );

    if focused && inner.width > 0 && inner.height > 0 {
        frame.set_cursor_position((inner.x + visible_width.min(inner.width - 1), inner.y));
    }
}

fn button_row(focus: DialogField, width: u16) -> Paragraph<'static> {
    let add = button(" Add ", focus == DialogField::AddButton);
    let cancel = button(" Cancel ", focus == DialogField::CancelButton);
    let used = add.width() + cancel.width();
    let gap = (width as usize).saturating_sub(used).max(1);
    Paragraph::new(Line::from(vec![add, Span::raw(" ".repeat(gap)), cancel]))
}

fn button(text: &'static str, focused: bool) -> Span<'static> {
    let style = if focused {
        Style::default()
            .fg(ACCENT)
            .bg(ACTIVE_HIGHLIGHT)
            .add_modifier(Modifier::BOLD | Modifier::REVERSED)
    } else {
        Style::default().fg(ACCENT)
    };
    Span::styled(format!("[{text}]"), style)
}
