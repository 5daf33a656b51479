use crate::ui::theme::{ACCENT, GLOBAL_BORDER, MUTED_TEXT, TEXT};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub struct Header<'a> {
    title: &'a str,
    item_count: usize,
}

impl<'a> Header<'a> {
    pub fn new(title: &'a str, item_count: usize) -> Self {
        Self { title, item_count }
    }

    pub fn widget(&self) -> Paragraph<'a> {
        let text_style = Style::default().fg(TEXT).add_modifier(Modifier::BOLD);
        let separator_style = Style::default().fg(MUTED_TEXT);
        let button_style = Style::default().fg(ACCENT).add_modifier(Modifier::BOLD);
        let count = match self.item_count {
            1 => "1 item".to_string(),
            n => format!("{n} items"),
        };
        let line = Line::from(vec![
            Span::raw("  "),
            Span::styled(self.title, text_style),
            Span::styled("  │  ", separator_style),
            Span::styled(count, separator_style),
            Span::styled("  │  ", separator_style),
            Span::styled("[ + Add Item (a) ]", button_style),
        ]);

        Paragraph::new(line).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
