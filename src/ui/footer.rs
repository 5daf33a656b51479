use crate::ui::text::display_width;
use crate::ui::theme::{GLOBAL_BORDER, TEXT};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");

const LIST_HINTS: &str = " a: Add │ ↑/↓: Move │ e: Edit │ d: Delete │ q: Quit";
const DIALOG_HINTS: &str = " Tab: Next field │ Enter: Confirm │ Esc: Cancel";

pub struct Footer {
    dialog_open: bool,
}

impl Footer {
    pub fn new(dialog_open: bool) -> Self {
        Self { dialog_open }
    }

    pub fn widget(&self, area: Rect) -> Paragraph<'static> {
        let hints = if self.dialog_open {
            DIALOG_HINTS
        } else {
            LIST_HINTS
        };
        let version = format!("v{} ", VERSION);

        let hints_width = display_width(hints);
        let version_width = display_width(&version);
        let content_width = area.width.saturating_sub(2) as usize;
        let padding = content_width
            .saturating_sub(hints_width)
            .saturating_sub(version_width);

        let text_style = Style::default().fg(TEXT).add_modifier(Modifier::DIM);

        let line = Line::from(vec![
            Span::styled(hints, text_style),
            Span::styled(" ".repeat(padding), text_style),
            Span::styled(version, text_style),
        ]);

        Paragraph::new(line).style(text_style).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
