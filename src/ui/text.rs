//! Display-width helpers. Widths are terminal columns, so CJK and emoji
//! count as two.

use ratatui::text::Span;

const ELLIPSIS: char = '…';

pub fn display_width(text: &str) -> usize {
    Span::raw(text).width()
}

fn char_width(ch: char) -> usize {
    let mut buf = [0u8; 4];
    display_width(ch.encode_utf8(&mut buf))
}

/// Cuts `text` to at most `max` columns, ending in `…` when something was
/// dropped.
pub fn truncate_to_width(text: &str, max: usize) -> String {
    if display_width(text) <= max {
        return text.to_string();
    }
    if max == 0 {
        return String::new();
    }

    let budget = max - char_width(ELLIPSIS);
    let mut used = 0;
    let mut out = String::new();
    for ch in text.chars() {
        let width = char_width(ch);
        if used + width > budget {
            break;
        }
        used += width;
        out.push(ch);
    }
    out.push(ELLIPSIS);
    out
}

/// The longest suffix of `text` that fits in `max` columns.
pub fn tail_to_width(text: &str, max: usize) -> &str {
    let mut used = 0;
    let mut start = text.len();
    for (index, ch) in text.char_indices().rev() {
        let width = char_width(ch);
        if used + width > max {
            break;
        }
        used += width;
        start = index;
    }
    &text[start..]
}

/// `text` padded with spaces up to `width` columns.
pub fn pad_to_width(text: &str, width: usize) -> String {
    let padding = width.saturating_sub(display_width(text));
    format!("{}{}", text, " ".repeat(padding))
}
