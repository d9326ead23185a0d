use unicode_width::UnicodeWidthChar;
use unicode_width::UnicodeWidthStr;

use crate::types::TextAlign;

pub fn display_width(s: &str) -> usize {
    s.width()
}

pub fn char_width(c: char) -> usize {
    c.width().unwrap_or(0)
}

/// Offset from the left edge for a line of `line_width` in `available` cells.
pub fn align_offset(line_width: usize, available: usize, align: TextAlign) -> usize {
    match align {
        TextAlign::Left => 0,
        TextAlign::Center => available.saturating_sub(line_width) / 2,
        TextAlign::Right => available.saturating_sub(line_width),
    }
}
