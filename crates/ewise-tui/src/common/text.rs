//! Text utilities for TUI rendering.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Display width in terminal columns.
pub fn display_width(text: &str) -> usize {
    text.width()
}

/// Truncates a string with ellipsis if it exceeds `max_width` columns.
pub fn truncate_with_ellipsis(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width <= 1 {
        return "…".to_string();
    }
    let mut truncated = String::new();
    let mut width = 0;
    for ch in text.chars() {
        let ch_width = ch.width().unwrap_or(0);
        if width + ch_width + 1 > max_width {
            break;
        }
        truncated.push(ch);
        width += ch_width;
    }
    truncated.push('…');
    truncated
}

/// Truncates or right-pads `text` to exactly `width` columns.
pub fn pad_to_width(text: &str, width: usize) -> String {
    let mut out = truncate_with_ellipsis(text, width);
    let current = out.width();
    if current < width {
        out.push_str(&" ".repeat(width - current));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_short_text_unchanged() {
        assert_eq!(truncate_with_ellipsis("Janet", 10), "Janet");
    }

    #[test]
    fn test_truncate_long_text() {
        assert_eq!(truncate_with_ellipsis("janet.weaver@reqres.in", 8), "janet.w…");
        assert_eq!(truncate_with_ellipsis("abc", 1), "…");
    }

    #[test]
    fn test_truncate_wide_chars() {
        // Each CJK char is 2 columns wide
        assert_eq!(truncate_with_ellipsis("日本語テキスト", 7), "日本語…");
    }

    #[test]
    fn test_pad_to_width() {
        assert_eq!(pad_to_width("Eve", 6), "Eve   ");
        assert_eq!(display_width(&pad_to_width("George Bluth", 6)), 6);
    }
}
