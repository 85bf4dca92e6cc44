//! Terminal display helpers for the candidate listing.

use terminal_size::terminal_size;

/// Default width when terminal size cannot be determined.
pub const DEFAULT_WIDTH: usize = 100;

/// Get the current terminal width in characters.
pub fn terminal_width() -> usize {
    terminal_size()
        .map(|(w, _)| w.0 as usize)
        .unwrap_or(DEFAULT_WIDTH)
}

/// Truncate text to fit within `max_width` display columns, appending an
/// ellipsis when truncation occurred. Uses unicode-width so wide characters
/// count for their real column width.
pub fn truncate_with_ellipsis(text: &str, max_width: usize) -> String {
    if max_width == 0 {
        return String::new();
    }

    let char_widths: Vec<(char, usize)> = text
        .chars()
        .map(|c| (c, unicode_width::UnicodeWidthChar::width(c).unwrap_or(1)))
        .collect();

    let total_width: usize = char_widths.iter().map(|(_, w)| *w).sum();
    if total_width <= max_width {
        return text.to_string();
    }

    // Reserve 3 columns for the ellipsis
    let mut current_width = 0;
    let mut end_idx = 0;
    for (i, (_, w)) in char_widths.iter().enumerate() {
        if current_width + w > max_width.saturating_sub(3) {
            break;
        }
        current_width += w;
        end_idx = i + 1;
    }

    if end_idx == 0 {
        return "...".to_string();
    }

    let truncated: String = char_widths[..end_idx].iter().map(|(c, _)| *c).collect();
    format!("{}...", truncated)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_with_ellipsis_basic() {
        assert_eq!(truncate_with_ellipsis("Hello", 10), "Hello");
        assert_eq!(truncate_with_ellipsis("Hello World", 8), "Hello...");
    }

    #[test]
    fn test_truncate_with_ellipsis_edge_widths() {
        assert_eq!(truncate_with_ellipsis("", 10), "");
        assert_eq!(truncate_with_ellipsis("Hello", 0), "");
        assert_eq!(truncate_with_ellipsis("Hello", 1), "...");
    }

    #[test]
    fn test_truncate_counts_wide_characters() {
        // Each CJK character takes two columns
        assert_eq!(truncate_with_ellipsis("引用引用引用", 12), "引用引用引用");
        assert_eq!(truncate_with_ellipsis("引用引用引用", 8), "引用...");
    }
}
