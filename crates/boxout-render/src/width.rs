//! ANSI-aware width measurement and padding.
//!
//! All functions in this module ignore ANSI escape sequences when measuring:
//! the sequences are preserved in output but never count toward width. Width
//! is the number of Unicode code points left once escapes are stripped, so
//! `"é"` and `"\x1b[31me\x1b[0m"` both measure 1.

use console::strip_ansi_codes;

use crate::section::Align;

/// Returns the visible width of a string, ignoring ANSI escape codes.
///
/// # Example
///
/// ```rust
/// use boxout_render::visible_width;
///
/// assert_eq!(visible_width("hello"), 5);
/// assert_eq!(visible_width("\x1b[31mred\x1b[0m"), 3);
/// assert_eq!(visible_width("café"), 4);
/// ```
pub fn visible_width(s: &str) -> usize {
    strip_ansi_codes(s).chars().count()
}

/// Pads a string on the left (right-aligns) to reach the target width.
///
/// Strings already at or beyond `width` are returned unchanged.
///
/// ```rust
/// use boxout_render::pad_left;
///
/// assert_eq!(pad_left("42", 5), "   42");
/// assert_eq!(pad_left("hello", 3), "hello");
/// ```
pub fn pad_left(s: &str, width: usize) -> String {
    let fill = width.saturating_sub(visible_width(s));
    format!("{}{}", spaces(fill), s)
}

/// Pads a string on the right (left-aligns) to reach the target width.
///
/// ```rust
/// use boxout_render::pad_right;
///
/// assert_eq!(pad_right("42", 5), "42   ");
/// ```
pub fn pad_right(s: &str, width: usize) -> String {
    let fill = width.saturating_sub(visible_width(s));
    format!("{}{}", s, spaces(fill))
}

/// Pads a string on both sides (centers) to reach the target width.
///
/// When the remaining space is odd, the extra space goes after the content.
///
/// ```rust
/// use boxout_render::pad_center;
///
/// assert_eq!(pad_center("hi", 6), "  hi  ");
/// assert_eq!(pad_center("hi", 5), " hi  ");
/// ```
pub fn pad_center(s: &str, width: usize) -> String {
    let fill = width.saturating_sub(visible_width(s));
    let before = fill / 2;
    format!("{}{}{}", spaces(before), s, spaces(fill - before))
}

/// Aligns a string within a field of `width` columns.
pub fn align_to(s: &str, width: usize, align: Align) -> String {
    match align {
        Align::Left => pad_right(s, width),
        Align::Right => pad_left(s, width),
        Align::Center => pad_center(s, width),
    }
}

/// A run of `n` spaces.
pub(crate) fn spaces(n: usize) -> String {
    " ".repeat(n)
}

/// Splits content into lines after trimming exactly one trailing newline.
///
/// Empty content still yields a single empty line.
pub(crate) fn split_lines(content: &str) -> std::str::Split<'_, char> {
    content.strip_suffix('\n').unwrap_or(content).split('\n')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn visible_width_ascii() {
        assert_eq!(visible_width("hello"), 5);
        assert_eq!(visible_width(""), 0);
        assert_eq!(visible_width(" "), 1);
    }

    #[test]
    fn visible_width_ansi() {
        assert_eq!(visible_width("\x1b[31mred\x1b[0m"), 3);
        assert_eq!(visible_width("\x1b[1;32mbold green\x1b[0m"), 10);
        assert_eq!(visible_width("\x1b[38;5;196mcolor\x1b[0m"), 5);
    }

    #[test]
    fn visible_width_counts_code_points_not_bytes() {
        assert_eq!("héllo".len(), 6);
        assert_eq!(visible_width("héllo"), 5);
        assert_eq!(visible_width("─│┌"), 3);
    }

    #[test]
    fn pad_left_basic() {
        assert_eq!(pad_left("42", 5), "   42");
        assert_eq!(pad_left("", 3), "   ");
    }

    #[test]
    fn pad_right_ansi() {
        let styled = "\x1b[31mhi\x1b[0m";
        let result = pad_right(styled, 5);
        assert!(result.starts_with("\x1b[31m"));
        assert_eq!(visible_width(&result), 5);
    }

    #[test]
    fn pad_center_even_difference() {
        assert_eq!(pad_center("ab", 6), "  ab  ");
    }

    #[test]
    fn pad_center_odd_difference_biases_after() {
        assert_eq!(pad_center("ab", 5), " ab  ");
        assert_eq!(pad_center("a", 4), " a  ");
    }

    #[test]
    fn pad_never_truncates() {
        assert_eq!(pad_left("hello", 2), "hello");
        assert_eq!(pad_right("hello", 2), "hello");
        assert_eq!(pad_center("hello", 2), "hello");
    }

    #[test]
    fn align_to_dispatches() {
        assert_eq!(align_to("x", 3, Align::Left), "x  ");
        assert_eq!(align_to("x", 3, Align::Right), "  x");
        assert_eq!(align_to("x", 3, Align::Center), " x ");
    }

    #[test]
    fn split_lines_trims_one_trailing_newline() {
        assert_eq!(split_lines("a\nb\n").collect::<Vec<_>>(), vec!["a", "b"]);
        assert_eq!(
            split_lines("a\n\n").collect::<Vec<_>>(),
            vec!["a", ""]
        );
        assert_eq!(split_lines("").collect::<Vec<_>>(), vec![""]);
    }
}
