use std::borrow::Cow;

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Calculates the display width of a string in terminal columns.
///
/// This is the terminal analog of measuring rendered text: the input box is
/// sized from this value so it grows and shrinks with the candidate URL.
/// Handles Unicode correctly (CJK and emoji are typically 2 columns wide,
/// combining marks are 0).
pub fn display_width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

/// Columns of padding inside the input box (cursor cell plus breathing room).
const INPUT_PADDING: usize = 3;

/// Minimum inner width of the input box, so an empty field is still visible.
pub const MIN_INPUT_WIDTH: usize = 24;

/// Computes the inner width of the input box for the given candidate text.
///
/// The box fits the text plus padding, never shrinks below
/// [`MIN_INPUT_WIDTH`], and never exceeds `max_width` (the space the
/// viewport can spare). `max_width` below the minimum wins; a cramped
/// terminal beats an overflowing widget.
pub fn fitted_input_width(text: &str, max_width: usize) -> usize {
    let wanted = display_width(text).saturating_add(INPUT_PADDING);
    wanted.max(MIN_INPUT_WIDTH).min(max_width)
}

/// Ellipsis used when text must be cut to fit a width.
const ELLIPSIS: &str = "...";

/// Truncates a string to fit within a maximum display width, appending an
/// ellipsis when text was cut. Width-aware, so CJK text never overflows the
/// column budget; returns `Cow::Borrowed` when the string already fits.
///
/// Widths of 3 or less get plain character truncation without the ellipsis;
/// there is no room for both.
pub fn truncate_to_width(s: &str, max_width: usize) -> Cow<'_, str> {
    if display_width(s) <= max_width {
        return Cow::Borrowed(s);
    }

    let ellipsis_width = display_width(ELLIPSIS);
    let (budget, suffix) = if max_width > ellipsis_width {
        (max_width - ellipsis_width, ELLIPSIS)
    } else {
        (max_width, "")
    };

    let mut used = 0;
    let mut end = 0;
    for (idx, c) in s.char_indices() {
        let w = UnicodeWidthChar::width(c).unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        end = idx + c.len_utf8();
    }
    Cow::Owned(format!("{}{}", &s[..end], suffix))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_width_ascii() {
        assert_eq!(display_width("goldsborough.me/blog"), 20);
        assert_eq!(display_width(""), 0);
    }

    #[test]
    fn test_display_width_wide_chars() {
        // CJK characters occupy two columns each
        assert_eq!(display_width("你好"), 4);
    }

    #[test]
    fn test_fitted_width_grows_with_text() {
        let short = fitted_input_width("goldsborough.me", 120);
        let long = fitted_input_width("goldsborough.me/a/much/longer/path", 120);
        assert!(long > short);
    }

    #[test]
    fn test_fitted_width_has_floor() {
        assert_eq!(fitted_input_width("", 120), MIN_INPUT_WIDTH);
        assert_eq!(fitted_input_width("x", 120), MIN_INPUT_WIDTH);
    }

    #[test]
    fn test_fitted_width_clamped_to_viewport() {
        let url = "goldsborough.me/".repeat(20);
        assert_eq!(fitted_input_width(&url, 40), 40);
        // A viewport narrower than the floor still wins
        assert_eq!(fitted_input_width("", 10), 10);
    }

    #[test]
    fn test_truncate_fits_returns_borrowed() {
        let result = truncate_to_width("short", 10);
        assert!(matches!(result, Cow::Borrowed(_)));
        assert_eq!(result, "short");
    }

    #[test]
    fn test_truncate_appends_ellipsis() {
        assert_eq!(truncate_to_width("goldsborough.me/blog", 10), "goldsbo...");
    }

    #[test]
    fn test_truncate_narrow_widths() {
        assert_eq!(truncate_to_width("goldsborough", 3), "gol");
        assert_eq!(truncate_to_width("goldsborough", 0), "");
    }

    #[test]
    fn test_truncate_respects_wide_char_boundaries() {
        // "你" is 2 columns; budget 4 minus ellipsis leaves 1, too narrow for it
        assert_eq!(truncate_to_width("你好世界", 4), "...");
        assert_eq!(truncate_to_width("你好世界", 5), "你...");
    }
}
