//! The input form: a width-fitted text box with correctness hinting.
//!
//! The box is sized from the display width of the candidate text, so it
//! grows and shrinks as the user types — the terminal analog of the
//! original canvas-measured resize. Border color tracks the hint:
//! neutral when empty, ok on a pattern match, invalid otherwise.

use std::borrow::Cow;

use crate::app::App;
use crate::util::{display_width, Hint, ACCEPTED_HOST};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::render::centered_rect;

/// Spinner frames shown in the prompt while a request is in flight.
const SPINNER: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Render the editing view: title, input box, submit prompt.
pub(super) fn render(f: &mut Frame, app: &App, area: Rect) {
    // Vertical band: title(1) + gap(1) + input(3) + prompt(1)
    let band = centered_rect(area.width, 6, area);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
        ])
        .split(band);

    let title = Paragraph::new(format!("snip: shorten a {} URL", ACCEPTED_HOST))
        .style(app.theme.title)
        .alignment(Alignment::Center);
    f.render_widget(title, rows[0]);

    render_input_box(f, app, rows[2]);
    render_prompt(f, app, rows[3]);
}

/// Render the width-fitted input box with its hint-colored border.
fn render_input_box(f: &mut Frame, app: &App, row: Rect) {
    let border_style = match app.hint {
        Hint::Neutral => app.theme.input_neutral,
        Hint::Ok => app.theme.input_ok,
        Hint::Invalid => app.theme.input_invalid,
    };

    // +2 for the vertical borders
    let box_area = centered_rect(app.input_width as u16 + 2, 3, row);
    let block = Block::default().borders(Borders::ALL).border_style(border_style);
    let inner = block.inner(box_area);
    let visible = tail_to_width(&app.candidate, inner.width as usize);
    let cursor_col = inner.x + display_width(&visible).min(inner.width as usize) as u16;

    f.render_widget(Paragraph::new(visible.into_owned()).block(block), box_area);
    if inner.height > 0 {
        f.set_cursor_position((cursor_col, inner.y));
    }
}

/// Render the submit prompt: the call-to-action, grayed out until the
/// candidate is submittable and replaced by a spinner while in flight.
fn render_prompt(f: &mut Frame, app: &App, row: Rect) {
    let (text, style): (Cow<'static, str>, _) = if app.in_flight {
        (
            Cow::Owned(format!(
                "Shortening {}",
                SPINNER[app.spinner_frame % SPINNER.len()]
            )),
            app.theme.prompt_pending,
        )
    } else if app.submit_enabled() {
        (Cow::Borrowed("[Enter] Go"), app.theme.prompt_enabled)
    } else {
        (Cow::Borrowed("[Enter] Go"), app.theme.prompt_disabled)
    };

    let prompt = Paragraph::new(text).style(style).alignment(Alignment::Center);
    f.render_widget(prompt, row);
}

/// Keep the tail of the text visible once it outgrows the box, so the
/// cursor end is always on screen.
fn tail_to_width(s: &str, max_width: usize) -> Cow<'_, str> {
    if display_width(s) <= max_width {
        return Cow::Borrowed(s);
    }
    let mut start = s.len();
    let mut used = 0;
    for (idx, c) in s.char_indices().rev() {
        let w = unicode_width::UnicodeWidthChar::width(c).unwrap_or(0);
        if used + w > max_width {
            break;
        }
        used += w;
        start = idx;
    }
    Cow::Owned(s[start..].to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tail_fits_returns_borrowed() {
        let result = tail_to_width("short", 10);
        assert!(matches!(result, Cow::Borrowed(_)));
    }

    #[test]
    fn test_tail_keeps_end_of_text() {
        assert_eq!(tail_to_width("goldsborough.me/blog", 8), ".me/blog");
    }

    #[test]
    fn test_tail_width_aware_for_wide_chars() {
        // Each CJK char is 2 columns; only the last two fit in 5
        assert_eq!(tail_to_width("你好世界", 5), "世界");
    }
}
