use crate::app::{App, FormState, StatusKind};
use ratatui::{layout::Rect, widgets::Paragraph, Frame};
use std::borrow::Cow;

/// Render the status bar.
///
/// Status messages (including every surfaced error) take priority; with
/// nothing to report it falls back to key hints for the current state.
pub(super) fn render(f: &mut Frame, app: &App, area: Rect) {
    // Status bar needs at least 1 char width to be meaningful
    if area.width < 1 || area.height < 1 {
        return;
    }

    // Use Cow to avoid allocations for static strings and borrowed messages
    let (text, style): (Cow<'_, str>, _) = if let Some(status) = &app.status {
        let style = match status.kind {
            StatusKind::Info => app.theme.status_bar,
            StatusKind::Error => app.theme.status_error,
        };
        (Cow::Borrowed(status.text.as_ref()), style)
    } else {
        let hints = match app.state {
            FormState::Editing => {
                "Type a URL | [Enter] shorten | [Esc] clear/quit | [Ctrl+T] theme"
            }
            FormState::Submitted { .. } => "[c]opy [o]pen [Enter] new [t]heme [q]uit",
        };
        (Cow::Borrowed(hints), app.theme.status_bar)
    };

    let paragraph = Paragraph::new(text).style(style);
    f.render_widget(paragraph, area);
}
