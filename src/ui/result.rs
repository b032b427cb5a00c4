//! The result view: the short URL, its marker, and the follow-up actions.
//!
//! Shown only in the submitted state; the input form is gone for the
//! duration. The marker next to the URL starts as `[NEW]` (suppressed when
//! the backend already knew the URL) and flips to `[COPIED]` after a copy.

use crate::app::{App, FormState, Marker};
use crate::util::{display_width, truncate_to_width};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::render::centered_rect;

/// Render the submitted view.
pub(super) fn render(f: &mut Frame, app: &App, area: Rect) {
    let FormState::Submitted { outcome, marker } = &app.state else {
        return;
    };

    // Vertical band: box(3) + gap(1) + actions(1)
    let band = centered_rect(area.width, 5, area);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(band);

    render_short_url_box(f, app, &outcome.short_url, *marker, rows[0]);

    let actions = Paragraph::new("[c]opy  [o]pen  [Enter] shorten another  [q]uit")
        .style(app.theme.prompt_disabled)
        .alignment(Alignment::Center);
    f.render_widget(actions, rows[2]);
}

/// Render the bordered box holding the short URL and its marker.
fn render_short_url_box(f: &mut Frame, app: &App, short_url: &str, marker: Marker, row: Rect) {
    let marker_style = match marker {
        Marker::Copied => app.theme.marker_copied,
        Marker::New | Marker::Existing => app.theme.marker_new,
    };

    let marker_width = marker.label().map_or(0, |l| l.len() + 1);
    let max_url_width = (row.width as usize)
        .saturating_sub(4) // borders + padding
        .saturating_sub(marker_width);
    let shown_url = truncate_to_width(short_url, max_url_width);
    let content_width = display_width(&shown_url) + marker_width;

    let mut spans = vec![Span::styled(shown_url.into_owned(), app.theme.short_url)];
    if let Some(label) = marker.label() {
        spans.push(Span::raw(" "));
        spans.push(Span::styled(label, marker_style));
    }
    let line = Line::from(spans);

    let box_width = content_width as u16 + 4;
    let box_area = centered_rect(box_width.max(20), 3, row);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(app.theme.result_border)
        .title("shortened");

    f.render_widget(
        Paragraph::new(line).alignment(Alignment::Center).block(block),
        box_area,
    );
}
