//! Input handling for the TUI.
//!
//! Keystrokes are dispatched on the form state. While editing, printable
//! keys mutate the candidate URL and every mutation re-runs the
//! width/hint computation; Enter submits when the hint allows it. In the
//! submitted view the bindings are chrome: copy, open, reset, quit.

use crate::app::{App, AppEvent, FormState};
use crate::clipboard;
use crate::shorten::submit_shorten;
use crate::util::{validate_url_for_open, MAX_CANDIDATE_LENGTH};
use crossterm::event::{KeyCode, KeyModifiers};
use tokio::sync::mpsc;

use super::Action;

/// Main input dispatch function.
pub(super) fn handle_input(
    app: &mut App,
    code: KeyCode,
    modifiers: KeyModifiers,
    event_tx: &mpsc::Sender<AppEvent>,
) -> Action {
    // Ctrl+C quits from any state; while editing, plain letters are text.
    if modifiers.contains(KeyModifiers::CONTROL) && code == KeyCode::Char('c') {
        return Action::Quit;
    }

    match app.state {
        FormState::Editing => handle_editing_input(app, code, modifiers, event_tx),
        FormState::Submitted { .. } => handle_submitted_input(app, code),
    }
}

/// Handle input while typing a candidate URL.
///
/// Every printable key is text — chrome actions are reached through
/// control chords so the full URL character set stays typable.
fn handle_editing_input(
    app: &mut App,
    code: KeyCode,
    modifiers: KeyModifiers,
    event_tx: &mpsc::Sender<AppEvent>,
) -> Action {
    if modifiers.contains(KeyModifiers::CONTROL) {
        match code {
            KeyCode::Char('u') => {
                app.candidate.clear();
                app.on_input_changed();
            }
            KeyCode::Char('t') => {
                let name = app.cycle_theme();
                app.set_status(format!("Theme: {}", name));
            }
            _ => {}
        }
        return Action::Continue;
    }

    match code {
        KeyCode::Char(c) => {
            // Cap input length to prevent memory abuse from held keys
            if app.candidate.len() < MAX_CANDIDATE_LENGTH {
                app.candidate.push(c);
                app.on_input_changed();
            }
        }
        KeyCode::Backspace => {
            app.candidate.pop();
            app.on_input_changed();
        }
        KeyCode::Enter => {
            spawn_submit(app, event_tx);
        }
        KeyCode::Esc => {
            // First Esc clears the field; Esc on an empty field quits.
            if app.candidate.is_empty() {
                return Action::Quit;
            }
            app.candidate.clear();
            app.on_input_changed();
        }
        _ => {}
    }
    Action::Continue
}

/// Handle input in the submitted view.
fn handle_submitted_input(app: &mut App, code: KeyCode) -> Action {
    match code {
        // The back affordance: return to an empty form
        KeyCode::Enter | KeyCode::Esc | KeyCode::Backspace | KeyCode::Char('n') => {
            app.reset();
        }
        KeyCode::Char('c') | KeyCode::Char('y') => {
            copy_short_url(app);
        }
        KeyCode::Char('o') => {
            open_short_url(app);
        }
        KeyCode::Char('t') => {
            let name = app.cycle_theme();
            app.set_status(format!("Theme: {}", name));
        }
        KeyCode::Char('q') => return Action::Quit,
        _ => {}
    }
    Action::Continue
}

/// Spawn the shorten request as a background task.
///
/// The control is disabled while a request is outstanding; the spawned
/// task reports back over the event channel with the generation stamp it
/// was given, so a response landing after a reset is discarded.
fn spawn_submit(app: &mut App, event_tx: &mpsc::Sender<AppEvent>) {
    let Some(generation) = app.begin_submit() else {
        if app.in_flight {
            app.set_status("Request already in flight");
        } else {
            app.set_status(format!(
                "Enter a {} URL first",
                crate::util::ACCEPTED_HOST
            ));
        }
        return;
    };

    let client = app.http_client.clone();
    let endpoint = app.endpoint.clone();
    let candidate = app.candidate.clone();
    let timeout = app.timeout;
    let tx = event_tx.clone();

    tracing::debug!(candidate = %candidate, generation, "Spawning shorten request");

    app.submit_handle = Some(tokio::spawn(async move {
        let result = submit_shorten(&client, &endpoint, &candidate, timeout).await;
        if let Err(e) = tx
            .send(AppEvent::ShortenCompleted { generation, result })
            .await
        {
            tracing::warn!(error = %e, "Channel send failed (receiver dropped)");
        }
    }));
}

/// Copy the displayed short URL (with its `http://` prefix) to the system
/// clipboard and flip the marker to `[COPIED]`.
fn copy_short_url(app: &mut App) {
    let Some(short_url) = app.short_url().map(str::to_owned) else {
        return;
    };
    match clipboard::copy_short_url(&short_url) {
        Ok(copied) => {
            app.mark_copied();
            app.set_status(format!("Copied {} to clipboard", copied));
        }
        Err(e) => {
            app.report_error("Copy failed", &e);
        }
    }
}

/// Open the displayed short URL in the system browser, validating it
/// before it reaches the OS launcher.
fn open_short_url(app: &mut App) {
    let Some(short_url) = app.short_url().map(str::to_owned) else {
        return;
    };
    let target = clipboard::copyable_url(&short_url);
    match validate_url_for_open(&target) {
        Ok(_) => {
            if let Err(e) = open::that(&target) {
                app.report_error("Failed to open browser", &e);
            } else {
                app.set_status(format!("Opening {}...", target));
            }
        }
        Err(e) => {
            app.report_error("Refusing to open", &e);
        }
    }
}
