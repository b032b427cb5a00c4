//! Central application state: the shorten-form lifecycle.
//!
//! The app is a two-state machine. `Editing` owns the candidate URL being
//! typed; `Submitted` owns the outcome of a successful shorten call. The
//! two are mutually exclusive — exactly one of the input form or the
//! result box is ever rendered. The machine is cyclic and user-driven:
//! submit moves forward, reset moves back, there is no terminal state.

use std::borrow::Cow;
use std::time::Duration;

use anyhow::Result;
use tokio::time::Instant;

use crate::shorten::{ShortenError, ShortenOutcome};
use crate::theme::{ColorPalette, ThemeVariant};
use crate::util::{self, Hint};

/// How long a status message stays visible.
const STATUS_TTL: Duration = Duration::from_secs(3);

/// Horizontal chrome around the input box (borders plus centering margin).
/// The box never grows wider than the viewport minus this.
const INPUT_CHROME: usize = 8;

/// Marker shown next to the short URL in the result view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    /// Fresh mapping: `[NEW]` is shown.
    New,
    /// The backend already knew this URL: no marker.
    Existing,
    /// The short URL was just copied: `[COPIED]`.
    Copied,
}

impl Marker {
    /// The marker text, or None when nothing should be shown.
    pub fn label(self) -> Option<&'static str> {
        match self {
            Marker::New => Some("[NEW]"),
            Marker::Existing => None,
            Marker::Copied => Some("[COPIED]"),
        }
    }
}

/// The form lifecycle state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormState {
    /// Typing a candidate URL.
    Editing,
    /// A shorten call succeeded; showing its outcome.
    Submitted {
        outcome: ShortenOutcome,
        marker: Marker,
    },
}

/// Severity of a status message, for styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Info,
    Error,
}

/// A transient message in the status bar.
pub struct StatusMessage {
    pub text: Cow<'static, str>,
    pub kind: StatusKind,
    posted: Instant,
}

/// Events from background tasks.
pub enum AppEvent {
    /// The shorten request resolved.
    ///
    /// `generation` is the counter value stamped when the request was
    /// spawned; a mismatch means the user reset (or re-submitted) in the
    /// meantime and the result must be discarded.
    ShortenCompleted {
        generation: u64,
        result: Result<ShortenOutcome, ShortenError>,
    },
}

/// Central application state.
pub struct App {
    pub http_client: reqwest::Client,
    /// Base URL of the shorten service.
    pub endpoint: String,
    /// Per-request timeout.
    pub timeout: Duration,

    // Theme
    pub theme_variant: ThemeVariant,
    pub theme: ColorPalette,

    // Form state machine
    pub state: FormState,
    /// The raw text currently in the input field. Mutated per keystroke,
    /// never persisted.
    pub candidate: String,
    /// Correctness hint for the candidate; drives styling and submit
    /// enablement.
    pub hint: Hint,
    /// Inner width of the input box, recomputed on every input change so
    /// the box grows and shrinks with the text.
    pub input_width: usize,
    /// Last known terminal width, updated during rendering.
    viewport_width: usize,

    // In-flight request tracking
    /// True while a shorten request is outstanding; submission is disabled
    /// for the duration.
    pub in_flight: bool,
    /// Stamp for the current request; bumped on every spawn and on reset
    /// so stale responses are discarded.
    pub submit_generation: u64,
    /// Handle to the in-flight request task, aborted on reset and drop.
    pub submit_handle: Option<tokio::task::JoinHandle<()>>,

    // Chrome
    pub status: Option<StatusMessage>,
    /// Current frame of the in-flight spinner animation, advanced by the
    /// tick handler while a request is outstanding.
    pub spinner_frame: usize,
    pub needs_redraw: bool,
}

impl App {
    pub fn new(endpoint: String, timeout: Duration, theme_variant: ThemeVariant) -> Result<Self> {
        let http_client = reqwest::Client::builder()
            .pool_max_idle_per_host(2)
            .pool_idle_timeout(Duration::from_secs(30))
            .tcp_keepalive(Duration::from_secs(60))
            .timeout(timeout)
            .build()?;

        let mut app = Self {
            http_client,
            endpoint,
            timeout,
            theme_variant,
            theme: theme_variant.palette(),
            state: FormState::Editing,
            candidate: String::new(),
            hint: Hint::Neutral,
            input_width: util::MIN_INPUT_WIDTH,
            viewport_width: 80,
            in_flight: false,
            submit_generation: 0,
            submit_handle: None,
            status: None,
            spinner_frame: 0,
            needs_redraw: true,
        };
        app.on_input_changed();
        Ok(app)
    }

    /// Recompute the input width and the correctness hint for the current
    /// candidate text. Called after every mutation of `candidate` and on
    /// viewport resize. Accepts any string; there is no error path.
    pub fn on_input_changed(&mut self) {
        self.hint = util::classify(&self.candidate);
        let budget = self.viewport_width.saturating_sub(INPUT_CHROME);
        self.input_width = util::fitted_input_width(&self.candidate, budget);
        self.needs_redraw = true;
    }

    /// Record the terminal width seen by the renderer, re-fitting the input
    /// box if it changed.
    pub fn set_viewport_width(&mut self, width: usize) {
        if self.viewport_width != width {
            self.viewport_width = width;
            self.on_input_changed();
        }
    }

    /// Whether the submit control is currently enabled: pattern match,
    /// non-empty text, nothing in flight, and not already submitted.
    pub fn submit_enabled(&self) -> bool {
        matches!(self.state, FormState::Editing) && self.hint.submittable() && !self.in_flight
    }

    /// Claim a submission slot: marks the request in flight and returns the
    /// generation to stamp on the response event. Returns None when
    /// submission is not currently allowed (invalid text, request already
    /// outstanding, or not in the editing state).
    pub fn begin_submit(&mut self) -> Option<u64> {
        if !self.submit_enabled() {
            return None;
        }
        self.in_flight = true;
        self.submit_generation = self.submit_generation.wrapping_add(1);
        self.needs_redraw = true;
        Some(self.submit_generation)
    }

    /// Apply the result of a shorten request.
    ///
    /// Stale generations are discarded without any state change. A success
    /// transitions `Editing → Submitted`; a failure stays in `Editing` and
    /// surfaces the error in the status line.
    pub fn apply_shorten_result(
        &mut self,
        generation: u64,
        result: Result<ShortenOutcome, ShortenError>,
    ) {
        if generation != self.submit_generation {
            tracing::debug!(
                generation,
                current = self.submit_generation,
                "Discarding stale shorten response"
            );
            return;
        }
        self.in_flight = false;
        self.submit_handle = None;
        self.needs_redraw = true;

        match result {
            Ok(outcome) => {
                let marker = if outcome.already_existed {
                    Marker::Existing
                } else {
                    Marker::New
                };
                tracing::info!(short_url = %outcome.short_url, "Entering submitted state");
                self.state = FormState::Submitted { outcome, marker };
            }
            Err(e) => {
                self.report_error("Shorten failed", &e);
            }
        }
    }

    /// Transition `Submitted → Editing`: clear the candidate, restore the
    /// call-to-action, and re-run the width/hint computation for the empty
    /// string. Also aborts anything still in flight so a late response
    /// cannot resurrect the discarded result.
    pub fn reset(&mut self) {
        if let Some(handle) = self.submit_handle.take() {
            handle.abort();
            tracing::debug!("Aborted in-flight shorten request on reset");
        }
        self.in_flight = false;
        self.submit_generation = self.submit_generation.wrapping_add(1);
        self.state = FormState::Editing;
        self.candidate.clear();
        self.on_input_changed();
    }

    /// Flip the marker to `[COPIED]` after a successful clipboard copy.
    pub fn mark_copied(&mut self) {
        if let FormState::Submitted { marker, .. } = &mut self.state {
            *marker = Marker::Copied;
            self.needs_redraw = true;
        }
    }

    /// The short URL currently on display, if any.
    pub fn short_url(&self) -> Option<&str> {
        match &self.state {
            FormState::Submitted { outcome, .. } => Some(&outcome.short_url),
            FormState::Editing => None,
        }
    }

    /// Set an informational status message (auto-expires).
    pub fn set_status(&mut self, msg: impl Into<Cow<'static, str>>) {
        self.status = Some(StatusMessage {
            text: msg.into(),
            kind: StatusKind::Info,
            posted: Instant::now(),
        });
        self.needs_redraw = true;
    }

    /// Single error-reporting seam: every failure branch (network, status,
    /// parse, clipboard, browser launch) lands here, which both logs and
    /// posts a visible status message.
    pub fn report_error(&mut self, context: &str, error: &dyn std::fmt::Display) {
        tracing::error!(context, error = %error, "Operation failed");
        self.status = Some(StatusMessage {
            text: Cow::Owned(format!("{context}: {error}")),
            kind: StatusKind::Error,
            posted: Instant::now(),
        });
        self.needs_redraw = true;
    }

    /// Clear the status message once it has outlived its TTL.
    /// Returns true if a message was actually cleared.
    pub fn clear_expired_status(&mut self) -> bool {
        if let Some(status) = &self.status {
            if status.posted.elapsed() >= STATUS_TTL {
                self.status = None;
                return true;
            }
        }
        false
    }

    /// Switch to a different theme variant at runtime.
    pub fn set_theme(&mut self, variant: ThemeVariant) {
        self.theme_variant = variant;
        self.theme = variant.palette();
        self.needs_redraw = true;
    }

    /// Cycle to the next theme variant, returning its name for status
    /// display.
    pub fn cycle_theme(&mut self) -> &'static str {
        let next = self.theme_variant.next();
        self.set_theme(next);
        next.name()
    }
}

/// Abort the in-flight request task on App drop so it does not outlive the
/// event loop.
impl Drop for App {
    fn drop(&mut self) {
        if let Some(handle) = self.submit_handle.take() {
            handle.abort();
            tracing::debug!("Aborted shorten request on App drop");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_ENDPOINT;
    use tokio::time::{self, Duration};

    fn test_app() -> App {
        App::new(
            DEFAULT_ENDPOINT.to_string(),
            Duration::from_secs(5),
            ThemeVariant::Dark,
        )
        .unwrap()
    }

    fn ok_outcome(short_url: &str, already_existed: bool) -> ShortenOutcome {
        ShortenOutcome {
            short_url: short_url.to_string(),
            already_existed,
        }
    }

    // Input change: hint and enablement

    #[tokio::test]
    async fn test_empty_input_neutral_and_disabled() {
        let mut app = test_app();
        app.candidate.clear();
        app.on_input_changed();
        assert_eq!(app.hint, Hint::Neutral);
        assert!(!app.submit_enabled());
    }

    #[tokio::test]
    async fn test_matching_input_enables_submit() {
        let mut app = test_app();
        app.candidate = "goldsborough.me/blog".to_string();
        app.on_input_changed();
        assert_eq!(app.hint, Hint::Ok);
        assert!(app.submit_enabled());
    }

    #[tokio::test]
    async fn test_non_matching_input_disables_submit() {
        let mut app = test_app();
        app.candidate = "example.com".to_string();
        app.on_input_changed();
        assert_eq!(app.hint, Hint::Invalid);
        assert!(!app.submit_enabled());
    }

    #[tokio::test]
    async fn test_input_width_tracks_text() {
        let mut app = test_app();
        app.candidate = "goldsborough.me".to_string();
        app.on_input_changed();
        let short = app.input_width;
        app.candidate = "goldsborough.me/a/much/longer/path/segment".to_string();
        app.on_input_changed();
        assert!(app.input_width > short);
    }

    // Submission lifecycle

    #[tokio::test]
    async fn test_begin_submit_claims_one_slot() {
        let mut app = test_app();
        app.candidate = "goldsborough.me".to_string();
        app.on_input_changed();

        let generation = app.begin_submit();
        assert!(generation.is_some());
        assert!(app.in_flight);
        // Control is disabled while the request is outstanding
        assert!(app.begin_submit().is_none());
    }

    #[tokio::test]
    async fn test_success_transitions_to_submitted_with_new_marker() {
        let mut app = test_app();
        app.candidate = "goldsborough.me".to_string();
        app.on_input_changed();
        let generation = app.begin_submit().unwrap();

        app.apply_shorten_result(generation, Ok(ok_outcome("goldsborough.me/x1", false)));

        assert_eq!(app.short_url(), Some("goldsborough.me/x1"));
        match &app.state {
            FormState::Submitted { marker, .. } => {
                assert_eq!(marker.label(), Some("[NEW]"));
            }
            FormState::Editing => panic!("expected Submitted state"),
        }
    }

    #[tokio::test]
    async fn test_already_existed_hides_marker() {
        let mut app = test_app();
        app.candidate = "goldsborough.me".to_string();
        app.on_input_changed();
        let generation = app.begin_submit().unwrap();

        app.apply_shorten_result(generation, Ok(ok_outcome("goldsborough.me/x1", true)));

        match &app.state {
            FormState::Submitted { marker, .. } => assert_eq!(marker.label(), None),
            FormState::Editing => panic!("expected Submitted state"),
        }
    }

    #[tokio::test]
    async fn test_failure_stays_editing_and_reports() {
        let mut app = test_app();
        app.candidate = "goldsborough.me".to_string();
        app.on_input_changed();
        let generation = app.begin_submit().unwrap();

        app.apply_shorten_result(generation, Err(ShortenError::HttpStatus(500)));

        assert_eq!(app.state, FormState::Editing);
        assert!(!app.in_flight);
        let status = app.status.as_ref().expect("error must be visible");
        assert_eq!(status.kind, StatusKind::Error);
        assert!(status.text.contains("500"));
    }

    #[tokio::test]
    async fn test_stale_generation_discarded() {
        let mut app = test_app();
        app.candidate = "goldsborough.me".to_string();
        app.on_input_changed();
        let generation = app.begin_submit().unwrap();
        app.reset(); // bumps the generation

        app.apply_shorten_result(generation, Ok(ok_outcome("goldsborough.me/x1", false)));

        assert_eq!(app.state, FormState::Editing);
        assert!(app.short_url().is_none());
    }

    // Reset

    #[tokio::test]
    async fn test_reset_restores_editing() {
        let mut app = test_app();
        app.candidate = "goldsborough.me".to_string();
        app.on_input_changed();
        let generation = app.begin_submit().unwrap();
        app.apply_shorten_result(generation, Ok(ok_outcome("goldsborough.me/x1", false)));

        app.reset();

        assert_eq!(app.state, FormState::Editing);
        assert!(app.candidate.is_empty());
        assert_eq!(app.hint, Hint::Neutral);
        assert!(!app.submit_enabled());
    }

    // Copy marker

    #[tokio::test]
    async fn test_mark_copied_flips_marker() {
        let mut app = test_app();
        app.candidate = "goldsborough.me".to_string();
        app.on_input_changed();
        let generation = app.begin_submit().unwrap();
        app.apply_shorten_result(generation, Ok(ok_outcome("goldsborough.me/x1", true)));

        app.mark_copied();

        match &app.state {
            FormState::Submitted { marker, .. } => {
                assert_eq!(marker.label(), Some("[COPIED]"));
            }
            FormState::Editing => panic!("expected Submitted state"),
        }
    }

    #[tokio::test]
    async fn test_mark_copied_noop_while_editing() {
        let mut app = test_app();
        app.mark_copied();
        assert_eq!(app.state, FormState::Editing);
    }

    // Status expiry with time control

    #[tokio::test]
    async fn test_status_expires_after_ttl() {
        let mut app = test_app();
        time::pause();
        app.set_status("Test message");
        assert!(app.status.is_some());

        time::advance(Duration::from_secs(2)).await;
        app.clear_expired_status();
        assert!(app.status.is_some()); // Still present at 2s

        time::advance(Duration::from_secs(2)).await;
        assert!(app.clear_expired_status());
        assert!(app.status.is_none()); // Expired after 3s
    }
}
