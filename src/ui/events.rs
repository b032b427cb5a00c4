//! Application event handling.
//!
//! The form lifecycle has one background event: the shorten request
//! resolving. The generation check and the Editing/Submitted transition
//! both live on `App`; this module is the channel-to-state glue.

use crate::app::{App, AppEvent};

/// Apply a background task event to the application state.
pub(super) fn handle_app_event(app: &mut App, event: AppEvent) {
    match event {
        AppEvent::ShortenCompleted { generation, result } => {
            app.apply_shorten_result(generation, result);
        }
    }
}
