//! Utility functions for common operations.
//!
//! This module provides reusable utilities for:
//!
//! - **Acceptance pattern**: the fixed-host rule that decides which
//!   candidate URLs are submittable
//! - **Text measurement**: Unicode-aware display width, used to size the
//!   input box to the typed text
//! - **URL checking**: validation before URLs are handed to the system
//!   browser

mod pattern;
mod text;
mod url_check;

pub use pattern::{accepts, classify, Hint, ACCEPTED_HOST};
pub use text::{display_width, fitted_input_width, truncate_to_width, MIN_INPUT_WIDTH};
pub use url_check::validate_url_for_open;

/// Maximum candidate URL length accepted from the keyboard — shared by the
/// input handler and the request layer.
pub const MAX_CANDIDATE_LENGTH: usize = 2048;
