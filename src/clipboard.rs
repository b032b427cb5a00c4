//! Copy-to-clipboard affordance for the short URL.
//!
//! The backend returns the short URL without a scheme; the copied text gets
//! a fixed `http://` prefix so it pastes as a working link. Clipboard
//! failures are typed and surfaced to the user, never swallowed.

use thiserror::Error;

/// Scheme prepended to the displayed short URL when copying.
const COPY_SCHEME: &str = "http://";

#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("Clipboard unavailable: {0}")]
    Unavailable(arboard::Error),
    #[error("Clipboard write failed: {0}")]
    WriteFailed(arboard::Error),
}

/// Builds the text that a copy of `short_url` places on the clipboard.
pub fn copyable_url(short_url: &str) -> String {
    format!("{COPY_SCHEME}{short_url}")
}

/// Copies `http://` + the short URL to the system clipboard.
///
/// Returns the copied text for status display.
pub fn copy_short_url(short_url: &str) -> Result<String, ClipboardError> {
    let text = copyable_url(short_url);
    let mut clipboard = arboard::Clipboard::new().map_err(ClipboardError::Unavailable)?;
    clipboard
        .set_text(text.clone())
        .map_err(ClipboardError::WriteFailed)?;
    tracing::info!(text = %text, "Copied short URL to clipboard");
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_copyable_url_has_scheme_prefix() {
        assert_eq!(copyable_url("psag.cc/x1"), "http://psag.cc/x1");
    }
}
