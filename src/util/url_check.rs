use thiserror::Error;
use url::Url;

/// Errors from validating a URL before handing it to the system browser.
#[derive(Error, Debug)]
pub enum OpenUrlError {
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
    #[error("Unsupported scheme: {0} (only http/https allowed)")]
    UnsupportedScheme(String),
}

/// Validates a URL string before passing it to `open::that`.
///
/// The short URL comes back from the network, so it is checked here rather
/// than trusted: it must parse and must be plain http/https. Rejecting
/// anything else keeps shell-adjacent schemes (`file://`, `javascript:`)
/// away from the OS launcher.
pub fn validate_url_for_open(url_str: &str) -> Result<Url, OpenUrlError> {
    let url = Url::parse(url_str)?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        scheme => Err(OpenUrlError::UnsupportedScheme(scheme.to_owned())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_and_https_allowed() {
        assert!(validate_url_for_open("http://psag.cc/x1").is_ok());
        assert!(validate_url_for_open("https://goldsborough.me/blog").is_ok());
    }

    #[test]
    fn test_other_schemes_rejected() {
        assert!(matches!(
            validate_url_for_open("file:///etc/passwd"),
            Err(OpenUrlError::UnsupportedScheme(_))
        ));
        assert!(validate_url_for_open("javascript:alert(1)").is_err());
    }

    #[test]
    fn test_garbage_rejected() {
        assert!(matches!(
            validate_url_for_open("not a url"),
            Err(OpenUrlError::InvalidUrl(_))
        ));
    }
}
