use serde::Deserialize;

/// Successful response from the shorten endpoint.
///
/// Wire format: `{ "shortUrl": "psag.cc/x1", "alreadyExisted": false }`.
/// Immutable once received; the app owns it for the lifetime of the
/// submitted view and discards it on reset.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortenOutcome {
    /// The short URL, host and hash, without a scheme.
    pub short_url: String,
    /// True when the backend already had a mapping for this URL.
    pub already_existed: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_wire_format() {
        let outcome: ShortenOutcome =
            serde_json::from_str(r#"{"shortUrl": "psag.cc/x1", "alreadyExisted": true}"#).unwrap();
        assert_eq!(outcome.short_url, "psag.cc/x1");
        assert!(outcome.already_existed);
    }

    #[test]
    fn test_missing_field_is_an_error() {
        let result = serde_json::from_str::<ShortenOutcome>(r#"{"shortUrl": "psag.cc/x1"}"#);
        assert!(result.is_err());
    }
}
