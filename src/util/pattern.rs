use std::sync::LazyLock;

use regex::Regex;

/// The host this client shortens URLs for. Anything else is rejected before
/// a request is ever made.
pub const ACCEPTED_HOST: &str = "goldsborough.me";

/// Acceptance pattern for candidate URLs: optional `http://` scheme,
/// optional `www.`, the fixed host, then an optional path and fragment
/// drawn from a conservative character set. Case-insensitive.
static URL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(http://)?(www\.)?goldsborough\.me((/[/\w,+-]*?)(#[\w,+-]*)?)?$")
        .expect("acceptance pattern must compile")
});

/// Correctness hint for the candidate text, driving the input styling and
/// submit enablement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hint {
    /// Empty input: no styling, submission disabled.
    Neutral,
    /// Pattern matches: ok styling, submission enabled.
    Ok,
    /// Non-empty but not matching: invalid styling, submission disabled.
    Invalid,
}

impl Hint {
    /// Whether this hint permits submission.
    pub fn submittable(self) -> bool {
        matches!(self, Hint::Ok)
    }
}

/// Tests a candidate against the acceptance pattern.
///
/// Never fails; any string is either a match or not.
pub fn accepts(candidate: &str) -> bool {
    URL_PATTERN.is_match(candidate)
}

/// Classifies candidate text into a [`Hint`].
pub fn classify(candidate: &str) -> Hint {
    if candidate.is_empty() {
        Hint::Neutral
    } else if accepts(candidate) {
        Hint::Ok
    } else {
        Hint::Invalid
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_bare_host_accepted() {
        assert!(accepts("goldsborough.me"));
        assert!(accepts("www.goldsborough.me"));
        assert!(accepts("http://goldsborough.me"));
        assert!(accepts("http://www.goldsborough.me"));
    }

    #[test]
    fn test_case_insensitive() {
        assert!(accepts("GOLDSBOROUGH.ME"));
        assert!(accepts("HTTP://Goldsborough.Me/Blog"));
    }

    #[test]
    fn test_paths_and_fragments_accepted() {
        assert!(accepts("goldsborough.me/"));
        assert!(accepts("goldsborough.me/blog/rust-post"));
        assert!(accepts("goldsborough.me/a,b+c-d_e"));
        assert!(accepts("goldsborough.me/blog#section-2"));
    }

    #[test]
    fn test_other_hosts_rejected() {
        assert!(!accepts("example.com"));
        assert!(!accepts("goldsborough.me.evil.com"));
        assert!(!accepts("notgoldsborough.me"));
    }

    #[test]
    fn test_https_scheme_rejected() {
        // The pattern admits only the bare http:// prefix
        assert!(!accepts("https://goldsborough.me"));
    }

    #[test]
    fn test_query_and_spaces_rejected() {
        assert!(!accepts("goldsborough.me/blog?page=2"));
        assert!(!accepts("goldsborough.me/some page"));
    }

    #[test]
    fn test_fragment_requires_path() {
        // A fragment only follows a path segment, as in the source pattern
        assert!(!accepts("goldsborough.me#top"));
        assert!(accepts("goldsborough.me/#top"));
    }

    #[test]
    fn test_classify_tristate() {
        assert_eq!(classify(""), Hint::Neutral);
        assert_eq!(classify("goldsborough.me/blog"), Hint::Ok);
        assert_eq!(classify("nope"), Hint::Invalid);
        assert!(!Hint::Neutral.submittable());
        assert!(Hint::Ok.submittable());
        assert!(!Hint::Invalid.submittable());
    }

    proptest! {
        /// Any path built from the allowed character set is accepted.
        #[test]
        fn prop_allowed_paths_accepted(path in "[a-zA-Z0-9_,+/-]{0,40}") {
            let candidate = format!("goldsborough.me/{path}");
            prop_assert!(accepts(&candidate));
        }

        /// Foreign hosts never match, whatever the path looks like.
        #[test]
        fn prop_foreign_hosts_rejected(host in "[a-z]{1,12}\\.(com|org|net)", path in "[a-z0-9/]{0,20}") {
            let candidate = format!("{host}/{path}");
            prop_assert!(!accepts(&candidate));
        }

        /// Classification never panics on arbitrary input.
        #[test]
        fn prop_classify_total(input in ".*") {
            let _ = classify(&input);
        }
    }
}
