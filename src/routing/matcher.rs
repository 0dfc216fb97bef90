//! Hostname and path matching logic.
//!
//! # Responsibilities
//! - Match the request host against a rule's hostname pattern
//! - Match the request path against a rule's compiled regex
//! - Combine conditions with AND semantics (see `Rule::matches`)
//!
//! # Design Decisions
//! - Host matching is case-sensitive, compared as received
//! - `*` is only a wildcard as the whole pattern or as a leading `*.` label
//! - Path regex is searched, not anchored
//! - Empty condition = always matches (wildcard)

use regex::Regex;

/// Returns true if the hostname pattern matches every host.
pub fn is_catch_all_hostname(pattern: &str) -> bool {
    pattern.is_empty() || pattern == "*"
}

/// Returns true if `host` satisfies the hostname `pattern`.
///
/// `*.example.com` requires at least one label in front of `.example.com`,
/// so it matches `a.example.com` but neither `example.com` nor `xexample.com`.
pub fn matches_hostname(pattern: &str, host: &str) -> bool {
    if is_catch_all_hostname(pattern) {
        return true;
    }
    if let Some(suffix) = pattern.strip_prefix('*') {
        if suffix.starts_with('.') {
            return host.ends_with(suffix);
        }
    }
    host == pattern
}

/// Returns true if `path` contains a match for `pattern`, or if there is no pattern.
pub fn matches_path(pattern: Option<&Regex>, path: &str) -> bool {
    pattern.map_or(true, |re| re.is_match(path))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catch_all_hostname() {
        assert!(is_catch_all_hostname(""));
        assert!(is_catch_all_hostname("*"));
        assert!(!is_catch_all_hostname("*.example.com"));
        assert!(!is_catch_all_hostname("example.com"));
    }

    #[test]
    fn test_exact_hostname() {
        assert!(matches_hostname("example.com", "example.com"));
        assert!(!matches_hostname("example.com", "foo.bar"));
        assert!(!matches_hostname("example.com", "www.example.com"));
        // No normalization
        assert!(!matches_hostname("example.com", "EXAMPLE.COM"));
    }

    #[test]
    fn test_wildcard_hostname() {
        assert!(matches_hostname("*", "example.com"));
        assert!(matches_hostname("", "anything.at.all"));

        assert!(matches_hostname("*.example.com", "adam.example.com"));
        assert!(matches_hostname("*.example.com", "adam.chalmers.example.com"));
        assert!(!matches_hostname("*.example.com", "example.com"));
        assert!(!matches_hostname("*.example.com", "xexample.com"));
        assert!(!matches_hostname("*.example.com", "tunnel.com"));
    }

    #[test]
    fn test_wildcard_outside_subdomain_is_literal() {
        assert!(!matches_hostname("*example.com", "www.example.com"));
        assert!(!matches_hostname("*example.com", "example.com"));
        assert!(matches_hostname("*example.com", "*example.com"));
        assert!(!matches_hostname("www.*.com", "www.example.com"));
    }

    #[test]
    fn test_path_matcher() {
        let re = Regex::new(r"/static/.*\.html").unwrap();
        assert!(matches_path(Some(&re), "/static/index.html"));
        // Unanchored search
        assert!(matches_path(Some(&re), "/prefix/static/index.html?x=1"));
        assert!(!matches_path(Some(&re), "/images/logo.png"));
        assert!(matches_path(None, "/anything"));
        assert!(matches_path(None, ""));
    }
}
