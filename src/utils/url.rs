//! Base URL handling for history-mode routing.
//!
//! Route paths are declared relative to the application root (`/json-formatter`).
//! When the app is served under a prefix (`/tools/`), browser URLs carry that
//! prefix and these helpers translate between the two forms.

use crate::config::BASE_URL;

/// Strip `base` from a browser pathname, yielding a route path.
///
/// Pathnames outside `base` are returned unchanged so that they fail to
/// match and surface as not found.
pub fn strip_base_with(base: &str, pathname: &str) -> String {
    let prefix = base.trim_end_matches('/');
    if prefix.is_empty() {
        return pathname.to_string();
    }

    match pathname.strip_prefix(prefix) {
        Some("") => "/".to_string(),
        Some(rest) if rest.starts_with('/') => rest.to_string(),
        _ => pathname.to_string(),
    }
}

/// Prefix a route path with `base`, yielding a browser URL path.
pub fn with_base_with(base: &str, path: &str) -> String {
    let prefix = base.trim_end_matches('/');
    format!("{}{}", prefix, path)
}

/// [`strip_base_with`] using the configured [`BASE_URL`].
pub fn strip_base(pathname: &str) -> String {
    strip_base_with(BASE_URL, pathname)
}

/// [`with_base_with`] using the configured [`BASE_URL`].
pub fn with_base(path: &str) -> String {
    with_base_with(BASE_URL, path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_base_is_identity() {
        assert_eq!(strip_base_with("/", "/json-formatter"), "/json-formatter");
        assert_eq!(strip_base_with("/", "/"), "/");
        assert_eq!(with_base_with("/", "/json-formatter"), "/json-formatter");
        assert_eq!(with_base_with("/", "/"), "/");
    }

    #[test]
    fn test_prefixed_base() {
        assert_eq!(strip_base_with("/tools/", "/tools/regex-tester"), "/regex-tester");
        assert_eq!(strip_base_with("/tools/", "/tools"), "/");
        assert_eq!(strip_base_with("/tools/", "/tools/"), "/");
        assert_eq!(with_base_with("/tools/", "/regex-tester"), "/tools/regex-tester");
        assert_eq!(with_base_with("/tools/", "/"), "/tools/");
    }

    #[test]
    fn test_outside_base_is_unchanged() {
        assert_eq!(strip_base_with("/tools/", "/other"), "/other");
        assert_eq!(strip_base_with("/tools/", "/toolsx/a"), "/toolsx/a");
    }

    #[test]
    fn test_configured_base_round_trip() {
        assert_eq!(strip_base(&with_base("/date-calculator")), "/date-calculator");
    }
}
