//! Header filtering before reflection.
//!
//! Transport-framing headers describe the connection the request arrived on,
//! not the request itself, so they are dropped from echoed output.

/// Header names (lowercase) never reflected back to the caller.
pub const FILTERED_HEADERS: [&str; 2] = ["host", "content-length"];

/// Returns true if the header should be removed. Case-insensitive.
pub fn is_filtered(name: &str) -> bool {
    FILTERED_HEADERS
        .iter()
        .any(|filtered| name.eq_ignore_ascii_case(filtered))
}

/// Copy the header pairs, excluding `host` and `content-length`.
///
/// Surviving names and values keep their case and order exactly as supplied.
pub fn filter_headers<I, K, V>(headers: I) -> Vec<(String, String)>
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>,
{
    headers
        .into_iter()
        .map(|(name, value)| (name.into(), value.into()))
        .filter(|(name, _)| !is_filtered(name))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_removes_framing_headers_in_any_case() {
        let filtered = filter_headers([
            ("Host", "example.com"),
            ("HOST", "example.com"),
            ("Content-Length", "12"),
            ("content-LENGTH", "12"),
            ("Accept", "*/*"),
        ]);
        assert_eq!(filtered, vec![("Accept".to_string(), "*/*".to_string())]);
    }

    #[test]
    fn test_preserves_case_and_order() {
        let filtered = filter_headers([
            ("X-User-ID", "U1"),
            ("host", "localhost"),
            ("content-type", "Application/JSON"),
        ]);
        assert_eq!(
            filtered,
            vec![
                ("X-User-ID".to_string(), "U1".to_string()),
                ("content-type".to_string(), "Application/JSON".to_string()),
            ]
        );
    }

    #[test]
    fn test_lookalike_names_survive() {
        let filtered = filter_headers([("X-Forwarded-Host", "a"), ("Content-Type", "b")]);
        assert_eq!(filtered.len(), 2);
    }

    #[test]
    fn test_empty_input() {
        let filtered = filter_headers(Vec::<(String, String)>::new());
        assert!(filtered.is_empty());
    }
}
