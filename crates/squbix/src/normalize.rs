//! Whitespace normalization applied to every finished statement.

use std::sync::OnceLock;

use regex::Regex;

fn whitespace_run() -> &'static Regex {
    static WHITESPACE_RE: OnceLock<Regex> = OnceLock::new();
    // ASCII whitespace only; non-breaking and other Unicode spaces inside
    // string literals are data and pass through untouched.
    WHITESPACE_RE
        .get_or_init(|| Regex::new(r"[\t\n\x0C\r ]+").expect("invalid built-in whitespace regex"))
}

/// Collapse every run of ASCII whitespace (space, tab, newline, carriage
/// return, form feed) into a single space and strip it from both ends.
///
/// This is what lets callers pass indented, multi-line fragment literals and
/// still get a single-line statement back.
pub fn normalize_whitespace(sql: &str) -> String {
    whitespace_run().replace_all(sql, " ").trim_matches(' ').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collapses_mixed_runs() {
        assert_eq!(normalize_whitespace("a\n\tb"), "a b");
        assert_eq!(normalize_whitespace("a    b \r\n c"), "a b c");
    }

    #[test]
    fn test_trims_ends() {
        assert_eq!(normalize_whitespace("\n  SELECT 1  \n"), "SELECT 1");
    }

    #[test]
    fn test_form_feed_collapses() {
        assert_eq!(normalize_whitespace("a\x0C\r\nb"), "a b");
    }

    #[test]
    fn test_unicode_spaces_preserved() {
        assert_eq!(normalize_whitespace("'a\u{a0}b'"), "'a\u{a0}b'");
        assert_eq!(
            normalize_whitespace("name = 'a\u{a0}\u{3000}b'\u{2003}"),
            "name = 'a\u{a0}\u{3000}b'\u{2003}"
        );
    }

    #[test]
    fn test_untouched() {
        assert_eq!(normalize_whitespace("SELECT f FROM t"), "SELECT f FROM t");
        assert_eq!(normalize_whitespace(""), "");
    }
}
