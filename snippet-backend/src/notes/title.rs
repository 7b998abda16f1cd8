//! Title normalization used as the comparison key for every lookup.

/// Fold a title into its comparison key: trimmed and lowercased.
pub fn normalize(title: &str) -> String {
    title.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_folds_case_and_whitespace() {
        assert_eq!(normalize("  Foo  "), "foo");
        assert_eq!(normalize("FOO"), normalize("foo"));
        assert_eq!(normalize("Weekly Report"), "weekly report");
    }

    #[test]
    fn test_normalize_keeps_inner_whitespace() {
        assert_eq!(normalize("a  b"), "a  b");
    }

    #[test]
    fn test_normalize_non_ascii() {
        assert_eq!(normalize("ÄRGER"), "ärger");
        assert_eq!(normalize("Привет"), normalize("ПРИВЕТ"));
    }

    #[test]
    fn test_normalize_blank() {
        assert!(normalize("   ").is_empty());
    }
}
