//! Name-based exclusion of directory entries

use std::ffi::OsStr;

use glob::Pattern;
use tracing::warn;

/// Excludes hidden entries and entries matching ignore patterns.
/// Excluded entries are neither shown nor counted.
#[derive(Debug, Clone, Default)]
pub struct EntryFilter {
    patterns: Vec<Pattern>,
}

impl EntryFilter {
    /// Compile ignore patterns. Invalid patterns are logged and skipped.
    pub fn new(patterns: &[String]) -> Self {
        let patterns = patterns
            .iter()
            .filter_map(|p| match Pattern::new(p) {
                Ok(pattern) => Some(pattern),
                Err(e) => {
                    warn!(pattern = %p, error = %e, "skipping invalid ignore pattern");
                    None
                }
            })
            .collect();
        Self { patterns }
    }

    /// Check if an entry name should be dropped from the listing.
    pub fn is_excluded(&self, name: &OsStr) -> bool {
        if is_hidden(name) {
            return true;
        }
        let name = name.to_string_lossy();
        self.patterns.iter().any(|p| p.matches(&name))
    }
}

/// Names starting with `.` are hidden.
pub fn is_hidden(name: &OsStr) -> bool {
    name.as_encoded_bytes().first() == Some(&b'.')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pattern_syntax() {
        let filter = EntryFilter::new(&[
            "test*".to_string(),
            "file?.rs".to_string(),
            "[a-z].txt".to_string(),
        ]);
        assert!(filter.is_excluded(OsStr::new("test_foo")));
        assert!(!filter.is_excluded(OsStr::new("foo_test")));
        assert!(filter.is_excluded(OsStr::new("file1.rs")));
        assert!(!filter.is_excluded(OsStr::new("file12.rs")));
        assert!(filter.is_excluded(OsStr::new("x.txt")));
        assert!(!filter.is_excluded(OsStr::new("X.txt")));
    }

    #[test]
    fn test_hidden_entries_excluded() {
        let filter = EntryFilter::default();
        assert!(filter.is_excluded(OsStr::new(".git")));
        assert!(filter.is_excluded(OsStr::new(".env")));
        assert!(!filter.is_excluded(OsStr::new("src")));
        assert!(!filter.is_excluded(OsStr::new("file.")));
    }

    #[test]
    fn test_ignore_patterns() {
        let filter = EntryFilter::new(&["target".to_string(), "*.log".to_string()]);
        assert!(filter.is_excluded(OsStr::new("target")));
        assert!(filter.is_excluded(OsStr::new("debug.log")));
        assert!(!filter.is_excluded(OsStr::new("main.rs")));
    }

    #[test]
    fn test_invalid_pattern_skipped() {
        let filter = EntryFilter::new(&["[".to_string(), "*.tmp".to_string()]);
        assert!(filter.is_excluded(OsStr::new("a.tmp")));
        assert!(!filter.is_excluded(OsStr::new("[")));
    }
}
