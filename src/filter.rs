//! Filter records by author.
//!
//! The author query is a plain substring test. An empty query matches every
//! author, which is how "show everything" is expressed.
//!
//! # Examples
//!
//! ```
//! use chatgrep::filter::AuthorFilter;
//!
//! let filter = AuthorFilter::new("alice");
//! assert!(filter.matches("alice"));
//! assert!(filter.matches("alicia_alice_fan"));
//! assert!(!filter.matches("Alice")); // case-sensitive by default
//!
//! let filter = AuthorFilter::new("alice").ignore_case(true);
//! assert!(filter.matches("ALICE"));
//!
//! assert!(AuthorFilter::new("").matches("anyone"));
//! ```

use crate::Record;

/// Substring filter applied to record authors.
#[derive(Debug, Clone, Default)]
pub struct AuthorFilter {
    /// Query as given (or lowercased when `ignore_case` is set).
    query: String,

    /// Compare lowercased author and query.
    ignore_case: bool,
}

impl AuthorFilter {
    /// Creates a case-sensitive filter.
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ignore_case: false,
        }
    }

    /// Enables or disables case-insensitive matching.
    ///
    /// Uses Unicode lowercasing, so `"ИВАН"` matches `"иван"`.
    #[must_use]
    pub fn ignore_case(mut self, enabled: bool) -> Self {
        if enabled && !self.ignore_case {
            self.query = self.query.to_lowercase();
        }
        self.ignore_case = enabled;
        self
    }

    /// Returns the query string used for comparison.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Returns `true` if every author passes.
    pub fn matches_all(&self) -> bool {
        self.query.is_empty()
    }

    /// Returns `true` if `author` contains the query.
    pub fn matches(&self, author: &str) -> bool {
        if self.matches_all() {
            return true;
        }
        if self.ignore_case {
            author.to_lowercase().contains(&self.query)
        } else {
            author.contains(&self.query)
        }
    }

    /// Returns `true` if the record's author contains the query.
    pub fn accepts(&self, record: &Record) -> bool {
        self.matches(&record.author)
    }
}

/// Keeps the records whose author contains `filter`'s query.
pub fn apply_filter(records: Vec<Record>, filter: &AuthorFilter) -> Vec<Record> {
    if filter.matches_all() {
        return records;
    }

    records.into_iter().filter(|r| filter.accepts(r)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_substring_match() {
        let filter = AuthorFilter::new("alice");
        assert!(filter.matches("alice"));
        assert!(filter.matches("xalicex"));
        assert!(!filter.matches(""));
        // "alicia" diverges from "alice" at the fifth character
        assert!(!filter.matches("alicia"));
    }

    #[test]
    fn test_case_sensitive_by_default() {
        let filter = AuthorFilter::new("Alice");
        assert!(filter.matches("Alice"));
        assert!(!filter.matches("alice"));
    }

    #[test]
    fn test_ignore_case() {
        let filter = AuthorFilter::new("Alice").ignore_case(true);
        assert_eq!(filter.query(), "alice");
        assert!(filter.matches("ALICE"));
        assert!(filter.matches("alice"));
        assert!(!filter.matches("bob"));
    }

    #[test]
    fn test_ignore_case_unicode() {
        let filter = AuthorFilter::new("ИВАН").ignore_case(true);
        assert!(filter.matches("Иван Петров"));
    }

    #[test]
    fn test_empty_matches_everything() {
        let filter = AuthorFilter::new("");
        assert!(filter.matches_all());
        assert!(filter.matches(""));
        assert!(filter.matches("bob"));
    }

    #[test]
    fn test_apply_filter() {
        let records = vec![
            Record::new("alice", "hi"),
            Record::new("bob", "yo"),
            Record::new("alicia", "later"),
            Record::new("malice", "boo"),
        ];

        let filtered = apply_filter(records, &AuthorFilter::new("alic"));
        let authors: Vec<_> = filtered.iter().map(|r| r.author.as_str()).collect();
        assert_eq!(authors, vec!["alice", "alicia", "malice"]);
    }

    #[test]
    fn test_apply_filter_empty_query_passes_through() {
        let records = vec![Record::new("a", "1"), Record::new("b", "2")];
        let filtered = apply_filter(records.clone(), &AuthorFilter::new(""));
        assert_eq!(filtered, records);
    }
}
