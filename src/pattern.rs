//! Record extraction pattern.
//!
//! Chat exports are scanned with a single tolerant regular expression instead
//! of a JSON parser, so malformed or partial files still yield records. The
//! default pattern expects JSON-like objects where an `"author"` field comes
//! before a `"text"` field on the same line:
//!
//! ```text
//! {"author": "alice", "id": 7, "text": "hi"}
//! ```
//!
//! Both quantifiers are non-greedy, so each match spans the shortest run from
//! an author field to the next text field. `.` does not cross newlines.
//!
//! # Example
//!
//! ```rust
//! use chatgrep::pattern::RecordPattern;
//!
//! let pattern = RecordPattern::new();
//! let records: Vec<_> = pattern
//!     .records(r#"{"author": "alice", "text": "hi"} {"author": "bob", "text": "yo"}"#)
//!     .collect();
//!
//! assert_eq!(records.len(), 2);
//! assert_eq!(records[1].author, "bob");
//! ```

use std::sync::LazyLock;

use regex::{CaptureMatches, Regex};

use crate::Record;
use crate::error::{ChatgrepError, Result};

/// Default pattern for `"author": "..."` followed by `"text": "..."`.
pub const DEFAULT_PATTERN: &str = r#""author": "(?P<author>.*?)",.*?"text": "(?P<text>.*?)""#;

/// Name of the capture group holding the author.
pub const AUTHOR_GROUP: &str = "author";

/// Name of the capture group holding the message text.
pub const TEXT_GROUP: &str = "text";

static DEFAULT_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(DEFAULT_PATTERN).expect("default record pattern is valid"));

/// Compiled extraction pattern with `author` and `text` groups.
#[derive(Debug, Clone)]
pub struct RecordPattern {
    regex: Regex,
}

impl RecordPattern {
    /// Returns the default pattern.
    pub fn new() -> Self {
        Self {
            regex: DEFAULT_REGEX.clone(),
        }
    }

    /// Compiles a custom pattern.
    ///
    /// # Errors
    ///
    /// Returns [`ChatgrepError::InvalidPattern`] if the expression doesn't
    /// compile or lacks either of the `author` / `text` named groups.
    ///
    /// # Example
    ///
    /// ```rust
    /// use chatgrep::pattern::RecordPattern;
    ///
    /// let pattern = RecordPattern::custom(r"(?P<author>\w+): (?P<text>.*)").unwrap();
    /// let record = pattern.records("alice: hello").next().unwrap();
    /// assert_eq!(record.text, "hello");
    ///
    /// assert!(RecordPattern::custom(r"(\w+): (.*)").is_err());
    /// ```
    pub fn custom(pattern: &str) -> Result<Self> {
        let regex = Regex::new(pattern)
            .map_err(|e| ChatgrepError::invalid_pattern(pattern, e.to_string()))?;

        for group in [AUTHOR_GROUP, TEXT_GROUP] {
            if !regex.capture_names().flatten().any(|name| name == group) {
                return Err(ChatgrepError::invalid_pattern(
                    pattern,
                    format!("missing named group '{group}'"),
                ));
            }
        }

        Ok(Self { regex })
    }

    /// Builds the pattern from an optional custom expression.
    pub fn from_option(pattern: Option<&str>) -> Result<Self> {
        match pattern {
            Some(p) => Self::custom(p),
            None => Ok(Self::new()),
        }
    }

    /// Returns the source expression.
    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }

    /// Iterates over all non-overlapping records in `content`.
    pub fn records<'r, 'c>(&'r self, content: &'c str) -> Records<'r, 'c> {
        Records {
            inner: self.regex.captures_iter(content),
        }
    }
}

impl Default for RecordPattern {
    fn default() -> Self {
        Self::new()
    }
}

/// Iterator over records found by a [`RecordPattern`].
pub struct Records<'r, 'c> {
    inner: CaptureMatches<'r, 'c>,
}

impl Iterator for Records<'_, '_> {
    type Item = Record;

    fn next(&mut self) -> Option<Self::Item> {
        // A custom pattern may leave a group unmatched (e.g. inside an
        // alternation); treat it as empty like an absent value.
        self.inner.next().map(|caps| {
            let author = caps.name(AUTHOR_GROUP).map_or("", |m| m.as_str());
            let text = caps.name(TEXT_GROUP).map_or("", |m| m.as_str());
            Record::new(author, text)
        })
    }
}
