//! Author/text pairs found inside chat export entries.
//!
//! A [`Record`] is what the extraction pattern yields for every match. It is
//! not stored anywhere: search turns it into its formatted line right away
//! and only the line survives into the report.
//!
//! # Examples
//!
//! ```
//! use chatgrep::Record;
//!
//! let record = Record::new("alice", "hi");
//! assert_eq!(record.author(), "alice");
//! assert_eq!(record.to_line(), "alice - hi");
//! assert_eq!(record.to_string(), "alice - hi");
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

/// Separator placed between author and text in a formatted line.
pub const LINE_SEPARATOR: &str = " - ";

/// One author/text pair matched in an entry's content.
///
/// Both fields hold the raw captured text. Escapes such as `\n` or `\"` are
/// kept as they appear in the export.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Record {
    /// Captured value of the `"author"` field.
    pub author: String,

    /// Captured value of the `"text"` field.
    pub text: String,
}

impl Record {
    /// Creates a new record.
    pub fn new(author: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            author: author.into(),
            text: text.into(),
        }
    }

    /// Returns the author.
    #[inline]
    pub fn author(&self) -> &str {
        &self.author
    }

    /// Returns the message text.
    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Formats the record as a report line: `"{author} - {text}"`.
    pub fn to_line(&self) -> String {
        let mut line =
            String::with_capacity(self.author.len() + LINE_SEPARATOR.len() + self.text.len());
        line.push_str(&self.author);
        line.push_str(LINE_SEPARATOR);
        line.push_str(&self.text);
        line
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.author, LINE_SEPARATOR, self.text)
    }
}

impl<A, T> From<(A, T)> for Record
where
    A: Into<String>,
    T: Into<String>,
{
    fn from((author, text): (A, T)) -> Self {
        Self::new(author, text)
    }
}
