//! Grouping, deduplication and rendering of search results.
//!
//! [`ResultSet`] keeps one [`FileMatches`] block per archive entry that
//! produced at least one line. Blocks stay in the order entries were scanned;
//! lines inside a block are unique and sorted ascending.
//!
//! # Example
//!
//! ```
//! use chatgrep::report::ResultSet;
//!
//! let mut results = ResultSet::new();
//! results.insert("chat.json", vec!["bob - yo".into(), "alice - hi".into(), "bob - yo".into()]);
//! results.insert("empty.json", vec![]);
//!
//! assert_eq!(results.len(), 1);
//! assert_eq!(results.render_text(), "In file chat.json:\nalice - hi\nbob - yo\n\n");
//! ```

use std::collections::BTreeSet;
use std::fmt;

use serde::Serialize;

/// Unique, sorted lines found in one archive entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileMatches {
    /// Entry name.
    pub file: String,

    /// Formatted `"{author} - {text}"` lines, deduplicated and ascending.
    pub lines: Vec<String>,
}

impl FileMatches {
    /// Builds a block from raw lines, removing duplicates and sorting.
    pub fn new(file: impl Into<String>, lines: impl IntoIterator<Item = String>) -> Self {
        let unique: BTreeSet<String> = lines.into_iter().collect();
        Self {
            file: file.into(),
            lines: unique.into_iter().collect(),
        }
    }

    /// Header line printed above the block.
    pub fn header(&self) -> String {
        format!("In file {}:", self.file)
    }
}

/// Per-entry search results, in scan order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ResultSet {
    files: Vec<FileMatches>,
}

impl ResultSet {
    /// Creates an empty result set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds the lines found in `file`.
    ///
    /// Empty input is ignored so files without matches never get a block.
    /// Inserting the same file name again merges into its existing block
    /// without moving it.
    pub fn insert(&mut self, file: impl Into<String>, lines: Vec<String>) {
        if lines.is_empty() {
            return;
        }
        let file = file.into();

        if let Some(existing) = self.files.iter_mut().find(|m| m.file == file) {
            let merged = std::mem::take(&mut existing.lines).into_iter().chain(lines);
            *existing = FileMatches::new(file, merged);
        } else {
            self.files.push(FileMatches::new(file, lines));
        }
    }

    /// Number of files with matches.
    pub fn len(&self) -> usize {
        self.files.len()
    }

    /// Returns `true` if nothing matched.
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Total unique lines across all files.
    pub fn total_lines(&self) -> usize {
        self.files.iter().map(|m| m.lines.len()).sum()
    }

    /// Returns the block for `file`, if it matched.
    pub fn get(&self, file: &str) -> Option<&FileMatches> {
        self.files.iter().find(|m| m.file == file)
    }

    /// Iterates over blocks in scan order.
    pub fn iter(&self) -> std::slice::Iter<'_, FileMatches> {
        self.files.iter()
    }

    /// Renders the plain-text report.
    ///
    /// Each block is the header, its lines and a separator element holding a
    /// single newline; all elements are joined with `\n`. An empty set renders
    /// as an empty string.
    pub fn render_text(&self) -> String {
        let mut output: Vec<String> = Vec::with_capacity(self.total_lines() + self.len() * 2);
        for block in &self.files {
            output.push(block.header());
            output.extend(block.lines.iter().cloned());
            output.push("\n".to_string());
        }
        output.join("\n")
    }
}

impl fmt::Display for ResultSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render_text())
    }
}

impl<'a> IntoIterator for &'a ResultSet {
    type Item = &'a FileMatches;
    type IntoIter = std::slice::Iter<'a, FileMatches>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Counters collected during one search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SearchStats {
    /// File entries written to the scratch directory.
    pub entries_extracted: usize,
    /// Top-level files read and scanned.
    pub entries_scanned: usize,
    /// Pattern matches before filtering.
    pub records_found: usize,
    /// Matches whose author passed the filter.
    pub records_matched: usize,
    /// Lines left after per-file deduplication.
    pub unique_lines: usize,
}

impl SearchStats {
    /// Share of matched records removed as duplicates, in percent.
    pub fn duplicate_ratio(&self) -> f64 {
        if self.records_matched == 0 {
            return 0.0;
        }
        #[allow(clippy::cast_precision_loss)]
        let ratio = 1.0 - (self.unique_lines as f64 / self.records_matched as f64);
        ratio * 100.0
    }
}
