//! Archive author search.
//!
//! The pipeline is strictly sequential:
//!
//! 1. Extract the archive into a private scratch directory
//! 2. For every top-level file, in archive order, decode its text leniently
//!    and collect `"{author} - {text}"` lines whose author passes the filter
//! 3. Deduplicate and sort the lines of each file
//! 4. Render the grouped report
//!
//! The scratch directory is deleted before [`search`] returns, whether it
//! succeeds or fails.
//!
//! # Example
//!
//! ```rust,no_run
//! let report = chatgrep::search("export.zip", "alice")?;
//! print!("{report}");
//! # Ok::<(), chatgrep::ChatgrepError>(())
//! ```

use std::path::Path;

use tracing::{debug, info};

use crate::archive::ScratchArchive;
use crate::config::SearchConfig;
use crate::error::Result;
use crate::filter::AuthorFilter;
use crate::pattern::RecordPattern;
use crate::report::{ResultSet, SearchStats};

/// Searches `archive_path` for records whose author contains
/// `author_substring` and returns the plain-text report.
///
/// An empty `author_substring` matches every author. A search without any
/// match returns an empty string.
///
/// # Errors
///
/// - [`ChatgrepError::ArchiveUnreadable`](crate::ChatgrepError::ArchiveUnreadable)
///   if the path isn't a readable ZIP archive
/// - [`ChatgrepError::ArchiveIo`](crate::ChatgrepError::ArchiveIo) if
///   extraction or reading extracted files fails
pub fn search(archive_path: impl AsRef<Path>, author_substring: &str) -> Result<String> {
    let outcome = Searcher::new().search_archive(archive_path.as_ref(), author_substring)?;
    Ok(outcome.results.render_text())
}

/// Result of one [`Searcher::search_archive`] call.
#[derive(Debug, Clone, Default)]
pub struct SearchOutcome {
    /// Matches grouped per file.
    pub results: ResultSet,
    /// Counters for the run.
    pub stats: SearchStats,
}

impl SearchOutcome {
    /// Renders the plain-text report.
    pub fn render_text(&self) -> String {
        self.results.render_text()
    }
}

/// Reusable searcher holding a compiled pattern and configuration.
///
/// # Example
///
/// ```rust,no_run
/// use chatgrep::config::SearchConfig;
/// use chatgrep::search::Searcher;
///
/// let searcher = Searcher::with_config(SearchConfig::new().with_ignore_case(true))?;
/// let outcome = searcher.search_archive("export.zip".as_ref(), "ALICE")?;
/// println!("{} lines in {} files", outcome.stats.unique_lines, outcome.results.len());
/// # Ok::<(), chatgrep::ChatgrepError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Searcher {
    pattern: RecordPattern,
    config: SearchConfig,
}

impl Searcher {
    /// Creates a searcher with the default pattern and configuration.
    pub fn new() -> Self {
        Self {
            pattern: RecordPattern::new(),
            config: SearchConfig::default(),
        }
    }

    /// Creates a searcher from a configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ChatgrepError::InvalidPattern`](crate::ChatgrepError::InvalidPattern)
    /// if the configured pattern is unusable.
    pub fn with_config(config: SearchConfig) -> Result<Self> {
        let pattern = config.record_pattern()?;
        Ok(Self { pattern, config })
    }

    /// Runs the search and returns grouped results with statistics.
    pub fn search_archive(
        &self,
        archive_path: &Path,
        author_substring: &str,
    ) -> Result<SearchOutcome> {
        let filter = AuthorFilter::new(author_substring).ignore_case(self.config.ignore_case);
        let scratch = ScratchArchive::extract(archive_path, self.config.scratch_root.as_deref())?;

        let mut stats = SearchStats {
            entries_extracted: scratch.extracted_count(),
            ..SearchStats::default()
        };
        let mut results = ResultSet::new();

        for entry in scratch.entries() {
            let entry = entry?;
            let (lines, found) = self.scan(&entry.raw_content, &filter);

            debug!(
                file = %entry.name,
                found,
                matched = lines.len(),
                "Scanned entry"
            );

            stats.entries_scanned += 1;
            stats.records_found += found;
            stats.records_matched += lines.len();
            results.insert(entry.name, lines);
        }

        scratch.close()?;
        stats.unique_lines = results.total_lines();

        info!(
            archive = %archive_path.display(),
            files = results.len(),
            lines = stats.unique_lines,
            "Search finished"
        );

        Ok(SearchOutcome { results, stats })
    }

    /// Scans one text for matching lines. Returns the lines and the number
    /// of records found before filtering.
    pub fn scan(&self, content: &str, filter: &AuthorFilter) -> (Vec<String>, usize) {
        let mut found = 0;
        let lines = self
            .pattern
            .records(content)
            .inspect(|_| found += 1)
            .filter(|record| filter.accepts(record))
            .map(|record| record.to_line())
            .collect();
        (lines, found)
    }
}

impl Default for Searcher {
    fn default() -> Self {
        Self::new()
    }
}
