//! # Chatgrep
//!
//! Search zipped chat exports for messages written by a given author.
//!
//! ## Overview
//!
//! Chat exports often arrive as a ZIP of loosely formatted JSON-like files.
//! Chatgrep unpacks such an archive into a private scratch directory, scans
//! every top-level file for `"author": "..."` / `"text": "..."` pairs with a
//! tolerant pattern, keeps the pairs whose author contains the query, and
//! returns a report grouped by file with duplicates removed and lines sorted.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! fn main() -> chatgrep::Result<()> {
//!     let report = chatgrep::search("export.zip", "alic")?;
//!     print!("{report}");
//!     Ok(())
//! }
//! ```
//!
//! For an archive holding `chat1.json` and `chat2.json`, the report looks
//! like this:
//!
//! ```text
//! In file chat1.json:
//! alice - hi
//!
//!
//! In file chat2.json:
//! alice - hi
//! alicia - later
//!
//! ```
//!
//! ## Module Structure
//!
//! - [`search`] - [`search()`] entry point and the configurable [`Searcher`](search::Searcher)
//! - [`archive`] - scratch-directory extraction ([`ScratchArchive`](archive::ScratchArchive))
//! - [`pattern`] - record extraction pattern ([`RecordPattern`](pattern::RecordPattern))
//! - [`filter`] - author substring filter ([`AuthorFilter`](filter::AuthorFilter))
//! - [`report`] - [`ResultSet`](report::ResultSet) and [`SearchStats`](report::SearchStats)
//! - [`format`] - text, JSON and CSV output
//! - [`config`] - [`SearchConfig`](config::SearchConfig)
//! - [`error`] - unified error types ([`ChatgrepError`], [`Result`])
//! - [`prelude`] - convenient re-exports

pub mod archive;
#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod error;
pub mod filter;
pub mod format;
#[cfg(feature = "cli")]
pub mod logging;
pub mod pattern;
pub mod record;
pub mod report;
pub mod search;

// Re-export the main types at the crate root for convenience
pub use error::{ChatgrepError, Result};
pub use record::Record;
pub use search::search;

/// Convenient re-exports for common usage.
///
/// ```rust
/// use chatgrep::prelude::*;
/// ```
pub mod prelude {
    pub use crate::Record;

    pub use crate::error::{ChatgrepError, Result};

    pub use crate::search::{SearchOutcome, Searcher, search};

    pub use crate::config::SearchConfig;

    pub use crate::archive::{ArchiveEntry, ScratchArchive};

    pub use crate::filter::{AuthorFilter, apply_filter};

    pub use crate::pattern::RecordPattern;

    pub use crate::report::{FileMatches, ResultSet, SearchStats};

    pub use crate::format::{OutputFormat, to_format_string, write_to_format};
}
