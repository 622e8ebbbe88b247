//! Search configuration.
//!
//! [`SearchConfig`] holds the knobs around the core search: an optional
//! custom record pattern, case handling for the author filter, and where the
//! scratch directory is created. The defaults reproduce the plain
//! case-sensitive search with the built-in pattern.
//!
//! # Example
//!
//! ```rust
//! use chatgrep::config::SearchConfig;
//!
//! let config = SearchConfig::new()
//!     .with_ignore_case(true)
//!     .with_scratch_root("/var/tmp");
//!
//! assert!(config.ignore_case);
//! assert!(config.pattern.is_none());
//! ```

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::pattern::RecordPattern;

/// Configuration for a [`Searcher`](crate::search::Searcher).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Custom extraction regex with `author` and `text` named groups
    /// (default: built-in pattern)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,

    /// Match authors case-insensitively (default: false)
    pub ignore_case: bool,

    /// Directory under which the scratch directory is created
    /// (default: system temp dir)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scratch_root: Option<PathBuf>,
}

impl SearchConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a custom extraction pattern.
    #[must_use]
    pub fn with_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.pattern = Some(pattern.into());
        self
    }

    /// Enables or disables case-insensitive author matching.
    #[must_use]
    pub fn with_ignore_case(mut self, enabled: bool) -> Self {
        self.ignore_case = enabled;
        self
    }

    /// Sets the parent directory for scratch directories.
    #[must_use]
    pub fn with_scratch_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.scratch_root = Some(root.into());
        self
    }

    /// Compiles the configured pattern.
    pub fn record_pattern(&self) -> Result<RecordPattern> {
        RecordPattern::from_option(self.pattern.as_deref())
    }
}
