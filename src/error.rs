//! Unified error types for chatgrep.
//!
//! This module provides a single [`ChatgrepError`] enum that covers all error
//! cases in the library. Fatal archive problems propagate unchanged to the
//! caller; text decoding problems inside entries never surface here because
//! entry content is decoded leniently.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// A specialized [`Result`] type for chatgrep operations.
///
/// # Example
///
/// ```rust
/// use chatgrep::error::Result;
///
/// fn my_function() -> Result<String> {
///     // ... operations that may fail
///     Ok(String::new())
/// }
/// ```
pub type Result<T> = std::result::Result<T, ChatgrepError>;

/// The error type for all chatgrep operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ChatgrepError {
    /// The input path does not reference a readable ZIP archive.
    ///
    /// This happens when:
    /// - The file doesn't exist or can't be opened
    /// - The file is not a ZIP container (bad signature, truncated directory)
    /// - An entry uses a compression method or encryption that isn't supported
    #[error("Cannot read archive {}: {source}", path.display())]
    ArchiveUnreadable {
        /// Path of the archive that was requested
        path: PathBuf,
        /// What went wrong while opening it
        #[source]
        source: ArchiveErrorKind,
    },

    /// Extraction or reading of extracted entries failed.
    ///
    /// This occurs when:
    /// - The scratch directory can't be created
    /// - Disk is full or permission is denied while writing entries
    /// - An entry's compressed data is corrupted
    #[error("I/O error while extracting {}: {source}", path.display())]
    ArchiveIo {
        /// The archive, scratch file or entry path involved
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: io::Error,
    },

    /// A custom record pattern is unusable.
    ///
    /// The pattern must compile and expose `author` and `text` named groups.
    #[error("Invalid record pattern '{pattern}': {message}")]
    InvalidPattern {
        /// The pattern that was supplied
        pattern: String,
        /// Description of what's wrong
        message: String,
    },

    /// The requested output format is unknown or not compiled in.
    #[error("Invalid {format} format: {message}")]
    InvalidFormat {
        /// The format category that was expected
        format: &'static str,
        /// Description of what's wrong
        message: String,
    },

    /// An I/O error occurred outside of extraction (writing reports).
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// CSV writing error.
    #[cfg(feature = "csv-output")]
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization error.
    #[cfg(feature = "json-output")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Kinds of failures when opening an archive.
#[derive(Debug, Error)]
pub enum ArchiveErrorKind {
    /// The archive file could not be opened
    #[error("{0}")]
    Open(#[from] io::Error),
    /// The file is not a valid ZIP container
    #[error("{0}")]
    Zip(#[from] zip::result::ZipError),
}

// ============================================================================
// Convenience constructors
// ============================================================================

impl ChatgrepError {
    /// Creates an unreadable-archive error from an I/O failure on open.
    pub fn archive_open(path: impl AsRef<Path>, source: io::Error) -> Self {
        ChatgrepError::ArchiveUnreadable {
            path: path.as_ref().to_path_buf(),
            source: ArchiveErrorKind::Open(source),
        }
    }

    /// Creates an unreadable-archive error from a ZIP format failure.
    pub fn archive_invalid(path: impl AsRef<Path>, source: zip::result::ZipError) -> Self {
        ChatgrepError::ArchiveUnreadable {
            path: path.as_ref().to_path_buf(),
            source: ArchiveErrorKind::Zip(source),
        }
    }

    /// Creates an extraction I/O error.
    pub fn archive_io(path: impl AsRef<Path>, source: io::Error) -> Self {
        ChatgrepError::ArchiveIo {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Creates an invalid pattern error.
    pub fn invalid_pattern(pattern: impl Into<String>, message: impl Into<String>) -> Self {
        ChatgrepError::InvalidPattern {
            pattern: pattern.into(),
            message: message.into(),
        }
    }

    /// Creates an invalid format error.
    pub fn invalid_format(format: &'static str, message: impl Into<String>) -> Self {
        ChatgrepError::InvalidFormat {
            format,
            message: message.into(),
        }
    }

    /// Returns `true` if the archive could not be opened as a ZIP.
    pub fn is_archive_unreadable(&self) -> bool {
        matches!(self, ChatgrepError::ArchiveUnreadable { .. })
    }

    /// Returns `true` if extraction failed at the I/O level.
    pub fn is_archive_io(&self) -> bool {
        matches!(self, ChatgrepError::ArchiveIo { .. })
    }

    /// Returns `true` if this is a pattern error.
    pub fn is_invalid_pattern(&self) -> bool {
        matches!(self, ChatgrepError::InvalidPattern { .. })
    }

    /// Returns `true` if this is an IO error.
    pub fn is_io(&self) -> bool {
        matches!(self, ChatgrepError::Io(_))
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_archive_open_display() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err = ChatgrepError::archive_open("/tmp/missing.zip", io_err);
        let display = err.to_string();
        assert!(display.contains("Cannot read archive"));
        assert!(display.contains("/tmp/missing.zip"));
        assert!(display.contains("file not found"));
    }

    #[test]
    fn test_archive_invalid_display() {
        let err = ChatgrepError::archive_invalid(
            "notes.zip",
            zip::result::ZipError::InvalidArchive("bad signature".into()),
        );
        let display = err.to_string();
        assert!(display.contains("notes.zip"));
        assert!(display.contains("bad signature"));
        assert!(err.is_archive_unreadable());
    }

    #[test]
    fn test_archive_io_display() {
        let io_err = io::Error::new(io::ErrorKind::PermissionDenied, "access denied");
        let err = ChatgrepError::archive_io("chat1.json", io_err);
        let display = err.to_string();
        assert!(display.contains("extracting"));
        assert!(display.contains("chat1.json"));
        assert!(display.contains("access denied"));
    }

    #[test]
    fn test_invalid_pattern_display() {
        let err = ChatgrepError::invalid_pattern("(", "unclosed group");
        let display = err.to_string();
        assert!(display.contains("'('"));
        assert!(display.contains("unclosed group"));
    }

    #[test]
    fn test_invalid_format_display() {
        let err = ChatgrepError::invalid_format("output", "unknown extension");
        assert!(err.to_string().contains("Invalid output format"));
    }

    #[test]
    fn test_error_source_chain() {
        use std::error::Error;
        let err = ChatgrepError::archive_io(
            "x.zip",
            io::Error::other("disk full"),
        );
        assert!(err.source().is_some());

        let err = ChatgrepError::archive_open(
            "x.zip",
            io::Error::new(io::ErrorKind::NotFound, "missing"),
        );
        let source = err.source().expect("unreadable error has a source");
        assert!(source.to_string().contains("missing"));
    }

    #[test]
    fn test_is_methods() {
        let io_err = ChatgrepError::Io(io::Error::new(io::ErrorKind::NotFound, ""));
        assert!(io_err.is_io());
        assert!(!io_err.is_archive_io());
        assert!(!io_err.is_archive_unreadable());
        assert!(!io_err.is_invalid_pattern());

        let extract_err = ChatgrepError::archive_io("a", io::Error::other("x"));
        assert!(extract_err.is_archive_io());
        assert!(!extract_err.is_io());

        let pattern_err = ChatgrepError::invalid_pattern("x", "y");
        assert!(pattern_err.is_invalid_pattern());
    }

    #[test]
    fn test_from_io_error() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: ChatgrepError = io_err.into();
        assert!(err.is_io());
    }

    #[cfg(feature = "json-output")]
    #[test]
    fn test_from_json_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("invalid").unwrap_err();
        let err: ChatgrepError = json_err.into();
        assert!(err.to_string().contains("JSON error"));
    }

    #[test]
    fn test_error_debug() {
        let err = ChatgrepError::invalid_pattern("x", "y");
        let debug = format!("{:?}", err);
        assert!(debug.contains("InvalidPattern"));
    }
}
