//! Archive extraction into a scoped scratch directory.
//!
//! [`ScratchArchive::extract`] unpacks every entry of a ZIP container into a
//! fresh [`TempDir`]. The directory and everything extracted into it is
//! removed when the [`ScratchArchive`] is dropped, on success and error paths
//! alike, because the `TempDir` is owned before the first byte is written.
//!
//! Only top-level files are scanned later on. Nested entries are still
//! extracted, but [`ScratchArchive::entries`] never descends into them.
//!
//! # Example
//!
//! ```rust,no_run
//! use chatgrep::archive::ScratchArchive;
//!
//! let scratch = ScratchArchive::extract("export.zip".as_ref(), None)?;
//! for name in scratch.top_level_files() {
//!     let entry = scratch.load(name)?;
//!     println!("{}: {} bytes", entry.name, entry.raw_content.len());
//! }
//! # Ok::<(), chatgrep::ChatgrepError>(())
//! ```

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Component, Path};

use tempfile::{Builder, TempDir};
use tracing::{debug, warn};
use zip::ZipArchive;
use zip::result::ZipError;

use crate::error::{ChatgrepError, Result};

/// Prefix of scratch directory names.
const SCRATCH_PREFIX: &str = "chatgrep-";

/// One extracted file with its leniently decoded content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveEntry {
    /// Entry name as stored in the archive.
    pub name: String,

    /// Content decoded as UTF-8; invalid sequences become U+FFFD.
    pub raw_content: String,
}

impl ArchiveEntry {
    /// Decodes raw bytes into an entry, replacing invalid UTF-8.
    pub fn from_bytes(name: impl Into<String>, bytes: &[u8]) -> Self {
        Self {
            name: name.into(),
            raw_content: String::from_utf8_lossy(bytes).into_owned(),
        }
    }
}

/// An archive fully extracted into a private temporary directory.
///
/// Dropping the value deletes the directory tree.
#[derive(Debug)]
pub struct ScratchArchive {
    dir: TempDir,
    top_level: Vec<String>,
    extracted: usize,
}

impl ScratchArchive {
    /// Extracts `archive_path` into a new scratch directory.
    ///
    /// The scratch directory is created under `scratch_root`, or the system
    /// temporary directory when `None`. Every call gets its own directory.
    ///
    /// # Errors
    ///
    /// - [`ChatgrepError::ArchiveUnreadable`] if the file can't be opened,
    ///   isn't a ZIP container, or holds an entry with an unsupported
    ///   compression method or encryption.
    /// - [`ChatgrepError::ArchiveIo`] if the scratch directory can't be
    ///   created or any entry fails to extract.
    pub fn extract(archive_path: &Path, scratch_root: Option<&Path>) -> Result<Self> {
        let file = File::open(archive_path)
            .map_err(|e| ChatgrepError::archive_open(archive_path, e))?;
        let mut archive =
            ZipArchive::new(file).map_err(|e| ChatgrepError::archive_invalid(archive_path, e))?;

        let dir = create_scratch_dir(scratch_root)?;
        debug!(
            archive = %archive_path.display(),
            scratch = %dir.path().display(),
            entries = archive.len(),
            "Extracting archive"
        );

        let mut scratch = Self {
            dir,
            top_level: Vec::new(),
            extracted: 0,
        };

        for index in 0..archive.len() {
            let mut entry = archive
                .by_index(index)
                .map_err(|e| entry_error(archive_path, e))?;

            let Some(relative) = entry.enclosed_name() else {
                warn!(name = entry.name(), "Skipping entry with unsafe path");
                continue;
            };
            let target = scratch.dir.path().join(&relative);

            if entry.is_dir() {
                fs::create_dir_all(&target).map_err(|e| ChatgrepError::archive_io(&target, e))?;
                continue;
            }

            if let Some(parent) = target.parent() {
                fs::create_dir_all(parent).map_err(|e| ChatgrepError::archive_io(parent, e))?;
            }

            let out = File::create(&target).map_err(|e| ChatgrepError::archive_io(&target, e))?;
            let mut writer = BufWriter::new(out);
            io::copy(&mut entry, &mut writer)
                .and_then(|_| writer.flush())
                .map_err(|e| ChatgrepError::archive_io(&target, e))?;
            scratch.extracted += 1;

            if let Some(name) = top_level_name(&relative) {
                if !scratch.top_level.contains(&name) {
                    scratch.top_level.push(name);
                }
            }
        }

        Ok(scratch)
    }

    /// Path of the scratch directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Number of file entries written to disk.
    pub fn extracted_count(&self) -> usize {
        self.extracted
    }

    /// Names of extracted top-level files, in archive order.
    ///
    /// A name stored twice in the archive appears once, at its first
    /// position; the file on disk holds the last copy written.
    pub fn top_level_files(&self) -> &[String] {
        &self.top_level
    }

    /// Reads one top-level file and decodes it leniently.
    ///
    /// # Errors
    ///
    /// Returns [`ChatgrepError::ArchiveIo`] if the file can't be read.
    pub fn load(&self, name: &str) -> Result<ArchiveEntry> {
        let path = self.dir.path().join(name);
        let bytes = fs::read(&path).map_err(|e| ChatgrepError::archive_io(&path, e))?;
        Ok(ArchiveEntry::from_bytes(name, &bytes))
    }

    /// Loads all top-level files in archive order.
    pub fn entries(&self) -> impl Iterator<Item = Result<ArchiveEntry>> + '_ {
        self.top_level.iter().map(|name| self.load(name))
    }

    /// Deletes the scratch directory now, reporting failures.
    ///
    /// Dropping the value does the same but swallows errors.
    pub fn close(self) -> Result<()> {
        let path = self.dir.path().to_path_buf();
        self.dir
            .close()
            .map_err(|e| ChatgrepError::archive_io(path, e))
    }
}

fn create_scratch_dir(scratch_root: Option<&Path>) -> Result<TempDir> {
    let mut builder = Builder::new();
    builder.prefix(SCRATCH_PREFIX);

    match scratch_root {
        Some(root) => builder
            .tempdir_in(root)
            .map_err(|e| ChatgrepError::archive_io(root, e)),
        None => builder
            .tempdir()
            .map_err(|e| ChatgrepError::archive_io(std::env::temp_dir(), e)),
    }
}

/// Entries the crate can't decode make the whole archive unreadable;
/// anything else failing on open is an extraction I/O error.
fn entry_error(archive_path: &Path, error: ZipError) -> ChatgrepError {
    match error {
        ZipError::UnsupportedArchive(_)
        | ZipError::CompressionMethodNotSupported(_)
        | ZipError::InvalidPassword => ChatgrepError::archive_invalid(archive_path, error),
        ZipError::Io(e) => ChatgrepError::archive_io(archive_path, e),
        other => ChatgrepError::archive_io(archive_path, io::Error::other(other)),
    }
}

/// Returns the file name if `relative` has no directory part.
fn top_level_name(relative: &Path) -> Option<String> {
    let mut components = relative
        .components()
        .filter(|c| !matches!(c, Component::CurDir));
    match (components.next(), components.next()) {
        (Some(Component::Normal(name)), None) => Some(name.to_string_lossy().into_owned()),
        _ => None,
    }
}
