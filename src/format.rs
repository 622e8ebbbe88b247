//! Output formats for search results.
//!
//! - [`Text`](OutputFormat::Text) - the grouped plain-text report (default)
//! - [`Json`](OutputFormat::Json) - array of `{"file", "lines"}` objects
//! - [`Csv`](OutputFormat::Csv) - `File;Line` rows with semicolon delimiter
//!
//! # Example
//!
//! ```rust
//! # #[cfg(feature = "json-output")]
//! # fn example() -> chatgrep::Result<()> {
//! use chatgrep::format::{OutputFormat, to_format_string};
//! use chatgrep::report::ResultSet;
//!
//! let mut results = ResultSet::new();
//! results.insert("chat.json", vec!["alice - hi".into()]);
//!
//! let json = to_format_string(&results, OutputFormat::Json)?;
//! assert!(json.contains("\"file\": \"chat.json\""));
//!
//! let format = OutputFormat::from_path("report.csv")?;
//! assert_eq!(format, OutputFormat::Csv);
//! # Ok(())
//! # }
//! ```

use std::fs;
use std::path::Path;

use crate::error::{ChatgrepError, Result};
use crate::report::ResultSet;

/// Output format for search results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[non_exhaustive]
pub enum OutputFormat {
    /// Grouped plain-text report
    #[default]
    Text,

    /// Pretty-printed JSON array of per-file blocks
    Json,

    /// CSV with semicolon delimiter, one row per line
    Csv,
}

impl OutputFormat {
    /// Detects format from a file path based on extension.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let ext = path
            .as_ref()
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();

        match ext.as_str() {
            "txt" | "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            _ => Err(ChatgrepError::invalid_format(
                "output",
                format!("Unknown file extension: '.{ext}'. Expected one of: txt, json, csv"),
            )),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "Text"),
            OutputFormat::Json => write!(f, "JSON"),
            OutputFormat::Csv => write!(f, "CSV"),
        }
    }
}

/// Renders results in the given format.
///
/// # Errors
///
/// Returns [`ChatgrepError::InvalidFormat`] if the format's feature is
/// disabled, or a serialization error from the writer.
pub fn to_format_string(results: &ResultSet, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(results.render_text()),
        OutputFormat::Json => to_json(results),
        OutputFormat::Csv => to_csv(results),
    }
}

/// Writes results to `path` in the given format.
pub fn write_to_format(
    results: &ResultSet,
    path: impl AsRef<Path>,
    format: OutputFormat,
) -> Result<()> {
    let content = to_format_string(results, format)?;
    fs::write(path, content)?;
    Ok(())
}

/// Serializes results as a pretty JSON array.
#[cfg(feature = "json-output")]
pub fn to_json(results: &ResultSet) -> Result<String> {
    Ok(serde_json::to_string_pretty(results)?)
}

#[cfg(not(feature = "json-output"))]
fn to_json(_results: &ResultSet) -> Result<String> {
    Err(ChatgrepError::invalid_format(
        "output",
        "JSON output requires the 'json-output' feature",
    ))
}

/// Serializes results as `File;Line` CSV rows.
#[cfg(feature = "csv-output")]
pub fn to_csv(results: &ResultSet) -> Result<String> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(b';')
        .from_writer(Vec::new());

    writer.write_record(["File", "Line"])?;
    for block in results {
        for line in &block.lines {
            writer.write_record([block.file.as_str(), line.as_str()])?;
        }
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| ChatgrepError::Io(e.into_error()))?;
    String::from_utf8(bytes)
        .map_err(|e| ChatgrepError::invalid_format("output", format!("CSV is not UTF-8: {e}")))
}

#[cfg(not(feature = "csv-output"))]
fn to_csv(_results: &ResultSet) -> Result<String> {
    Err(ChatgrepError::invalid_format(
        "output",
        "CSV output requires the 'csv-output' feature",
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ResultSet {
        let mut results = ResultSet::new();
        results.insert("chat1.json", vec!["alice - hi".into()]);
        results.insert(
            "chat2.json",
            vec!["alicia - later".into(), "alice - say \"hey\"; ok".into()],
        );
        results
    }

    #[test]
    fn test_from_path() {
        assert_eq!(
            OutputFormat::from_path("out/report.JSON").unwrap(),
            OutputFormat::Json
        );
        assert_eq!(
            OutputFormat::from_path("report.txt").unwrap(),
            OutputFormat::Text
        );
        assert!(OutputFormat::from_path("report").is_err());
        assert!(OutputFormat::from_path("report.xml").is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(OutputFormat::Text.to_string(), "Text");
        assert_eq!(OutputFormat::Json.to_string(), "JSON");
        assert_eq!(OutputFormat::Csv.to_string(), "CSV");
    }

    #[test]
    fn test_text_matches_report() {
        let results = sample();
        assert_eq!(
            to_format_string(&results, OutputFormat::Text).unwrap(),
            results.render_text()
        );
    }

    #[cfg(feature = "json-output")]
    #[test]
    fn test_json_shape() {
        let json = to_format_string(&sample(), OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        let blocks = value.as_array().unwrap();
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0]["file"], "chat1.json");
        assert_eq!(blocks[1]["lines"][1], "alicia - later");
    }

    #[cfg(feature = "json-output")]
    #[test]
    fn test_json_empty() {
        let json = to_format_string(&ResultSet::new(), OutputFormat::Json).unwrap();
        assert_eq!(json, "[]");
    }

    #[cfg(feature = "csv-output")]
    #[test]
    fn test_csv_rows() {
        let out = to_format_string(&sample(), OutputFormat::Csv).unwrap();
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(b';')
            .from_reader(out.as_bytes());

        let headers = reader.headers().unwrap().clone();
        assert_eq!(&headers[0], "File");

        let rows: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 3);
        assert_eq!(&rows[1][0], "chat2.json");
        assert_eq!(&rows[1][1], "alice - say \"hey\"; ok");
    }

    #[test]
    fn test_write_to_format() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("report.txt");
        write_to_format(&sample(), &path, OutputFormat::Text).unwrap();
        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            sample().render_text()
        );
    }
}
