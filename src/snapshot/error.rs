//! Snapshot loading error types

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading or parsing a snapshot
///
/// These stay at the collaborator boundary: the comparator itself is never
/// invoked with partial data, so every failure here aborts (or degrades)
/// before the comparison starts.
#[derive(Error, Debug)]
pub enum SnapshotError {
    /// Snapshot file does not exist
    #[error("snapshot file not found: {path}")]
    NotFound {
        /// Path that was looked up
        path: PathBuf,
    },

    /// Snapshot text is not a valid JSON array of size records
    #[error("invalid snapshot data in {source_name}")]
    InvalidJson {
        /// Where the text came from (file path or "<stdin>")
        source_name: String,
        #[source]
        /// Underlying parse error
        source: serde_json::Error,
    },

    /// A record carries a negative size value
    #[error("negative {field} for label '{label}'")]
    NegativeSize {
        /// Record label
        label: String,
        /// Offending field name
        field: &'static str,
    },

    /// No embedded chart-data assignment found in an HTML document
    #[error("chartData not found in {source_name}")]
    ChartDataMissing {
        /// Where the document came from
        source_name: String,
    },

    /// I/O failure while reading a snapshot file
    #[error("failed to read {path}")]
    Io {
        /// Path being read
        path: PathBuf,
        #[source]
        /// IO error source
        source: std::io::Error,
    },
}
