//! Enhanced error types with contextual suggestions
//!
//! Wraps the module-level error types with actionable messages, suggested
//! fixes, and sysexits-style exit codes for CI use.

use thiserror::Error;

use crate::locator::LocatorError;
use crate::snapshot::SnapshotError;

/// Top-level bundle-diff errors
#[derive(Error, Debug)]
pub enum BundleDiffError {
    /// Snapshot loading or parsing failed
    #[error("snapshot error: {0}")]
    Snapshot(#[from] SnapshotError),

    /// Report-URL derivation failed
    #[error("locator error: {0}")]
    Locator(#[from] LocatorError),

    /// Generic I/O error with context
    #[error("I/O error: {context}")]
    Io {
        /// Context about where the error occurred
        context: String,
        #[source]
        /// IO error source
        source: std::io::Error,
    },
}

impl BundleDiffError {
    /// Get actionable suggestion for resolving this error.
    pub fn suggestion(&self) -> Option<String> {
        match self {
            Self::Snapshot(SnapshotError::NotFound { path }) => Some(format!(
                "Ensure {} exists; snapshots are JSON arrays or saved HTML reports",
                path.display()
            )),
            Self::Snapshot(SnapshotError::InvalidJson { .. }) => Some(
                "Expected a JSON array of objects with label, statSize, parsedSize \
                 and gzipSize fields"
                    .to_string(),
            ),
            Self::Snapshot(SnapshotError::NegativeSize { .. }) => {
                Some("Size fields must be non-negative; regenerate the snapshot".to_string())
            }
            Self::Snapshot(SnapshotError::ChartDataMissing { .. }) => Some(
                "The document carries no 'window.chartData = [...]' assignment; \
                 save the full bundle-analyzer report page"
                    .to_string(),
            ),
            Self::Snapshot(SnapshotError::Io { .. }) | Self::Io { .. } => {
                Some("Check file permissions and that the path is accessible".to_string())
            }
            Self::Locator(LocatorError::Incomplete { missing }) => Some(format!(
                "Provide the missing locator fields: {}",
                missing.join(", ")
            )),
        }
    }

    /// Get appropriate exit code for this error.
    ///
    /// Follows sysexits.h conventions so CI pipelines can distinguish
    /// missing inputs from bad data and usage mistakes.
    ///
    /// # Examples
    ///
    /// ```
    /// use bundle_diff::error::BundleDiffError;
    /// use bundle_diff::snapshot::SnapshotError;
    ///
    /// let error = BundleDiffError::from(SnapshotError::NotFound {
    ///     path: "old.json".into(),
    /// });
    /// assert_eq!(error.exit_code(), 66); // EX_NOINPUT
    /// ```
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Snapshot(SnapshotError::NotFound { .. }) => 66, // EX_NOINPUT
            Self::Snapshot(SnapshotError::InvalidJson { .. }) => 65, // EX_DATAERR
            Self::Snapshot(SnapshotError::NegativeSize { .. }) => 65, // EX_DATAERR
            Self::Snapshot(SnapshotError::ChartDataMissing { .. }) => 65, // EX_DATAERR
            Self::Snapshot(SnapshotError::Io { .. }) => 74,       // EX_IOERR
            Self::Locator(_) => 64,                               // EX_USAGE
            Self::Io { .. } => 74,                                // EX_IOERR
        }
    }
}

/// Error formatter with colors and structured output
pub struct ErrorFormatter;

impl ErrorFormatter {
    /// Format error with cause chain and suggestions
    pub fn format(error: &anyhow::Error) -> String {
        use console::style;

        let mut output = String::new();

        output.push_str(&format!("{} {}\n", style("error:").red().bold(), error));

        let mut source = error.source();
        let mut indent = 1;
        while let Some(err) = source {
            output.push_str(&format!(
                "{}{} {}\n",
                "  ".repeat(indent),
                style("caused by:").yellow(),
                err
            ));
            source = err.source();
            indent += 1;
        }

        if let Some(bd_error) = error.downcast_ref::<BundleDiffError>() {
            if let Some(suggestion) = bd_error.suggestion() {
                output.push_str(&format!(
                    "\n{} {}\n",
                    style("suggestion:").cyan().bold(),
                    suggestion
                ));
            }
        }

        output
    }

    /// Exit code for an error, defaulting to 1 for untyped errors
    pub fn exit_code(error: &anyhow::Error) -> i32 {
        error
            .downcast_ref::<BundleDiffError>()
            .map(BundleDiffError::exit_code)
            .unwrap_or(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_not_found_maps_to_ex_noinput() {
        let error = BundleDiffError::from(SnapshotError::NotFound {
            path: "missing.json".into(),
        });
        assert_eq!(error.exit_code(), 66);
        assert!(error.suggestion().unwrap().contains("missing.json"));
    }

    #[test]
    fn test_invalid_json_maps_to_ex_dataerr() {
        let parse_err = serde_json::from_str::<Vec<i32>>("oops").unwrap_err();
        let error = BundleDiffError::from(SnapshotError::InvalidJson {
            source_name: "paste".to_string(),
            source: parse_err,
        });
        assert_eq!(error.exit_code(), 65);
        assert!(error.suggestion().unwrap().contains("statSize"));
    }

    #[test]
    fn test_incomplete_locator_maps_to_ex_usage() {
        let error = BundleDiffError::from(LocatorError::Incomplete {
            missing: vec!["workspace"],
        });
        assert_eq!(error.exit_code(), 64);
        assert!(error.suggestion().unwrap().contains("workspace"));
    }

    #[test]
    fn test_formatter_includes_suggestion_and_chain() {
        let error = anyhow::Error::from(BundleDiffError::from(SnapshotError::ChartDataMissing {
            source_name: "report.html".to_string(),
        }));

        let formatted = ErrorFormatter::format(&error);
        assert!(formatted.contains("error:"));
        assert!(formatted.contains("chartData"));
        assert!(formatted.contains("suggestion:"));
    }

    #[test]
    fn test_formatter_exit_code_defaults_to_one_for_untyped() {
        let error = anyhow::anyhow!("something else");
        assert_eq!(ErrorFormatter::exit_code(&error), 1);
    }
}
