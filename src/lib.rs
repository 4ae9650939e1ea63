#![warn(missing_docs)]
#![warn(clippy::unwrap_used)]
#![cfg_attr(test, allow(clippy::unwrap_used))]

//! bundle-diff library
//!
//! Compares two snapshots of a web application's bundle-analysis data and
//! reports the differences: per-module deltas for raw, parsed, and gzip
//! sizes, aggregate totals, and the modules added or removed between the
//! snapshots. The comparison itself is a pure function; snapshot loading,
//! URL derivation, and rendering live in their own modules and can be used
//! programmatically in addition to the CLI interface.
//!
//! # Basic Example
//!
//! Comparing two in-memory snapshots:
//!
//! ```
//! use bundle_diff::comparator::{compare, SizeRecord};
//!
//! let old = vec![SizeRecord {
//!     label: "main.js".to_string(),
//!     stat_size: 1000.0,
//!     parsed_size: 800.0,
//!     gzip_size: 300.0,
//! }];
//! let new = vec![
//!     SizeRecord {
//!         label: "main.js".to_string(),
//!         stat_size: 1200.0,
//!         parsed_size: 850.0,
//!         gzip_size: 310.0,
//!     },
//!     SizeRecord {
//!         label: "lazy-chunk.js".to_string(),
//!         stat_size: 400.0,
//!         parsed_size: 350.0,
//!         gzip_size: 120.0,
//!     },
//! ];
//!
//! let report = compare(&old, &new);
//! assert_eq!(report.rows[0].stat_size.diff, 200.0);
//! assert_eq!(report.rows[0].stat_size.percentage, 20.0);
//! assert_eq!(report.added[0].label, "lazy-chunk.js");
//! // Totals cover matched modules only
//! assert_eq!(report.totals.stat_size.old_total, 1000.0);
//! ```
//!
//! # Advanced Example: Loading from a saved report
//!
//! Extracting the embedded snapshot from a bundle-analyzer HTML report:
//!
//! ```
//! use bundle_diff::snapshot::extract_chart_data;
//!
//! let html = r#"<script>window.chartData = [
//!     {"label":"vendor.js","statSize":5000,"parsedSize":4200,"gzipSize":1300}
//! ];</script>"#;
//!
//! let records = extract_chart_data(html, "prodReport.html")?;
//! assert_eq!(records[0].parsed_size, 4200.0);
//! # Ok::<(), bundle_diff::snapshot::SnapshotError>(())
//! ```

/// Command handlers for CLI operations
pub mod cmd;
/// Snapshot comparison core
pub mod comparator;
/// Enhanced error types with contextual suggestions
pub mod error;
/// Shared formatting utilities
pub mod fmt;
/// Report-URL derivation from bundle descriptors
pub mod locator;
/// Console rendering of comparison reports
pub mod report;
/// Snapshot loading adapters
pub mod snapshot;
/// Treemap export adapter for chart widgets
pub mod treemap;
