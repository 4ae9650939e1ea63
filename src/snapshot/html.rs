//! Embedded chart-data extraction from HTML report documents
//!
//! Bundle-analyzer reports embed their data as a script assignment of a JSON
//! array to `window.chartData`. Extraction is pattern-based and inherently
//! tied to that exact serialization, so a miss is a recoverable condition:
//! callers can degrade to an empty snapshot instead of aborting.

use regex::Regex;
use std::sync::OnceLock;

use crate::comparator::SizeRecord;

use super::error::SnapshotError;
use super::json::validate_records;

fn chart_data_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        // (?s) so the array may span lines; non-greedy up to the closing "];"
        Regex::new(r"(?s)<script[^>]*>\s*window\.chartData\s*=\s*(\[.*?\]);")
            .unwrap_or_else(|e| unreachable!("invalid chartData pattern: {e}"))
    })
}

/// Extract size records from an HTML report document
///
/// Looks for a `<script>` block assigning a JSON array to `window.chartData`
/// and parses that array. Returns [`SnapshotError::ChartDataMissing`] when
/// the document carries no such block.
///
/// # Examples
///
/// ```
/// use bundle_diff::snapshot::extract_chart_data;
///
/// let html = r#"<html><script>window.chartData = [
///     {"label":"main.js","statSize":1000,"parsedSize":800,"gzipSize":300}
/// ];</script></html>"#;
///
/// let records = extract_chart_data(html, "devReport.html")?;
/// assert_eq!(records[0].label, "main.js");
/// # Ok::<(), bundle_diff::snapshot::SnapshotError>(())
/// ```
pub fn extract_chart_data(html: &str, source_name: &str) -> Result<Vec<SizeRecord>, SnapshotError> {
    let captures =
        chart_data_pattern()
            .captures(html)
            .ok_or_else(|| SnapshotError::ChartDataMissing {
                source_name: source_name.to_string(),
            })?;

    let records: Vec<SizeRecord> =
        serde_json::from_str(&captures[1]).map_err(|source| SnapshotError::InvalidJson {
            source_name: source_name.to_string(),
            source,
        })?;

    validate_records(&records)?;

    log::debug!(
        "extracted {} records from embedded chartData in {}",
        records.len(),
        source_name
    );
    Ok(records)
}

/// Extract size records, degrading to an empty snapshot on a missing block
///
/// Reports the miss via a warning instead of failing the comparison
/// outright. Malformed JSON inside a present block still errors: that is a
/// data problem, not a missing-pattern problem.
pub fn extract_chart_data_or_empty(
    html: &str,
    source_name: &str,
) -> Result<Vec<SizeRecord>, SnapshotError> {
    match extract_chart_data(html, source_name) {
        Ok(records) => Ok(records),
        Err(SnapshotError::ChartDataMissing { .. }) => {
            log::warn!(
                "chartData not found in {}, treating as empty snapshot",
                source_name
            );
            Ok(Vec::new())
        }
        Err(e) => Err(e),
    }
}
